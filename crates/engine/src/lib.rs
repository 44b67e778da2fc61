// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dbjobs workflows: create, delete by prefix, run and wait
//!
//! Every workflow is a straight sequence of blocking calls against a
//! [`JobsApi`](dbjobs_adapters::JobsApi). No retries are attempted; the first
//! error is returned to the caller.

mod create;
mod delete;
mod error;
mod run;

pub use create::{create_job, list_all_jobs, prepare_template};
pub use delete::{delete_jobs, select_jobs_with_prefix, DeleteEvent, DeletionReport};
pub use error::EngineError;
pub use run::{
    resolve_job_id, trigger_run, wait_for_run, PollOptions, PollUpdate, DEFAULT_POLL_INTERVAL,
};
