// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dbjobs-core: domain types for the dbjobs CLI
//!
//! This crate provides:
//! - Job templates and PR placeholder substitution
//! - Job and run payload types, and run-state classification
//! - Token pagination over job listings
//! - Environment-based configuration
//! - A clock abstraction for the poll loop

pub mod clock;
pub mod config;
pub mod job;
pub mod paging;
pub mod run;
pub mod template;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ConfigError, Credentials, HttpConfig};
pub use job::{JobId, JobRef, JobSettings, JobSummary, JobsPage, RunId, RunNowResponse};
pub use paging::{collect_pages, find_in_pages};
pub use run::{LifeCycleState, ResultState, RunOutcome, RunState, RunStatus};
pub use template::{load_template, substitute_placeholders, TemplateError, PR_ID_PLACEHOLDER};
