// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for job workflows

use dbjobs_adapters::ApiError;
use dbjobs_core::{RunId, RunState, TemplateError};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while running a workflow
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("Job with name '{0}' not found")]
    JobNotFound(String),
    #[error("Job run failed with state: {message}")]
    RunFailed {
        run_id: RunId,
        message: String,
        state: Box<RunState>,
    },
    #[error("run {run_id} did not finish within {}s (last state: {})", .elapsed.as_secs(), .last.summary())]
    Timeout {
        run_id: RunId,
        elapsed: Duration,
        last: Box<RunState>,
    },
}
