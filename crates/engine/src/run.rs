// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run a job by name and wait for it to finish

use crate::EngineError;
use dbjobs_adapters::JobsApi;
use dbjobs_core::{find_in_pages, Clock, JobId, RunId, RunOutcome, RunState};
use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(15);

/// Poll loop settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollOptions {
    /// Sleep before each status request
    pub interval: Duration,
    /// Give up after this much time; `None` polls until a terminal state
    pub timeout: Option<Duration>,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            timeout: None,
        }
    }
}

/// One observed run state
#[derive(Debug)]
pub struct PollUpdate<'a> {
    pub run_id: RunId,
    /// 1-based poll count
    pub attempt: u32,
    pub state: &'a RunState,
}

/// Id of the first job named exactly `name`
pub fn resolve_job_id<A: JobsApi>(api: &A, name: &str) -> Result<JobId, EngineError> {
    let found = find_in_pages(|token| api.list_jobs(token), |job| job.name() == Some(name))?;
    match found {
        Some(job) => {
            tracing::info!(name, job_id = job.job_id.0, "resolved job");
            Ok(job.job_id)
        }
        None => Err(EngineError::JobNotFound(name.to_string())),
    }
}

pub fn trigger_run<A: JobsApi>(api: &A, job_id: JobId) -> Result<RunId, EngineError> {
    Ok(api.run_now(job_id)?)
}

/// Poll a run until it reaches a terminal state.
///
/// Each iteration sleeps first, then fetches the state and hands it to
/// `on_poll`. Returns the final state when the run terminated with
/// `SUCCESS`; any other terminal combination is [`EngineError::RunFailed`].
/// Transport errors end the loop immediately.
pub fn wait_for_run<A, C, F>(
    api: &A,
    clock: &C,
    run_id: RunId,
    options: &PollOptions,
    mut on_poll: F,
) -> Result<RunState, EngineError>
where
    A: JobsApi,
    C: Clock,
    F: FnMut(PollUpdate<'_>),
{
    let started = clock.now();
    let mut attempt = 0u32;

    loop {
        clock.sleep(options.interval);

        let state = api.get_run(run_id)?;
        attempt = attempt.saturating_add(1);
        on_poll(PollUpdate {
            run_id,
            attempt,
            state: &state,
        });

        match state.outcome() {
            RunOutcome::Succeeded => {
                tracing::info!(run_id = run_id.0, attempt, "run succeeded");
                return Ok(state);
            }
            RunOutcome::Failed { message } => {
                tracing::info!(run_id = run_id.0, attempt, "run failed");
                return Err(EngineError::RunFailed {
                    run_id,
                    message,
                    state: Box::new(state),
                });
            }
            RunOutcome::InProgress => {
                let elapsed = clock.now().saturating_duration_since(started);
                if options.timeout.is_some_and(|limit| elapsed >= limit) {
                    return Err(EngineError::Timeout {
                        run_id,
                        elapsed,
                        last: Box::new(state),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
