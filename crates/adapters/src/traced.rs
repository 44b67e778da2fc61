// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrapper for consistent observability

use crate::jobs::{ApiError, JobsApi};
use dbjobs_core::{JobId, JobsPage, RunId, RunState};
use serde_json::Value;
use std::time::Instant;

/// Wrapper that adds tracing to any JobsApi
#[derive(Clone)]
pub struct TracedJobsApi<A> {
    inner: A,
}

impl<A> TracedJobsApi<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<A: JobsApi> JobsApi for TracedJobsApi<A> {
    fn create_job(&self, settings: &Value) -> Result<Value, ApiError> {
        let name = settings.get("name").and_then(Value::as_str).unwrap_or("");
        let span = tracing::info_span!("jobs.create", name);
        let _guard = span.enter();

        tracing::info!("creating job");
        let start = Instant::now();
        let result = self.inner.create_job(settings);
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(response) => tracing::info!(
                job_id = ?response.get("job_id"),
                elapsed_ms,
                "job created"
            ),
            Err(e) => tracing::debug!(elapsed_ms, error = %e, "create failed"),
        }

        result
    }

    fn list_jobs(&self, page_token: Option<&str>) -> Result<JobsPage, ApiError> {
        let span = tracing::debug_span!("jobs.list", page_token);
        let _guard = span.enter();

        let start = Instant::now();
        let result = self.inner.list_jobs(page_token);
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(page) => tracing::debug!(
                count = page.jobs.len(),
                more = page.next_token().is_some(),
                elapsed_ms,
                "listed page"
            ),
            Err(e) => tracing::debug!(elapsed_ms, error = %e, "list failed"),
        }

        result
    }

    fn delete_job(&self, job_id: JobId) -> Result<(), ApiError> {
        let span = tracing::info_span!("jobs.delete", job_id = job_id.0);
        let _guard = span.enter();

        let result = self.inner.delete_job(job_id);
        match &result {
            Ok(()) => tracing::info!("job deleted"),
            // The caller reports the failure to the user
            Err(e) => tracing::debug!(error = %e, "delete failed"),
        }

        result
    }

    fn run_now(&self, job_id: JobId) -> Result<RunId, ApiError> {
        let span = tracing::info_span!("jobs.run_now", job_id = job_id.0);
        let _guard = span.enter();

        let result = self.inner.run_now(job_id);
        match &result {
            Ok(run_id) => tracing::info!(run_id = run_id.0, "run triggered"),
            Err(e) => tracing::debug!(error = %e, "trigger failed"),
        }

        result
    }

    fn get_run(&self, run_id: RunId) -> Result<RunState, ApiError> {
        let result = self.inner.get_run(run_id);
        tracing::trace!(
            run_id = run_id.0,
            state = ?result.as_ref().ok().and_then(|s| s.life_cycle_state.as_ref()),
            "polled run"
        );
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
