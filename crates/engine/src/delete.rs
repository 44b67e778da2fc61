// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deleting jobs by name prefix
//!
//! Listing failures abort the workflow. Individual delete failures do not:
//! each one is reported and the remaining jobs are still processed.

use crate::{list_all_jobs, EngineError};
use dbjobs_adapters::{ApiError, JobsApi};
use dbjobs_core::JobSummary;

/// Progress notifications emitted while deleting
#[derive(Debug)]
pub enum DeleteEvent<'a> {
    Deleting(&'a JobSummary),
    Deleted(&'a JobSummary),
    Failed(&'a JobSummary, &'a ApiError),
}

/// Outcome of a batch delete
#[derive(Debug, Default)]
pub struct DeletionReport {
    pub deleted: Vec<JobSummary>,
    pub failed: Vec<(JobSummary, ApiError)>,
}

/// All jobs whose name starts with `prefix`. Unnamed jobs never match.
pub fn select_jobs_with_prefix<A: JobsApi>(
    api: &A,
    prefix: &str,
) -> Result<Vec<JobSummary>, EngineError> {
    let jobs = list_all_jobs(api)?;
    let total = jobs.len();
    let selected: Vec<JobSummary> = jobs
        .into_iter()
        .filter(|job| job.name().is_some_and(|name| name.starts_with(prefix)))
        .collect();

    tracing::info!(prefix, total, matched = selected.len(), "selected jobs");
    Ok(selected)
}

/// Delete each job in turn, continuing past failures
pub fn delete_jobs<A, F>(api: &A, jobs: Vec<JobSummary>, mut observer: F) -> DeletionReport
where
    A: JobsApi,
    F: FnMut(DeleteEvent<'_>),
{
    let mut report = DeletionReport::default();

    for job in jobs {
        observer(DeleteEvent::Deleting(&job));
        match api.delete_job(job.job_id) {
            Ok(()) => {
                observer(DeleteEvent::Deleted(&job));
                report.deleted.push(job);
            }
            Err(e) => {
                tracing::info!(job_id = job.job_id.0, "skipping job after failed delete");
                observer(DeleteEvent::Failed(&job, &e));
                report.failed.push((job, e));
            }
        }
    }

    report
}

#[cfg(test)]
#[path = "delete_tests.rs"]
mod tests;
