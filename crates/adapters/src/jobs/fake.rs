// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake jobs adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{endpoints, ApiError, JobsApi, ResponseBody};
use dbjobs_core::{JobId, JobSummary, JobsPage, RunId, RunState};
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex};

/// Recorded jobs API call
#[derive(Debug, Clone, PartialEq)]
pub enum JobsCall {
    Create { settings: Value },
    List { page_token: Option<String> },
    Delete { job_id: JobId },
    RunNow { job_id: JobId },
    GetRun { run_id: RunId },
}

#[derive(Default)]
struct FakeState {
    jobs: Vec<JobSummary>,
    page_size: Option<usize>,
    next_job_id: i64,
    next_run_id: i64,
    /// States returned by successive `get_run` calls, per run
    run_states: HashMap<RunId, VecDeque<RunState>>,
    /// States handed to the next triggered run
    scripted_states: VecDeque<RunState>,
    failing_deletes: HashSet<JobId>,
    list_failure: Option<u16>,
    create_failure: Option<(u16, ResponseBody)>,
}

/// Fake jobs adapter for testing
///
/// Holds an in-memory job list served in pages of `page_size`. Page tokens
/// are the offset of the next page.
#[derive(Clone, Default)]
pub struct FakeJobsApi {
    state: Arc<Mutex<FakeState>>,
    calls: Arc<Mutex<Vec<JobsCall>>>,
}

impl FakeJobsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the job list
    pub fn with_jobs(self, jobs: impl IntoIterator<Item = JobSummary>) -> Self {
        {
            let mut state = self.lock();
            state.jobs.extend(jobs);
        }
        self
    }

    /// Serve `jobs/list` in pages of `size`
    pub fn with_page_size(self, size: usize) -> Self {
        self.lock().page_size = Some(size.max(1));
        self
    }

    /// States the next triggered run reports, one per poll. The last state
    /// repeats once the script is exhausted.
    pub fn with_run_states(self, states: impl IntoIterator<Item = RunState>) -> Self {
        self.lock().scripted_states = states.into_iter().collect();
        self
    }

    /// Make deletion of `job_id` fail with HTTP 500
    pub fn fail_delete(self, job_id: JobId) -> Self {
        self.lock().failing_deletes.insert(job_id);
        self
    }

    /// Make every `jobs/list` call fail with `status`
    pub fn fail_list(self, status: u16) -> Self {
        self.lock().list_failure = Some(status);
        self
    }

    /// Make `jobs/create` fail with `status` and `body`
    pub fn fail_create(self, status: u16, body: ResponseBody) -> Self {
        self.lock().create_failure = Some((status, body));
        self
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<JobsCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Jobs currently registered
    pub fn jobs(&self) -> Vec<JobSummary> {
        self.lock().jobs.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, call: JobsCall) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
    }
}

impl JobsApi for FakeJobsApi {
    fn create_job(&self, settings: &Value) -> Result<Value, ApiError> {
        self.record(JobsCall::Create {
            settings: settings.clone(),
        });
        let mut state = self.lock();
        if let Some((status, body)) = state.create_failure.clone() {
            return Err(ApiError::Status {
                endpoint: endpoints::CREATE,
                status,
                body,
            });
        }
        state.next_job_id += 1;
        let job_id = state.next_job_id;
        let name = settings
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default();
        state.jobs.push(JobSummary::new(job_id, name));
        Ok(json!({ "job_id": job_id }))
    }

    fn list_jobs(&self, page_token: Option<&str>) -> Result<JobsPage, ApiError> {
        self.record(JobsCall::List {
            page_token: page_token.map(str::to_string),
        });
        let state = self.lock();
        if let Some(status) = state.list_failure {
            return Err(ApiError::Status {
                endpoint: endpoints::LIST,
                status,
                body: ResponseBody::Text("list failed".into()),
            });
        }

        let start = page_token.and_then(|t| t.parse::<usize>().ok()).unwrap_or(0);
        let size = state.page_size.unwrap_or(usize::MAX);
        let end = start.saturating_add(size).min(state.jobs.len());
        let jobs = state.jobs.get(start..end).unwrap_or_default().to_vec();
        let next_page_token = (end < state.jobs.len()).then(|| end.to_string());
        Ok(JobsPage {
            jobs,
            next_page_token,
        })
    }

    fn delete_job(&self, job_id: JobId) -> Result<(), ApiError> {
        self.record(JobsCall::Delete { job_id });
        let mut state = self.lock();
        if state.failing_deletes.contains(&job_id) {
            return Err(ApiError::Status {
                endpoint: endpoints::DELETE,
                status: 500,
                body: ResponseBody::Text("delete failed".into()),
            });
        }
        state.jobs.retain(|j| j.job_id != job_id);
        Ok(())
    }

    fn run_now(&self, job_id: JobId) -> Result<RunId, ApiError> {
        self.record(JobsCall::RunNow { job_id });
        let mut state = self.lock();
        if !state.jobs.iter().any(|j| j.job_id == job_id) {
            return Err(ApiError::Status {
                endpoint: endpoints::RUN_NOW,
                status: 400,
                body: ResponseBody::Json(json!({
                    "error_code": "INVALID_PARAMETER_VALUE",
                    "message": format!("Job {} does not exist.", job_id),
                })),
            });
        }
        state.next_run_id += 1;
        let run_id = RunId(state.next_run_id);
        let script = std::mem::take(&mut state.scripted_states);
        state.run_states.insert(run_id, script);
        Ok(run_id)
    }

    fn get_run(&self, run_id: RunId) -> Result<RunState, ApiError> {
        self.record(JobsCall::GetRun { run_id });
        let mut state = self.lock();
        let Some(script) = state.run_states.get_mut(&run_id) else {
            return Err(ApiError::Status {
                endpoint: endpoints::RUNS_GET,
                status: 404,
                body: ResponseBody::Text(format!("run {} not found", run_id)),
            });
        };
        let current = if script.len() > 1 {
            script.pop_front()
        } else {
            script.front().cloned()
        };
        Ok(current.unwrap_or_default())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
