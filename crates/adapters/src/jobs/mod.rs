// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Jobs API adapters

mod http;

pub use http::HttpJobsApi;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeJobsApi, JobsCall};

use dbjobs_core::{JobId, JobsPage, RunId, RunState};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// REST paths, relative to the workspace host
pub mod endpoints {
    pub const CREATE: &str = "/api/2.1/jobs/create";
    pub const LIST: &str = "/api/2.1/jobs/list";
    pub const DELETE: &str = "/api/2.1/jobs/delete";
    pub const RUN_NOW: &str = "/api/2.1/jobs/run-now";
    pub const RUNS_GET: &str = "/api/2.1/jobs/runs/get";
}

/// Body of an error response, JSON when it parses
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    pub fn parse(text: String) -> Self {
        match serde_json::from_str(&text) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(text),
        }
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseBody::Json(value) => write!(f, "{}", value),
            ResponseBody::Text(text) => f.write_str(text),
        }
    }
}

/// Errors from jobs service calls
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{endpoint} returned HTTP {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: u16,
        body: ResponseBody,
    },
    #[error("request to {endpoint} failed: {message}")]
    Transport {
        endpoint: &'static str,
        message: String,
    },
    #[error("unexpected response from {endpoint}: {message}")]
    Decode {
        endpoint: &'static str,
        message: String,
    },
}

impl ApiError {
    /// HTTP status for errors the service answered with
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Adapter for the jobs service (create, list, delete, trigger, inspect)
pub trait JobsApi: Clone + Send + Sync + 'static {
    /// Create a job from a full job definition; returns the service response
    fn create_job(&self, settings: &Value) -> Result<Value, ApiError>;

    /// Fetch one page of jobs
    fn list_jobs(&self, page_token: Option<&str>) -> Result<JobsPage, ApiError>;

    fn delete_job(&self, job_id: JobId) -> Result<(), ApiError>;

    /// Trigger a run of an existing job
    fn run_now(&self, job_id: JobId) -> Result<RunId, ApiError>;

    /// Current state of a run
    fn get_run(&self, run_id: RunId) -> Result<RunState, ApiError>;
}
