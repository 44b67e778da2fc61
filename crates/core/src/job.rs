// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job and run identifiers plus the list/trigger payloads
//!
//! Only the fields this tool reads are modelled; everything else the service
//! returns is ignored on deserialization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Service-assigned job identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub i64);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Service-assigned run identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(pub i64);

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One entry of the `jobs` array returned by `jobs/list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSummary {
    pub job_id: JobId,
    #[serde(default)]
    pub settings: JobSettings,
}

impl JobSummary {
    pub fn new(job_id: i64, name: impl Into<String>) -> Self {
        Self {
            job_id: JobId(job_id),
            settings: JobSettings {
                name: Some(name.into()),
            },
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.settings.name.as_deref()
    }
}

/// A single page of `jobs/list`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobsPage {
    #[serde(default)]
    pub jobs: Vec<JobSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl JobsPage {
    /// Token for the following page, if the service returned a non-empty one
    pub fn next_token(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Body for `jobs/delete` and `jobs/run-now`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRef {
    pub job_id: JobId,
}

/// Response of `jobs/run-now`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunNowResponse {
    pub run_id: RunId,
}
