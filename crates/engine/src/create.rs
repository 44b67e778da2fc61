// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job creation and listing

use crate::EngineError;
use dbjobs_adapters::{ApiError, JobsApi};
use dbjobs_core::{collect_pages, load_template, substitute_placeholders, JobSummary};
use serde_json::Value;
use std::path::Path;

/// Load a template from disk and apply the PR id and optional name prefix
pub fn prepare_template(
    path: &Path,
    pr_id: &str,
    name_prefix: Option<&str>,
) -> Result<Value, EngineError> {
    let mut template = load_template(path)?;
    substitute_placeholders(&mut template, pr_id, name_prefix)?;
    Ok(template)
}

/// Submit a prepared job definition; returns the service response
pub fn create_job<A: JobsApi>(api: &A, settings: &Value) -> Result<Value, EngineError> {
    Ok(api.create_job(settings)?)
}

/// Every job registered with the service, across all pages
pub fn list_all_jobs<A: JobsApi>(api: &A) -> Result<Vec<JobSummary>, ApiError> {
    collect_pages(|token| api.list_jobs(token))
}
