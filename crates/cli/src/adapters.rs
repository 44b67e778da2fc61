// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Jobs API factory for CLI commands

use crate::error::CliError;
use dbjobs_adapters::{HttpJobsApi, TracedJobsApi};
use dbjobs_core::{Credentials, HttpConfig};

pub type Api = TracedJobsApi<HttpJobsApi>;

/// Create a production API client from the environment.
///
/// Fails before any network I/O when credentials are missing.
pub fn make_api() -> Result<Api, CliError> {
    let credentials = Credentials::from_env().map_err(CliError::missing_credentials)?;
    tracing::debug!(host = credentials.host(), "using workspace");
    let api = HttpJobsApi::new(credentials, &HttpConfig::from_env());
    Ok(TracedJobsApi::new(api))
}
