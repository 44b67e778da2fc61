// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Failures rendered for the person running a CI step.
//!
//! A [`CliError`] prints as one `Error:` line, followed by optional `note:`
//! lines describing what the service state is now and `hint:` lines with a
//! command or link to try next.

use dbjobs_core::{ConfigError, JobId, RunId};
use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;

type BoxedSource = Box<dyn StdError + Send + Sync>;

#[derive(Debug)]
pub struct CliError {
    pub message: String,
    /// State the user should know about, e.g. a run left running
    pub notes: Vec<String>,
    /// Next steps
    pub hints: Vec<String>,
    pub source: Option<BoxedSource>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            notes: Vec::new(),
            hints: Vec::new(),
            source: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error: {}", self.message)?;
        for note in &self.notes {
            writeln!(f, "  note: {}", note)?;
        }
        for hint in &self.hints {
            writeln!(f, "  hint: {}", hint)?;
        }
        Ok(())
    }
}

impl StdError for CliError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_deref().map(|e| e as &(dyn StdError + 'static))
    }
}

impl CliError {
    /// Credentials are missing from the environment.
    pub fn missing_credentials(err: ConfigError) -> Self {
        CliError::new(err.to_string())
            .with_hint("export DATABRICKS_HOST=https://<workspace>.cloud.databricks.com")
            .with_hint("export DATABRICKS_TOKEN=<personal access token>")
            .with_source(err)
    }

    /// No job carries the requested name.
    pub fn job_not_found(name: &str) -> Self {
        CliError::new(format!("Job with name '{}' not found", name))
            .with_note("Names must match exactly, including any PR prefix")
            .with_hint(
                "Create it first: dbjobs create --job_template <path> --pr_id <id> --job_name_prefix <prefix>",
            )
    }

    /// Listing jobs failed; nothing was deleted.
    pub fn list_failed<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        CliError::new(format!("Failed to list jobs: {}", err))
            .with_note("No jobs were deleted")
            .with_source(err)
    }

    /// A run finished without `SUCCESS`.
    pub fn run_failed(message: &str, host: &str, job_id: JobId, run_id: RunId) -> Self {
        CliError::new(format!("Job run failed with state: {}", message))
            .with_hint(format!(
                "Inspect the run: {}/#job/{}/run/{}",
                host, job_id, run_id
            ))
    }

    /// The optional poll deadline passed before the run finished.
    pub fn run_timed_out(run_id: RunId, elapsed: Duration, last_state: &str) -> Self {
        CliError::new(format!(
            "Run {} did not finish within {}",
            run_id,
            humantime::format_duration(elapsed)
        ))
        .with_note(format!("Last observed state: {}", last_state))
        .with_note("The run was not cancelled and keeps running on the service")
        .with_hint("Raise the limit with --timeout, or omit it to wait indefinitely")
    }
}
