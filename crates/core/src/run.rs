// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run state as reported by `jobs/runs/get`
//!
//! Lifecycle and result values are kept as enums for the states this tool
//! reasons about. Anything else the service reports is carried through as
//! `Other` so it can still be printed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Coarse execution phase of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LifeCycleState {
    Queued,
    Pending,
    Running,
    Terminating,
    Terminated,
    Skipped,
    InternalError,
    Blocked,
    WaitingForRetry,
    Other(String),
}

impl LifeCycleState {
    pub fn as_str(&self) -> &str {
        match self {
            LifeCycleState::Queued => "QUEUED",
            LifeCycleState::Pending => "PENDING",
            LifeCycleState::Running => "RUNNING",
            LifeCycleState::Terminating => "TERMINATING",
            LifeCycleState::Terminated => "TERMINATED",
            LifeCycleState::Skipped => "SKIPPED",
            LifeCycleState::InternalError => "INTERNAL_ERROR",
            LifeCycleState::Blocked => "BLOCKED",
            LifeCycleState::WaitingForRetry => "WAITING_FOR_RETRY",
            LifeCycleState::Other(s) => s,
        }
    }

    /// Whether polling should stop at this state
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            LifeCycleState::Terminated | LifeCycleState::Skipped | LifeCycleState::InternalError
        )
    }
}

impl From<String> for LifeCycleState {
    fn from(s: String) -> Self {
        match s.as_str() {
            "QUEUED" => LifeCycleState::Queued,
            "PENDING" => LifeCycleState::Pending,
            "RUNNING" => LifeCycleState::Running,
            "TERMINATING" => LifeCycleState::Terminating,
            "TERMINATED" => LifeCycleState::Terminated,
            "SKIPPED" => LifeCycleState::Skipped,
            "INTERNAL_ERROR" => LifeCycleState::InternalError,
            "BLOCKED" => LifeCycleState::Blocked,
            "WAITING_FOR_RETRY" => LifeCycleState::WaitingForRetry,
            _ => LifeCycleState::Other(s),
        }
    }
}

impl From<LifeCycleState> for String {
    fn from(state: LifeCycleState) -> Self {
        state.as_str().to_string()
    }
}

impl fmt::Display for LifeCycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome classification of a finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResultState {
    Success,
    Failed,
    Timedout,
    Canceled,
    Other(String),
}

impl ResultState {
    pub fn as_str(&self) -> &str {
        match self {
            ResultState::Success => "SUCCESS",
            ResultState::Failed => "FAILED",
            ResultState::Timedout => "TIMEDOUT",
            ResultState::Canceled => "CANCELED",
            ResultState::Other(s) => s,
        }
    }
}

impl From<String> for ResultState {
    fn from(s: String) -> Self {
        match s.as_str() {
            "SUCCESS" => ResultState::Success,
            "FAILED" => ResultState::Failed,
            "TIMEDOUT" => ResultState::Timedout,
            "CANCELED" => ResultState::Canceled,
            _ => ResultState::Other(s),
        }
    }
}

impl From<ResultState> for String {
    fn from(state: ResultState) -> Self {
        state.as_str().to_string()
    }
}

impl fmt::Display for ResultState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `state` object of a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life_cycle_state: Option<LifeCycleState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_state: Option<ResultState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_message: Option<String>,
    /// Fields this tool does not interpret, kept for diagnostics
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// What the poll loop should do after observing a state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Not terminal yet; keep polling
    InProgress,
    Succeeded,
    /// Terminal without `SUCCESS`
    Failed { message: String },
}

impl RunState {
    pub fn new(life_cycle: LifeCycleState, result: Option<ResultState>) -> Self {
        Self {
            life_cycle_state: Some(life_cycle),
            result_state: result,
            ..Self::default()
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.state_message = Some(message.into());
        self
    }

    pub fn is_terminal(&self) -> bool {
        self.life_cycle_state
            .as_ref()
            .is_some_and(LifeCycleState::is_terminal)
    }

    pub fn outcome(&self) -> RunOutcome {
        if !self.is_terminal() {
            return RunOutcome::InProgress;
        }
        match self.result_state {
            Some(ResultState::Success) => RunOutcome::Succeeded,
            _ => RunOutcome::Failed {
                message: self.failure_message(),
            },
        }
    }

    /// The service's message, or the whole state when there is none
    pub fn failure_message(&self) -> String {
        match self.state_message.as_deref() {
            Some(msg) if !msg.is_empty() => msg.to_string(),
            _ => serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self)),
        }
    }

    /// `life_cycle_state=..., result_state=...` with `None` for absent values
    pub fn summary(&self) -> String {
        fn or_none<T: fmt::Display>(v: &Option<T>) -> String {
            v.as_ref().map_or_else(|| "None".to_string(), ToString::to_string)
        }
        format!(
            "life_cycle_state={}, result_state={}",
            or_none(&self.life_cycle_state),
            or_none(&self.result_state)
        )
    }
}

/// Response of `jobs/runs/get`; only `state` is read
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStatus {
    #[serde(default)]
    pub state: RunState,
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
