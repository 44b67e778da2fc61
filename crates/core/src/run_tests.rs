// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;
use yare::parameterized;

#[parameterized(
    terminated = { "TERMINATED", true },
    skipped = { "SKIPPED", true },
    internal_error = { "INTERNAL_ERROR", true },
    pending = { "PENDING", false },
    running = { "RUNNING", false },
    terminating = { "TERMINATING", false },
    queued = { "QUEUED", false },
    unknown = { "SOMETHING_NEW", false },
)]
fn terminal_states(raw: &str, terminal: bool) {
    assert_eq!(LifeCycleState::from(raw.to_string()).is_terminal(), terminal);
}

#[test]
fn unknown_states_round_trip_verbatim() {
    let state: RunState = serde_json::from_value(json!({
        "life_cycle_state": "SOMETHING_NEW",
        "result_state": "MAXIMUM_CONCURRENT_RUNS_REACHED"
    }))
    .unwrap();

    assert_eq!(
        state.life_cycle_state,
        Some(LifeCycleState::Other("SOMETHING_NEW".into()))
    );
    let back = serde_json::to_value(&state).unwrap();
    assert_eq!(back["result_state"], "MAXIMUM_CONCURRENT_RUNS_REACHED");
}

#[test]
fn missing_state_is_in_progress() {
    let status: RunStatus = serde_json::from_value(json!({"run_id": 3})).unwrap();
    assert_eq!(status.state.outcome(), RunOutcome::InProgress);
    assert_eq!(
        status.state.summary(),
        "life_cycle_state=None, result_state=None"
    );
}

#[test]
fn terminated_success_succeeds() {
    let state = RunState::new(LifeCycleState::Terminated, Some(ResultState::Success));
    assert_eq!(state.outcome(), RunOutcome::Succeeded);
}

#[test]
fn terminated_failure_carries_state_message() {
    let state = RunState::new(LifeCycleState::Terminated, Some(ResultState::Failed))
        .with_message("Task nb failed with message: boom");
    assert_eq!(
        state.outcome(),
        RunOutcome::Failed {
            message: "Task nb failed with message: boom".into()
        }
    );
}

#[test]
fn skipped_without_result_fails_with_serialized_state() {
    let state = RunState::new(LifeCycleState::Skipped, None);
    match state.outcome() {
        RunOutcome::Failed { message } => {
            assert!(message.contains("\"life_cycle_state\":\"SKIPPED\""));
        }
        other => panic!("expected failure, got {:?}", other),
    }
}

#[test]
fn success_result_before_terminal_is_still_in_progress() {
    let state = RunState::new(LifeCycleState::Terminating, Some(ResultState::Success));
    assert_eq!(state.outcome(), RunOutcome::InProgress);
}

#[test]
fn extra_fields_are_kept_for_diagnostics() {
    let state: RunState = serde_json::from_value(json!({
        "life_cycle_state": "INTERNAL_ERROR",
        "user_cancelled_or_timedout": false
    }))
    .unwrap();

    assert_eq!(state.extra["user_cancelled_or_timedout"], json!(false));
    assert!(state.failure_message().contains("user_cancelled_or_timedout"));
}

#[test]
fn summary_prints_both_states() {
    let state = RunState::new(LifeCycleState::Running, None);
    assert_eq!(state.summary(), "life_cycle_state=RUNNING, result_state=None");
}
