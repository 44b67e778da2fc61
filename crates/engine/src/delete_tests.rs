// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use dbjobs_adapters::{FakeJobsApi, JobsCall};
use dbjobs_core::{JobId, JobSettings};

fn workspace() -> FakeJobsApi {
    FakeJobsApi::new()
        .with_jobs([
            JobSummary::new(1, "PR-12_init_test_job"),
            JobSummary::new(2, "nightly_etl"),
            JobSummary::new(3, "PR-12_smoke"),
            JobSummary::new(4, "PR-123_other"),
            JobSummary {
                job_id: JobId(5),
                settings: JobSettings::default(),
            },
        ])
        .with_page_size(2)
}

fn delete_calls(api: &FakeJobsApi) -> Vec<JobId> {
    api.calls()
        .into_iter()
        .filter_map(|c| match c {
            JobsCall::Delete { job_id } => Some(job_id),
            _ => None,
        })
        .collect()
}

#[test]
fn selects_by_prefix_across_pages() {
    let api = workspace();

    let selected = select_jobs_with_prefix(&api, "PR-12_").unwrap();

    let ids: Vec<i64> = selected.iter().map(|j| j.job_id.0).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn no_match_selects_nothing_and_deletes_nothing() {
    let api = workspace();

    let selected = select_jobs_with_prefix(&api, "PR-999_").unwrap();
    assert!(selected.is_empty());

    let report = delete_jobs(&api, selected, |_| {});
    assert!(report.deleted.is_empty());
    assert!(delete_calls(&api).is_empty());
}

#[test]
fn deletes_every_selected_job() {
    let api = workspace();
    let selected = select_jobs_with_prefix(&api, "PR-12").unwrap();

    let report = delete_jobs(&api, selected, |_| {});

    assert!(report.failed.is_empty());
    assert_eq!(report.deleted.len(), 3);
    assert_eq!(delete_calls(&api), vec![JobId(1), JobId(3), JobId(4)]);
    assert_eq!(api.jobs().len(), 2);
}

#[test]
fn failed_delete_does_not_stop_the_rest() {
    let api = workspace().fail_delete(JobId(1));
    let selected = select_jobs_with_prefix(&api, "PR-12_").unwrap();

    let mut events = Vec::new();
    let report = delete_jobs(&api, selected, |event| {
        events.push(match event {
            DeleteEvent::Deleting(job) => format!("deleting {}", job.job_id),
            DeleteEvent::Deleted(job) => format!("deleted {}", job.job_id),
            DeleteEvent::Failed(job, err) => format!("failed {} ({})", job.job_id, err.status().unwrap_or(0)),
        })
    });

    assert_eq!(
        events,
        vec!["deleting 1", "failed 1 (500)", "deleting 3", "deleted 3"]
    );
    assert!(!report.failed.is_empty());
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0.job_id, JobId(1));
    assert_eq!(delete_calls(&api), vec![JobId(1), JobId(3)]);
}

#[test]
fn listing_failure_is_fatal() {
    let api = workspace().fail_list(503);

    let err = select_jobs_with_prefix(&api, "PR-12_").unwrap_err();

    assert!(matches!(err, EngineError::Api(ref e) if e.status() == Some(503)));
    assert!(delete_calls(&api).is_empty());
}
