// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI integration tests for usage and configuration errors

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

mod common;

use common::{dbjobs_without_credentials, path_arg, write_template};
use predicates::prelude::*;

#[test]
fn test_help_lists_workflows() {
    dbjobs_without_credentials()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("run"));
}

#[test]
fn test_run_help_shows_poll_interval_default() {
    dbjobs_without_credentials()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--job_name"))
        .stdout(predicate::str::contains("--poll_interval"))
        .stdout(predicate::str::contains("default: 15"));
}

#[test]
fn test_create_requires_template_and_pr_id() {
    dbjobs_without_credentials()
        .args(["create", "--pr_id", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--job_template"));
}

#[test]
fn test_missing_credentials_fail_each_command() {
    let (_dir, template) = write_template(r#"{"name": "job"}"#);
    let template = path_arg(&template);

    let invocations: [&[&str]; 3] = [
        &["create", "--job_template", &template, "--pr_id", "42"],
        &["delete", "--job_name_prefix", "PR-42_"],
        &["run", "--job_name", "PR-42_job"],
    ];

    for args in invocations {
        dbjobs_without_credentials()
            .args(args)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("DATABRICKS_HOST"))
            .stdout(predicate::str::contains("Final job config").not());
    }
}

#[test]
fn test_empty_token_counts_as_missing() {
    dbjobs_without_credentials()
        .env("DATABRICKS_HOST", "http://127.0.0.1:1")
        .env("DATABRICKS_TOKEN", "")
        .args(["delete", "--job_name_prefix", "PR-1_"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing: DATABRICKS_TOKEN"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_completions_generate_script() {
    dbjobs_without_credentials()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dbjobs"));
}
