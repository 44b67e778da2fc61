// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub const TOKEN: &str = "test-token";

/// `dbjobs` with credentials pointing at `host` and logging silenced
pub fn dbjobs(host: &str) -> Command {
    let mut cmd = Command::cargo_bin("dbjobs").unwrap();
    cmd.env("DATABRICKS_HOST", host)
        .env("DATABRICKS_TOKEN", TOKEN)
        .env_remove("DBJOBS_LOG")
        .env("DBJOBS_TIMEOUT_HTTP_MS", "5000");
    cmd
}

/// `dbjobs` with no credentials in the environment
pub fn dbjobs_without_credentials() -> Command {
    let mut cmd = Command::cargo_bin("dbjobs").unwrap();
    cmd.env_remove("DATABRICKS_HOST")
        .env_remove("DATABRICKS_TOKEN")
        .env_remove("DBJOBS_LOG");
    cmd
}

/// Write a job template into a fresh temp directory
pub fn write_template(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("init_test_job.json");
    std::fs::write(&path, content).expect("Failed to write template");
    (dir, path)
}

pub fn path_arg(path: &Path) -> String {
    path.display().to_string()
}
