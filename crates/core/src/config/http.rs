// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP client tuning

use std::time::Duration;

/// Per-request timeout override, in milliseconds
pub const TIMEOUT_HTTP_VAR: &str = "DBJOBS_TIMEOUT_HTTP_MS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

fn parse_duration_ms(value: Option<String>) -> Option<Duration> {
    value
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Upper bound on a single request, connect through body read
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl HttpConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Unparseable values fall back to the default
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            timeout: parse_duration_ms(lookup(TIMEOUT_HTTP_VAR)).unwrap_or(DEFAULT_TIMEOUT),
        }
    }
}
