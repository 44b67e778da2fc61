// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace host and bearer token

use std::fmt;
use thiserror::Error;

pub const HOST_VAR: &str = "DATABRICKS_HOST";
pub const TOKEN_VAR: &str = "DATABRICKS_TOKEN";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("DATABRICKS_HOST and DATABRICKS_TOKEN environment variables must be set (missing: {0})")]
    MissingEnv(&'static str),
}

/// Connection credentials for the jobs service
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    host: String,
    token: String,
}

impl Credentials {
    /// Build credentials directly. Trailing slashes are stripped from the host.
    pub fn new(host: impl Into<String>, token: impl Into<String>) -> Self {
        let host = host.into();
        Self {
            host: host.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Read credentials from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through an arbitrary variable lookup.
    ///
    /// Unset and empty values are both treated as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingEnv(name))
        };
        let host = read(HOST_VAR)?;
        let token = read(TOKEN_VAR)?;
        Ok(Self::new(host, token))
    }

    /// Base URL without trailing slash
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("host", &self.host)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
#[path = "credentials_tests.rs"]
mod tests;
