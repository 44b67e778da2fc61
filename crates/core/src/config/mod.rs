// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration modules
//!
//! All configuration comes from the process environment.

mod credentials;
mod http;

pub use credentials::{ConfigError, Credentials, HOST_VAR, TOKEN_VAR};
pub use http::{HttpConfig, TIMEOUT_HTTP_VAR};
