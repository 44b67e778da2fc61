// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use dbjobs_adapters::ResponseBody;
use serde::Serialize;

/// Print a heading followed by a pretty-printed JSON value
pub fn print_json<T: Serialize + ?Sized>(heading: &str, value: &T) {
    println!("{}", heading);
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::warn!(error = %e, "failed to render JSON"),
    }
}

/// Print a failed API response to stderr
pub fn print_error_response(status: u16, body: &ResponseBody) {
    eprintln!("Databricks API error response:");
    eprintln!("Status code: {}", status);
    match body {
        ResponseBody::Json(value) => match serde_json::to_string_pretty(value) {
            Ok(json) => eprintln!("Body: {}", json),
            Err(_) => eprintln!("Body: {}", value),
        },
        ResponseBody::Text(text) => eprintln!("Body (raw): {}", text),
    }
}
