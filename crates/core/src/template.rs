// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job templates and PR placeholder substitution.
//!
//! A template is the JSON body accepted by `jobs/create`. It is treated as an
//! opaque object except for two spots:
//!
//! - the top-level `name`, which may receive a prefix (e.g. `PR-1234_`)
//! - `tasks[].notebook_task.base_parameters`, whose string values have every
//!   `{{PR_ID}}` replaced with the PR identifier

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Token replaced inside notebook base parameters
pub const PR_ID_PLACEHOLDER: &str = "{{PR_ID}}";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read job template {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("job template {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("job template must be a JSON object")]
    NotAnObject,

    #[error("job template has no string \"name\" field to prefix")]
    MissingName,
}

/// Read a job template from disk
pub fn load_template(path: &Path) -> Result<Value, TemplateError> {
    let content = std::fs::read_to_string(path).map_err(|source| TemplateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| TemplateError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply the name prefix and PR id to a template in place.
///
/// An empty prefix is the same as no prefix.
pub fn substitute_placeholders(
    template: &mut Value,
    pr_id: &str,
    name_prefix: Option<&str>,
) -> Result<(), TemplateError> {
    let conf = template.as_object_mut().ok_or(TemplateError::NotAnObject)?;

    if let Some(prefix) = name_prefix.filter(|p| !p.is_empty()) {
        let name = conf
            .get("name")
            .and_then(Value::as_str)
            .ok_or(TemplateError::MissingName)?;
        let prefixed = format!("{}{}", prefix, name);
        conf.insert("name".to_string(), Value::String(prefixed));
    }

    let Some(tasks) = conf.get_mut("tasks").and_then(Value::as_array_mut) else {
        return Ok(());
    };

    let mut replaced = 0usize;
    for task in tasks {
        let Some(notebook) = task
            .get_mut("notebook_task")
            .and_then(Value::as_object_mut)
            .filter(|nb| !nb.is_empty())
        else {
            continue;
        };
        // A non-empty notebook block always goes out with a parameter map
        let Some(params) = notebook
            .entry("base_parameters")
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
        else {
            continue;
        };

        for value in params.values_mut() {
            if let Value::String(s) = value {
                if s.contains(PR_ID_PLACEHOLDER) {
                    *s = s.replace(PR_ID_PLACEHOLDER, pr_id);
                    replaced += 1;
                }
            }
        }
    }

    tracing::debug!(replaced, "substituted PR placeholders");
    Ok(())
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
