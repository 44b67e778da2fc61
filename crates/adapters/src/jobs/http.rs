// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking HTTP implementation of [`JobsApi`]

use super::{endpoints, ApiError, JobsApi, ResponseBody};
use dbjobs_core::{
    Credentials, HttpConfig, JobId, JobRef, JobsPage, RunId, RunNowResponse, RunState, RunStatus,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use ureq::http::Response;
use ureq::{Agent, Body};

/// Jobs API client authenticated with a bearer token
#[derive(Clone)]
pub struct HttpJobsApi {
    agent: Agent,
    credentials: Credentials,
}

impl HttpJobsApi {
    pub fn new(credentials: Credentials, config: &HttpConfig) -> Self {
        // Non-2xx responses are read and reported, not turned into transport errors
        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(config.timeout))
            .build()
            .into();
        Self { agent, credentials }
    }

    /// Workspace base URL, without trailing slash
    pub fn host(&self) -> &str {
        self.credentials.host()
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.credentials.host(), endpoint)
    }

    fn get(&self, endpoint: &'static str, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        let mut request = self
            .agent
            .get(self.url(endpoint))
            .header("Authorization", self.credentials.bearer());
        for (key, value) in query {
            request = request.query(*key, *value);
        }
        read_json(endpoint, request.call())
    }

    fn post<B: Serialize>(&self, endpoint: &'static str, body: &B) -> Result<Value, ApiError> {
        let payload = serde_json::to_string(body).map_err(|e| ApiError::Decode {
            endpoint,
            message: format!("failed to encode request body: {}", e),
        })?;
        let result = self
            .agent
            .post(self.url(endpoint))
            .header("Authorization", self.credentials.bearer())
            .header("Content-Type", "application/json")
            .send(payload);
        read_json(endpoint, result)
    }
}

fn read_json(
    endpoint: &'static str,
    result: Result<Response<Body>, ureq::Error>,
) -> Result<Value, ApiError> {
    let mut response = result.map_err(|e| ApiError::Transport {
        endpoint,
        message: e.to_string(),
    })?;
    let status = response.status();
    let text = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Transport {
            endpoint,
            message: format!("failed to read response: {}", e),
        })?;

    if !status.is_success() {
        return Err(ApiError::Status {
            endpoint,
            status: status.as_u16(),
            body: ResponseBody::parse(text),
        });
    }

    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| ApiError::Decode {
        endpoint,
        message: e.to_string(),
    })
}

fn decode<T: DeserializeOwned>(endpoint: &'static str, value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode {
        endpoint,
        message: e.to_string(),
    })
}

impl JobsApi for HttpJobsApi {
    fn create_job(&self, settings: &Value) -> Result<Value, ApiError> {
        self.post(endpoints::CREATE, settings)
    }

    fn list_jobs(&self, page_token: Option<&str>) -> Result<JobsPage, ApiError> {
        let query: Vec<(&str, &str)> = page_token
            .map(|t| ("page_token", t))
            .into_iter()
            .collect();
        let value = self.get(endpoints::LIST, &query)?;
        if value.is_null() {
            return Ok(JobsPage::default());
        }
        decode(endpoints::LIST, value)
    }

    fn delete_job(&self, job_id: JobId) -> Result<(), ApiError> {
        self.post(endpoints::DELETE, &JobRef { job_id })?;
        Ok(())
    }

    fn run_now(&self, job_id: JobId) -> Result<RunId, ApiError> {
        let value = self.post(endpoints::RUN_NOW, &JobRef { job_id })?;
        let response: RunNowResponse = decode(endpoints::RUN_NOW, value)?;
        Ok(response.run_id)
    }

    fn get_run(&self, run_id: RunId) -> Result<RunState, ApiError> {
        let id = run_id.to_string();
        let value = self.get(endpoints::RUNS_GET, &[("run_id", id.as_str())])?;
        let status: RunStatus = decode(endpoints::RUNS_GET, value)?;
        Ok(status.state)
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
