// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dbjobs create` - Create a job from a JSON template

use crate::adapters::make_api;
use crate::error::CliError;
use crate::output;
use anyhow::Result;
use clap::Args;
use dbjobs_adapters::ApiError;
use dbjobs_engine::{create_job, prepare_template, EngineError};
use std::path::PathBuf;

#[derive(Args)]
pub struct CreateArgs {
    /// Path to the job JSON template (e.g. jobs/init_test_job.json)
    #[arg(long = "job_template", alias = "job-template")]
    pub job_template: PathBuf,

    /// PR environment id substituted for {{PR_ID}} (e.g. pr_1234)
    #[arg(long = "pr_id", alias = "pr-id")]
    pub pr_id: String,

    /// Optional prefix for the job name (e.g. PR-1234_)
    #[arg(long = "job_name_prefix", alias = "job-name-prefix")]
    pub job_name_prefix: Option<String>,
}

pub fn handle(args: CreateArgs) -> Result<()> {
    let api = make_api()?;

    let settings = prepare_template(
        &args.job_template,
        &args.pr_id,
        args.job_name_prefix.as_deref(),
    )
    .map_err(|e| {
        CliError::new(e.to_string())
            .with_hint("Check the file passed to --job_template")
            .with_source(e)
    })?;

    output::print_json("Final job config to create:", &settings);

    match create_job(&api, &settings) {
        Ok(response) => {
            output::print_json("Job created successfully:", &response);
            Ok(())
        }
        Err(EngineError::Api(ApiError::Status {
            endpoint,
            status,
            body,
        })) => {
            output::print_error_response(status, &body);
            Err(ApiError::Status {
                endpoint,
                status,
                body,
            }
            .into())
        }
        Err(e) => Err(e.into()),
    }
}
