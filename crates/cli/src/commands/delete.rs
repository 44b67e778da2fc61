// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dbjobs delete` - Delete jobs whose names start with a prefix

use crate::adapters::make_api;
use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use dbjobs_engine::{delete_jobs, select_jobs_with_prefix, DeleteEvent};

#[derive(Args)]
pub struct DeleteArgs {
    /// Prefix of job names to delete (e.g. PR-12_)
    #[arg(long = "job_name_prefix", alias = "job-name-prefix")]
    pub job_name_prefix: String,
}

pub fn handle(args: DeleteArgs) -> Result<()> {
    let api = make_api()?;
    let prefix = &args.job_name_prefix;

    println!("Listing jobs to delete with prefix: {}", prefix);

    let jobs = select_jobs_with_prefix(&api, prefix).map_err(CliError::list_failed)?;

    if jobs.is_empty() {
        println!("No jobs found with the given prefix.");
        return Ok(());
    }

    println!("Jobs to delete:");
    for job in &jobs {
        println!("- {}: {}", job.job_id, job.name().unwrap_or_default());
    }

    let report = delete_jobs(&api, jobs, |event| match event {
        DeleteEvent::Deleting(job) => {
            println!("Deleting job {}: {}", job.job_id, job.name().unwrap_or_default())
        }
        DeleteEvent::Deleted(_) => {}
        DeleteEvent::Failed(job, err) => eprintln!(
            "Failed to delete job {} ({}): {}",
            job.job_id,
            job.name().unwrap_or_default(),
            err
        ),
    });

    // Per-job failures were reported above and do not fail the command
    println!(
        "Job deletion completed: {} deleted, {} failed",
        report.deleted.len(),
        report.failed.len()
    );
    Ok(())
}
