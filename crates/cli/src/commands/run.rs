// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dbjobs run` - Run a job by name and wait for completion

use crate::adapters::make_api;
use crate::error::CliError;
use crate::output;
use anyhow::Result;
use clap::Args;
use dbjobs_core::{RunId, SystemClock};
use dbjobs_engine::{resolve_job_id, trigger_run, wait_for_run, EngineError, PollOptions};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Exit code after Ctrl-C (128 + SIGINT)
const EXIT_INTERRUPTED: i32 = 130;

#[derive(Args)]
pub struct RunArgs {
    /// Job name (e.g. PR-1234_init_test_job)
    #[arg(long = "job_name", alias = "job-name")]
    pub job_name: String,

    /// Polling interval in seconds
    #[arg(long = "poll_interval", alias = "poll-interval", default_value_t = 15)]
    pub poll_interval: u64,

    /// Stop waiting after this long (e.g. "45m", "2h"); waits indefinitely when omitted
    #[arg(long, value_parser = humantime::parse_duration)]
    pub timeout: Option<Duration>,
}

pub fn handle(args: RunArgs) -> Result<()> {
    let api = make_api()?;
    let active_run = on_interrupt()?;

    let job_id = resolve_job_id(&api, &args.job_name).map_err(|e| match e {
        EngineError::JobNotFound(name) => CliError::job_not_found(&name).into(),
        other => anyhow::Error::from(other),
    })?;
    println!("Found job_id = {} for job_name = {}", job_id, args.job_name);

    let run_id = trigger_run(&api, job_id)?;
    *active_run.lock().unwrap_or_else(|e| e.into_inner()) = Some(run_id);
    println!("Triggered run_id = {} for job_id = {}", run_id, job_id);

    let options = PollOptions {
        interval: Duration::from_secs(args.poll_interval),
        timeout: args.timeout,
    };
    let result = wait_for_run(&api, &SystemClock, run_id, &options, |update| {
        println!("Run {} - {}", update.run_id, update.state.summary());
    });

    match result {
        Ok(_) => {
            println!("Job run succeeded");
            Ok(())
        }
        Err(EngineError::RunFailed { message, state, .. }) => {
            println!("Job run failed");
            output::print_json("Full state:", state.as_ref());
            Err(CliError::run_failed(&message, api.inner().host(), job_id, run_id).into())
        }
        Err(EngineError::Timeout { elapsed, last, .. }) => {
            Err(CliError::run_timed_out(run_id, elapsed, &last.summary()).into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Exit on Ctrl-C, noting which remote run is left running
fn on_interrupt() -> Result<Arc<Mutex<Option<RunId>>>> {
    let active_run: Arc<Mutex<Option<RunId>>> = Arc::new(Mutex::new(None));
    let handler_run = Arc::clone(&active_run);

    ctrlc::set_handler(move || {
        let run = *handler_run.lock().unwrap_or_else(|e| e.into_inner());
        match run {
            Some(run_id) => eprintln!(
                "\nInterrupted. Run {} was not cancelled and keeps running on the service.",
                run_id
            ),
            None => eprintln!("\nInterrupted."),
        }
        std::process::exit(EXIT_INTERRUPTED);
    })?;

    Ok(active_run)
}
