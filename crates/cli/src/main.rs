use chrono::{DateTime, Utc};
use clap::Parser;
use crm_jobs_jobs::Job;
use std::process::ExitCode;
use tracing::{error, info, warn};

mod bootstrap;
mod cli;
mod di;
mod exit;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    // One clock reading per invocation; every job sees the same `now`.
    let now = Utc::now();

    match run(cli, now).await {
        Ok(code) => exit::to_exit_code(code),
        Err(e) => {
            let code = exit::code_for_error(&e);
            error!(error = %e, exit_code = code, "crm-jobs failed");
            eprintln!("Error: {e:#}");
            exit::to_exit_code(code)
        }
    }
}

async fn run(cli: Cli, now: DateTime<Utc>) -> anyhow::Result<u8> {
    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config.logging);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        command = ?cli.command,
        "Starting crm-jobs"
    );

    if cli.command == Command::Migrate {
        bootstrap::migrate_database(&config.database).await?;
        println!("Schema is up to date");
        return Ok(0);
    }

    let pool = bootstrap::init_database(&config.database).await?;

    let repos = di::Repositories::new(pool);
    let jobs = di::Jobs::new(&repos, &config);

    let code = match cli.command {
        Command::CleanInactiveCustomers { dry_run, .. } => {
            run_single(jobs.cleanup(dry_run)?, now).await?
        }
        Command::OrderReminders { .. } => run_single(jobs.reminders(), now).await?,
        Command::RestockLowStock { .. } => run_single(jobs.restock(), now).await?,
        Command::Heartbeat { .. } => run_single(jobs.heartbeat(), now).await?,
        Command::RunAll => run_all(&jobs, now).await?,
        Command::Migrate => 0,
    };
    Ok(code)
}

async fn run_single(job: impl Job, now: DateTime<Utc>) -> anyhow::Result<u8> {
    let summary = job.run(now).await?;
    println!("{summary}");
    Ok(0)
}

async fn run_all(jobs: &di::Jobs<'_>, now: DateTime<Utc>) -> anyhow::Result<u8> {
    let summary = jobs.runner()?.run_once(now).await;

    for outcome in &summary.outcomes {
        match &outcome.result {
            Ok(line) => println!("{}: {}", outcome.job, line),
            Err(e) => eprintln!("{}: {}", outcome.job, e),
        }
    }
    if summary.outcomes.is_empty() {
        warn!("Every job is disabled in the configuration, nothing to run");
    }

    Ok(exit::code_for_summary(&summary))
}
