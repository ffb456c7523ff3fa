use clap::{Parser, Subcommand};
use crm_jobs_domain::CliOverrides;

#[derive(Parser, Debug)]
#[command(name = "crm-jobs")]
#[command(version)]
#[command(about = "CRM maintenance jobs: inactive customer cleanup, reminders, restock, heartbeat")]
pub struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Database path
    #[arg(long, value_name = "PATH", global = true)]
    pub database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Delete customers with no order inside the inactivity window
    CleanInactiveCustomers {
        /// Inactivity window in days
        #[arg(long, value_name = "N")]
        window_days: Option<u32>,

        /// Cleanup log file
        #[arg(long, value_name = "PATH")]
        log_file: Option<String>,

        /// List the customers that would be deleted without deleting them
        #[arg(long)]
        dry_run: bool,
    },

    /// Log orders placed within the lookback window
    OrderReminders {
        #[arg(long, value_name = "N")]
        lookback_days: Option<u32>,

        #[arg(long, value_name = "PATH")]
        log_file: Option<String>,
    },

    /// Top up products whose stock is below the threshold
    RestockLowStock {
        #[arg(long, value_name = "N")]
        threshold: Option<u32>,

        #[arg(long, value_name = "N")]
        increment: Option<u32>,

        #[arg(long, value_name = "PATH")]
        log_file: Option<String>,
    },

    /// Record a liveness line with the store probe result
    Heartbeat {
        #[arg(long, value_name = "PATH")]
        log_file: Option<String>,
    },

    /// Run every enabled job once, in order
    RunAll,

    /// Apply the schema migration and exit
    Migrate,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        let mut overrides = CliOverrides {
            database_path: self.database.clone(),
            log_level: self.log_level.clone(),
            ..CliOverrides::default()
        };

        match &self.command {
            Command::CleanInactiveCustomers {
                window_days,
                log_file,
                ..
            } => {
                overrides.inactivity_window_days = *window_days;
                overrides.cleanup_log_path = log_file.clone();
            }
            Command::OrderReminders {
                lookback_days,
                log_file,
            } => {
                overrides.lookback_days = *lookback_days;
                overrides.reminder_log_path = log_file.clone();
            }
            Command::RestockLowStock {
                threshold,
                increment,
                log_file,
            } => {
                overrides.restock_threshold = *threshold;
                overrides.restock_increment = *increment;
                overrides.restock_log_path = log_file.clone();
            }
            Command::Heartbeat { log_file } => {
                overrides.heartbeat_log_path = log_file.clone();
            }
            Command::RunAll | Command::Migrate => {}
        }

        overrides
    }
}
