//! CLI for Zendesk ticket imports and job status polling.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::Path;
use std::time::Duration;
use zd_core::config;
use zd_core::{Client, RequestContext};

use commands::{
    run_import_batch, run_import_ticket, run_list, run_show, run_show_many, run_wait,
    BatchSettings, WaitSettings,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "zd")]
#[command(about = "Zendesk ticket imports and job status polling", long_about = None)]
pub struct Cli {
    /// Give up on each API call after this many seconds.
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Inspect background jobs.
    #[command(subcommand)]
    Jobs(JobsCommand),

    /// Import historical tickets.
    #[command(subcommand)]
    Import(ImportCommand),
}

#[derive(Debug, Subcommand)]
pub enum JobsCommand {
    /// Show the most recent job statuses.
    List,

    /// Show one job by ID.
    Show {
        /// Job identifier.
        id: String,
    },

    /// Show several jobs at once.
    ShowMany {
        /// Job identifiers, sent in the given order.
        ids: Vec<String>,
    },

    /// Poll a job until it completes, fails or is killed.
    Wait {
        /// Job identifier.
        id: String,
        /// Seconds between polls.
        #[arg(long, default_value = "2", value_name = "SECS")]
        interval_secs: u64,
        /// Stop waiting after this many seconds.
        #[arg(long, value_name = "SECS")]
        timeout_secs: Option<u64>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ImportCommand {
    /// Import one ticket from a JSON file.
    Ticket {
        /// Path to a JSON file holding one ticket object.
        path: String,
        /// Archive the ticket as soon as it is created (closed tickets only).
        #[arg(long)]
        archive_immediately: bool,
        /// Send even if the ticket has no comments or requester.
        #[arg(long)]
        skip_validation: bool,
    },

    /// Import many tickets in one request; prints the job to poll.
    Batch {
        /// Path to a JSON file holding an array of ticket objects.
        path: String,
        /// Archive the tickets as soon as they are created (closed tickets only).
        #[arg(long)]
        archive_immediately: bool,
        /// Send even if some tickets have no comments or requester.
        #[arg(long)]
        skip_validation: bool,
        /// Keep polling the job until it finishes.
        #[arg(long)]
        wait: bool,
        /// Seconds between polls with --wait.
        #[arg(long, default_value = "2", value_name = "SECS")]
        interval_secs: u64,
        /// Stop waiting after this many seconds with --wait.
        #[arg(long, value_name = "SECS")]
        timeout_secs: Option<u64>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: base_url={}", cfg.base_url);
        let client = Client::new(&cfg.client_config())
            .with_context(|| format!("bad base_url {:?}", cfg.base_url))?;
        let ctx = call_context(cli.timeout);

        match cli.command {
            CliCommand::Jobs(JobsCommand::List) => run_list(&client, &ctx).await?,
            CliCommand::Jobs(JobsCommand::Show { id }) => run_show(&client, &ctx, &id).await?,
            CliCommand::Jobs(JobsCommand::ShowMany { ids }) => {
                run_show_many(&client, &ctx, &ids).await?
            }
            CliCommand::Jobs(JobsCommand::Wait {
                id,
                interval_secs,
                timeout_secs,
            }) => {
                let wait =
                    WaitSettings::new(interval_secs, timeout_secs).with_poll_timeout(cli.timeout);
                run_wait(&client, &id, &wait).await?;
            }
            CliCommand::Import(ImportCommand::Ticket {
                path,
                archive_immediately,
                skip_validation,
            }) => {
                let mut opts = cfg.import.options();
                opts.archive_immediately |= archive_immediately;
                run_import_ticket(&client, &ctx, Path::new(&path), &opts, skip_validation)
                    .await?;
            }
            CliCommand::Import(ImportCommand::Batch {
                path,
                archive_immediately,
                skip_validation,
                wait,
                interval_secs,
                timeout_secs,
            }) => {
                let mut opts = cfg.import.options();
                opts.archive_immediately |= archive_immediately;
                let settings = BatchSettings {
                    opts,
                    skip_validation,
                    wait: wait.then(|| {
                        WaitSettings::new(interval_secs, timeout_secs).with_poll_timeout(cli.timeout)
                    }),
                };
                run_import_batch(&client, &ctx, Path::new(&path), &settings).await?;
            }
        }

        Ok(())
    }
}

/// Context for a single API call from `--timeout`.
fn call_context(timeout_secs: Option<u64>) -> RequestContext {
    match timeout_secs {
        Some(secs) => RequestContext::with_timeout(Duration::from_secs(secs)),
        None => RequestContext::new(),
    }
}

#[cfg(test)]
mod tests;
