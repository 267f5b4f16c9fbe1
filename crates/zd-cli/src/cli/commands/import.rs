//! `zd import ticket|batch <file>` – submit tickets from JSON files.

use super::jobs::{wait_for_job, WaitSettings};
use super::output::{job_summary, ticket_summary};
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use zd_core::model::{TicketImport, TicketImportOptions};
use zd_core::{JobStatusApi, RequestContext, TicketImportApi};

/// Options for `import batch`.
#[derive(Debug, Clone)]
pub struct BatchSettings {
    pub opts: TicketImportOptions,
    pub skip_validation: bool,
    /// Poll the returned job until it finishes.
    pub wait: Option<WaitSettings>,
}

pub async fn run_import_ticket<A: TicketImportApi>(
    api: &A,
    ctx: &RequestContext,
    path: &Path,
    opts: &TicketImportOptions,
    skip_validation: bool,
) -> Result<()> {
    let ticket: TicketImport = read_json(path)?;
    if !skip_validation {
        check_tickets(std::slice::from_ref(&ticket))?;
    }
    let created = api.import_ticket(ctx, &ticket, Some(opts)).await?;
    println!("{}", ticket_summary(&created));
    Ok(())
}

pub async fn run_import_batch<A: TicketImportApi + JobStatusApi>(
    api: &A,
    ctx: &RequestContext,
    path: &Path,
    settings: &BatchSettings,
) -> Result<()> {
    let tickets: Vec<TicketImport> = read_json(path)?;
    if tickets.is_empty() {
        bail!("{} contains no tickets", path.display());
    }
    if !settings.skip_validation {
        check_tickets(&tickets)?;
    }
    let job = api
        .batch_import_tickets(ctx, &tickets, Some(&settings.opts))
        .await?;
    println!("Queued job {} for {} tickets", job.id, tickets.len());

    if let Some(wait) = &settings.wait {
        let done = wait_for_job(api, &job.id, wait).await?;
        print!("{}", job_summary(&done));
    }
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parse {}", path.display()))
}

/// Fails with every problem found, one line per ticket.
fn check_tickets(tickets: &[TicketImport]) -> Result<()> {
    let report: Vec<String> = tickets
        .iter()
        .enumerate()
        .flat_map(|(i, t)| {
            t.validate()
                .into_iter()
                .map(move |p| format!("ticket[{}]: {}", i, p))
        })
        .collect();
    if report.is_empty() {
        return Ok(());
    }
    bail!(
        "refusing to import (use --skip-validation to send anyway):\n{}",
        report.join("\n")
    )
}
