//! Ticket imports (`/imports/tickets`).
//!
//! A single import answers with the created ticket. A batch import answers
//! with a queued job; per-ticket outcomes show up later in that job's
//! `results`, read through `JobStatusApi`.

use crate::client::{Client, Expect, RequestContext};
use crate::error::Result;
use crate::model::{JobStatus, Ticket, TicketImport, TicketImportOptions};
use std::future::Future;
use url::Url;

/// Batch imports are accepted only on a literal 200.
const BATCH_IMPORT_STATUS: u32 = 200;

pub trait TicketImportApi {
    /// Import one ticket. `None` options mean `TicketImportOptions::default()`.
    fn import_ticket(
        &self,
        ctx: &RequestContext,
        ticket: &TicketImport,
        opts: Option<&TicketImportOptions>,
    ) -> impl Future<Output = Result<Ticket>> + Send;

    /// Queue `tickets` for import in one request and return the job handle.
    /// Any status other than 200 is an error, including other 2xx codes.
    fn batch_import_tickets(
        &self,
        ctx: &RequestContext,
        tickets: &[TicketImport],
        opts: Option<&TicketImportOptions>,
    ) -> impl Future<Output = Result<JobStatus>> + Send;
}

fn import_url(client: &Client, segments: &[&str], opts: Option<&TicketImportOptions>) -> Url {
    let opts = opts.copied().unwrap_or_default();
    let mut url = client.endpoint(segments);
    url.query_pairs_mut().extend_pairs(opts.query_pairs());
    url
}

impl TicketImportApi for Client {
    async fn import_ticket(
        &self,
        ctx: &RequestContext,
        ticket: &TicketImport,
        opts: Option<&TicketImportOptions>,
    ) -> Result<Ticket> {
        let url = import_url(self, &["imports", "tickets.json"], opts);
        tracing::debug!("importing ticket external_id={:?}", ticket.external_id);
        let created: Ticket = self.post(ctx, url, ticket, Expect::Success).await?;
        tracing::info!("imported ticket {}", created.id);
        Ok(created)
    }

    async fn batch_import_tickets(
        &self,
        ctx: &RequestContext,
        tickets: &[TicketImport],
        opts: Option<&TicketImportOptions>,
    ) -> Result<JobStatus> {
        let url = import_url(self, &["imports", "tickets", "create_many.json"], opts);
        let job: JobStatus = self
            .post(ctx, url, tickets, Expect::Exactly(BATCH_IMPORT_STATUS))
            .await?;
        tracing::info!("queued import of {} tickets as job {}", tickets.len(), job.id);
        Ok(job)
    }
}
