//! In-memory API for command tests.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use zd_core::model::{JobState, JobStatus, Ticket, TicketImport, TicketImportOptions};
use zd_core::{Error, JobStatusApi, RequestContext, Result, TicketImportApi};

/// Hands out queued statuses in order and repeats the last one.
/// Every call is recorded; job ids are always `j1`.
pub(crate) struct ScriptedApi {
    script: Mutex<VecDeque<JobStatus>>,
    calls: Mutex<Vec<String>>,
    poll_delay: Duration,
}

impl ScriptedApi {
    pub(crate) fn new(states: &[JobState]) -> Self {
        let script = states
            .iter()
            .map(|s| JobStatus {
                id: "j1".into(),
                status: Some(s.clone()),
                ..Default::default()
            })
            .collect();
        Self {
            script: Mutex::new(script),
            calls: Mutex::new(Vec::new()),
            poll_delay: Duration::ZERO,
        }
    }

    /// Each job status call takes this long, cut short by the context deadline.
    pub(crate) fn with_poll_delay(mut self, delay: Duration) -> Self {
        self.poll_delay = delay;
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, ctx: &RequestContext, call: String) -> Result<()> {
        if ctx.cancel_token().is_cancelled() {
            return Err(Error::Cancelled);
        }
        if ctx.is_expired() {
            return Err(Error::DeadlineExceeded);
        }
        self.calls.lock().unwrap().push(call);
        Ok(())
    }

    fn next_job(
        &self,
        ctx: &RequestContext,
        call: String,
    ) -> impl Future<Output = Result<JobStatus>> + Send {
        let out = self.record(ctx, call).map(|()| {
            let mut script = self.script.lock().unwrap();
            if script.len() > 1 {
                script.pop_front().unwrap()
            } else {
                script.front().cloned().unwrap_or_default()
            }
        });
        let delay = self.poll_delay;
        let deadline = ctx.deadline();
        async move {
            let out = out?;
            if delay.is_zero() {
                return Ok(out);
            }
            match deadline {
                Some(d) if d <= Instant::now() + delay => {
                    tokio::time::sleep_until(tokio::time::Instant::from_std(d)).await;
                    Err(Error::DeadlineExceeded)
                }
                _ => {
                    tokio::time::sleep(delay).await;
                    Ok(out)
                }
            }
        }
    }
}

impl JobStatusApi for ScriptedApi {
    fn list_job_statuses(
        &self,
        ctx: &RequestContext,
    ) -> impl Future<Output = Result<JobStatus>> + Send {
        self.next_job(ctx, "list".into())
    }

    fn show_many_job_statuses<S: AsRef<str> + Sync>(
        &self,
        ctx: &RequestContext,
        ids: &[S],
    ) -> impl Future<Output = Result<JobStatus>> + Send {
        let joined = zd_core::jobs::join_ids(ids);
        self.next_job(ctx, format!("many:{}", joined))
    }

    fn show_job_status(
        &self,
        ctx: &RequestContext,
        id: &str,
    ) -> impl Future<Output = Result<JobStatus>> + Send {
        self.next_job(ctx, format!("show:{}", id))
    }
}

impl TicketImportApi for ScriptedApi {
    fn import_ticket(
        &self,
        ctx: &RequestContext,
        ticket: &TicketImport,
        opts: Option<&TicketImportOptions>,
    ) -> impl Future<Output = Result<Ticket>> + Send {
        let archive = opts.copied().unwrap_or_default().archive_immediately;
        let out = self
            .record(ctx, format!("import:archive={}", archive))
            .map(|()| Ticket {
                id: 42,
                subject: ticket.subject.clone(),
                status: ticket.status.clone(),
                ..Default::default()
            });
        async move { out }
    }

    fn batch_import_tickets(
        &self,
        ctx: &RequestContext,
        tickets: &[TicketImport],
        opts: Option<&TicketImportOptions>,
    ) -> impl Future<Output = Result<JobStatus>> + Send {
        let archive = opts.copied().unwrap_or_default().archive_immediately;
        let out = self
            .record(ctx, format!("batch:{}:archive={}", tickets.len(), archive))
            .map(|()| JobStatus {
                id: "j1".into(),
                status: Some(JobState::Queued),
                total: tickets.len() as i64,
                ..Default::default()
            });
        async move { out }
    }
}
