//! `zd jobs ...` – read job statuses, optionally waiting for a terminal state.

use super::output::job_summary;
use anyhow::{Context, Result};
use std::time::{Duration, Instant};
use zd_core::model::JobStatus;
use zd_core::{JobStatusApi, RequestContext};

/// Polling cadence and limits for `jobs wait` / `import batch --wait`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitSettings {
    pub interval: Duration,
    /// Limit on the whole wait.
    pub timeout: Option<Duration>,
    /// Limit on each status call (the global `--timeout`).
    pub poll_timeout: Option<Duration>,
}

impl WaitSettings {
    pub fn new(interval_secs: u64, timeout_secs: Option<u64>) -> Self {
        Self {
            // A zero interval would hammer the API.
            interval: Duration::from_secs(interval_secs.max(1)),
            timeout: timeout_secs.map(Duration::from_secs),
            poll_timeout: None,
        }
    }

    pub fn with_poll_timeout(mut self, secs: Option<u64>) -> Self {
        self.poll_timeout = secs.map(Duration::from_secs);
        self
    }

    fn context(&self) -> RequestContext {
        match self.timeout {
            Some(t) => RequestContext::with_timeout(t),
            None => RequestContext::new(),
        }
    }

    /// Context for one poll: the per-call limit, never past the overall deadline.
    fn poll_context(&self, overall: &RequestContext) -> RequestContext {
        let Some(per_call) = self.poll_timeout else {
            return overall.clone();
        };
        let capped = Instant::now() + per_call;
        let deadline = match overall.deadline() {
            Some(d) => d.min(capped),
            None => capped,
        };
        overall.clone().deadline_at(deadline)
    }
}

pub async fn run_list<A: JobStatusApi>(api: &A, ctx: &RequestContext) -> Result<()> {
    let job = api.list_job_statuses(ctx).await?;
    print!("{}", job_summary(&job));
    Ok(())
}

pub async fn run_show<A: JobStatusApi>(api: &A, ctx: &RequestContext, id: &str) -> Result<()> {
    let job = api
        .show_job_status(ctx, id)
        .await
        .with_context(|| format!("job {}", id))?;
    print!("{}", job_summary(&job));
    Ok(())
}

pub async fn run_show_many<A: JobStatusApi>(
    api: &A,
    ctx: &RequestContext,
    ids: &[String],
) -> Result<()> {
    let job = api.show_many_job_statuses(ctx, ids).await?;
    print!("{}", job_summary(&job));
    Ok(())
}

pub async fn run_wait<A: JobStatusApi>(api: &A, id: &str, wait: &WaitSettings) -> Result<()> {
    let job = wait_for_job(api, id, wait).await?;
    print!("{}", job_summary(&job));
    Ok(())
}

/// Calls `show_job_status` every `interval` until the job is terminal.
/// `timeout` covers the whole wait, polls and sleeps included.
pub(super) async fn wait_for_job<A: JobStatusApi>(
    api: &A,
    id: &str,
    wait: &WaitSettings,
) -> Result<JobStatus> {
    let ctx = wait.context();
    loop {
        let job = api
            .show_job_status(&wait.poll_context(&ctx), id)
            .await
            .with_context(|| format!("waiting for job {}", id))?;
        tracing::debug!(
            "job {} is {} ({}/{})",
            id,
            job.status.as_ref().map(|s| s.as_str()).unwrap_or("-"),
            job.progress,
            job.total
        );
        if job.is_terminal() {
            return Ok(job);
        }
        let pause = match ctx.remaining() {
            Some(left) => wait.interval.min(left),
            None => wait.interval,
        };
        tokio::time::sleep(pause).await;
    }
}
