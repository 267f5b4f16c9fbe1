//! Job status reads (`/job_statuses`).
//!
//! Each call is a single GET that unwraps `{"job_status": ...}`. Nothing here
//! polls; a caller waiting for a batch import calls `show_job_status` again
//! until the state is terminal.

use crate::client::{Client, RequestContext};
use crate::error::Result;
use crate::model::JobStatus;
use std::future::Future;
use url::Url;

pub trait JobStatusApi {
    /// Most recent job statuses (server-chosen window).
    fn list_job_statuses(
        &self,
        ctx: &RequestContext,
    ) -> impl Future<Output = Result<JobStatus>> + Send;

    /// Statuses for `ids`, sent as one comma-joined `ids` query value.
    fn show_many_job_statuses<S: AsRef<str> + Sync>(
        &self,
        ctx: &RequestContext,
        ids: &[S],
    ) -> impl Future<Output = Result<JobStatus>> + Send;

    /// Status of one job. An unknown id comes back as an HTTP error.
    fn show_job_status(
        &self,
        ctx: &RequestContext,
        id: &str,
    ) -> impl Future<Output = Result<JobStatus>> + Send;
}

/// `ids` joined with `,` in the given order, duplicates kept. Empty input
/// gives an empty value, which is still sent.
pub fn join_ids<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter()
        .map(|id| id.as_ref())
        .collect::<Vec<&str>>()
        .join(",")
}

fn show_many_url<S: AsRef<str>>(client: &Client, ids: &[S]) -> Url {
    let mut url = client.endpoint(&["job_statuses", "show_many.json"]);
    url.query_pairs_mut().append_pair("ids", &join_ids(ids));
    url
}

fn show_url(client: &Client, id: &str) -> Url {
    client.endpoint(&["job_statuses", &format!("{}.json", id)])
}

impl JobStatusApi for Client {
    async fn list_job_statuses(&self, ctx: &RequestContext) -> Result<JobStatus> {
        self.get(ctx, self.endpoint(&["job_statuses.json"])).await
    }

    async fn show_many_job_statuses<S: AsRef<str> + Sync>(
        &self,
        ctx: &RequestContext,
        ids: &[S],
    ) -> Result<JobStatus> {
        if ids.is_empty() {
            tracing::debug!("show_many_job_statuses called with no ids");
        }
        self.get(ctx, show_many_url(self, ids)).await
    }

    async fn show_job_status(&self, ctx: &RequestContext, id: &str) -> Result<JobStatus> {
        self.get(ctx, show_url(self, id)).await
    }
}
