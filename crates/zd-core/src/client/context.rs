//! Per-call deadline and cancellation.
//!
//! Every API call takes a `RequestContext`. A cancelled token or a passed
//! deadline stops the call: before any I/O if already tripped, otherwise the
//! async side stops waiting and the curl progress callback aborts the transfer.

use crate::error::{Error, Result};
use std::time::{Duration, Instant};

/// Shared cancel flag. Clones observe the same state; `cancelled()` is awaitable.
pub use tokio_util::sync::CancellationToken as CancelToken;

/// Deadline and cancel token for one or more calls.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    deadline: Option<Instant>,
    cancel: CancelToken,
}

impl RequestContext {
    /// No deadline, fresh token.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::new().deadline_at(Instant::now() + timeout)
    }

    pub fn deadline_at(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Time left before the deadline; `None` when there is no deadline.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Error for a context that has already tripped, cancellation first.
    pub(crate) fn check(&self) -> Result<()> {
        if self.cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        if self.is_expired() {
            return Err(Error::DeadlineExceeded);
        }
        Ok(())
    }
}
