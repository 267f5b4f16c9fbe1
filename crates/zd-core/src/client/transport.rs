//! Blocking HTTP transfer over libcurl.
//!
//! One `Easy` handle per request. Runs in the current thread; the async
//! `Client` calls it from `spawn_blocking`.

use super::context::RequestContext;
use crate::error::{Error, Result};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct HttpRequest {
    pub method: Method,
    pub url: Url,
    /// JSON body (POST only).
    pub body: Option<Vec<u8>>,
}

#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Which response statuses count as success for a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Expect {
    /// Any 2xx.
    Success,
    /// This status and no other.
    Exactly(u32),
}

impl HttpResponse {
    pub(crate) fn check(self, expect: Expect) -> Result<Vec<u8>> {
        match expect {
            Expect::Success if (200..300).contains(&self.status) => Ok(self.body),
            Expect::Success => Err(Error::Status {
                status: self.status,
                body: String::from_utf8_lossy(&self.body).into_owned(),
            }),
            Expect::Exactly(code) if self.status == code => Ok(self.body),
            Expect::Exactly(code) => Err(Error::UnexpectedStatus {
                expected: code,
                actual: self.status,
                body: String::from_utf8_lossy(&self.body).into_owned(),
            }),
        }
    }
}

/// Fixed per-client transfer settings.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
    /// Extra headers sent on every request (e.g. Authorization).
    pub headers: Vec<(String, String)>,
}

impl Transport {
    /// Runs one request to completion. `gave_up` is set by the async caller
    /// when it stops waiting; the progress callback then aborts the transfer.
    pub(crate) fn perform(
        &self,
        req: &HttpRequest,
        ctx: &RequestContext,
        gave_up: &AtomicBool,
    ) -> Result<HttpResponse> {
        ctx.check()?;

        let mut body_out: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(req.url.as_str())?;
        easy.follow_location(true)?;
        easy.max_redirections(5)?;
        easy.useragent(&self.user_agent)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.effective_timeout(ctx))?;
        easy.progress(true)?;

        let mut list = curl::easy::List::new();
        list.append("Accept: application/json")?;
        match (&req.method, &req.body) {
            (Method::Post, body) => {
                easy.post(true)?;
                let body = body.as_deref().unwrap_or_default();
                easy.post_fields_copy(body)?;
                list.append("Content-Type: application/json")?;
                // No 100-continue round trip for larger bodies.
                list.append("Expect:")?;
            }
            (Method::Get, _) => {
                easy.get(true)?;
            }
        }
        for (k, v) in &self.headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        easy.http_headers(list)?;

        let perform_result = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body_out.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.progress_function(|_, _, _, _| {
                !(gave_up.load(Ordering::Relaxed) || ctx.check().is_err())
            })?;
            transfer.perform()
        };
        if let Err(e) = perform_result {
            if e.is_aborted_by_callback() || (e.is_operation_timedout() && ctx.is_expired()) {
                return Err(ctx.check().err().unwrap_or(Error::Cancelled));
            }
            return Err(Error::Transport(e));
        }

        let status = easy.response_code()?;
        Ok(HttpResponse {
            status,
            body: body_out,
        })
    }

    /// Client timeout, shortened to the context deadline when that is sooner.
    /// A zero `request_timeout` means uncapped, as it does for curl.
    fn effective_timeout(&self, ctx: &RequestContext) -> Duration {
        let Some(left) = ctx.remaining() else {
            return self.request_timeout;
        };
        let capped = if self.request_timeout.is_zero() {
            left
        } else {
            left.min(self.request_timeout)
        };
        // A zero here would disable curl's timeout entirely.
        capped.max(Duration::from_millis(1))
    }
}
