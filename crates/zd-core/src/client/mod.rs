//! Zendesk API client: base URL, shared transfer settings, async dispatch.
//!
//! The client holds no per-call state; it is `Clone + Send + Sync` and every
//! call is one independent HTTP round trip.

mod context;
mod transport;

pub use context::{CancelToken, RequestContext};

pub(crate) use transport::Expect;

use crate::error::{Error, Result};
use crate::model::{Envelope, Enveloped};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use transport::{HttpRequest, Method, Transport};
use url::Url;

/// Settings for `Client::new`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, e.g. `https://acme.zendesk.com/api/v2`.
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Upper bound for one request; a context deadline can only shorten it.
    pub request_timeout: Duration,
    pub user_agent: String,
    /// Sent verbatim on every request. Credentials go here.
    pub headers: BTreeMap<String, String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://example.zendesk.com/api/v2".to_string(),
            connect_timeout: Duration::from_secs(15),
            request_timeout: Duration::from_secs(60),
            user_agent: concat!("zd/", env!("CARGO_PKG_VERSION")).to_string(),
            headers: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Client {
    base: Url,
    transport: Arc<Transport>,
}

impl Client {
    /// Validates the base URL; no network I/O.
    pub fn new(cfg: &ClientConfig) -> Result<Self> {
        let base = Url::parse(cfg.base_url.trim())?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "base URL must be an http(s) URL, got {}",
                cfg.base_url
            )));
        }
        let transport = Transport {
            connect_timeout: cfg.connect_timeout,
            request_timeout: cfg.request_timeout,
            user_agent: cfg.user_agent.clone(),
            headers: cfg
                .headers
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        };
        Ok(Self {
            base,
            transport: Arc::new(transport),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Base URL with `segments` appended. Each segment is percent-encoded, so
    /// an id containing `/` or `?` stays inside its own segment.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // Cannot fail: `new` rejects cannot-be-a-base URLs.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.set_query(None);
        url
    }

    /// GET `url` and unwrap `{ T::KEY: T }` from a 2xx response.
    pub(crate) async fn get<T>(&self, ctx: &RequestContext, url: Url) -> Result<T>
    where
        T: Enveloped + DeserializeOwned,
    {
        let req = HttpRequest {
            method: Method::Get,
            url,
            body: None,
        };
        self.send(ctx, req, Expect::Success).await
    }

    /// POST `{ B::KEY: body }` to `url` and unwrap `{ T::KEY: T }`.
    pub(crate) async fn post<B, T>(
        &self,
        ctx: &RequestContext,
        url: Url,
        body: B,
        expect: Expect,
    ) -> Result<T>
    where
        B: Enveloped + Serialize,
        T: Enveloped + DeserializeOwned,
    {
        let body = serde_json::to_vec(&Envelope(body)).map_err(Error::Encode)?;
        let req = HttpRequest {
            method: Method::Post,
            url,
            body: Some(body),
        };
        self.send(ctx, req, expect).await
    }

    async fn send<T>(&self, ctx: &RequestContext, req: HttpRequest, expect: Expect) -> Result<T>
    where
        T: Enveloped + DeserializeOwned,
    {
        ctx.check()?;

        let method = req.method;
        let path = req.url.path().to_string();
        let started = Instant::now();
        let gave_up = Arc::new(AtomicBool::new(false));

        let mut handle = {
            let transport = Arc::clone(&self.transport);
            let ctx = ctx.clone();
            let gave_up = Arc::clone(&gave_up);
            tokio::task::spawn_blocking(move || transport.perform(&req, &ctx, &gave_up))
        };

        let deadline = async {
            match ctx.deadline() {
                Some(d) => tokio::time::sleep_until(tokio::time::Instant::from_std(d)).await,
                None => std::future::pending::<()>().await,
            }
        };

        let outcome = tokio::select! {
            joined = &mut handle => joined?,
            _ = ctx.cancel_token().cancelled() => Err(Error::Cancelled),
            _ = deadline => Err(Error::DeadlineExceeded),
        };

        let response = match outcome {
            Ok(r) => r,
            Err(e) => {
                gave_up.store(true, Ordering::Relaxed);
                tracing::debug!("{} {} failed after {:?}: {}", method, path, started.elapsed(), e);
                return Err(e);
            }
        };
        tracing::debug!(
            "{} {} -> HTTP {} in {:?}",
            method,
            path,
            response.status,
            started.elapsed()
        );

        let body = response.check(expect)?;
        let envelope: Envelope<T> = serde_json::from_slice(&body).map_err(Error::Decode)?;
        Ok(envelope.into_inner())
    }
}
