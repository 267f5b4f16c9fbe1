pub mod config;
pub mod logging;

pub mod client;
pub mod error;
pub mod imports;
pub mod jobs;
pub mod model;

pub use client::{CancelToken, Client, ClientConfig, RequestContext};
pub use error::{Error, Result};
pub use imports::TicketImportApi;
pub use jobs::JobStatusApi;
