#![allow(dead_code)]

pub mod api_server;

use zd_core::{Client, ClientConfig};

/// Client pointed at `server`, with a short request timeout.
pub fn client_for(server: &api_server::ApiServer) -> Client {
    let mut cfg = ClientConfig::new(server.base_url.clone());
    cfg.request_timeout = std::time::Duration::from_secs(10);
    Client::new(&cfg).expect("client")
}
