//! Configuration loaded from `~/.config/zd/config.toml`, with environment
//! overrides for the base URL and credentials.

use crate::client::ClientConfig;
use crate::model::TicketImportOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Overrides `base_url`.
pub const ENV_BASE_URL: &str = "ZD_BASE_URL";
/// Becomes the `Authorization` header.
pub const ENV_AUTHORIZATION: &str = "ZD_AUTHORIZATION";

/// Defaults for the import commands (optional `[import]` section).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    pub archive_immediately: bool,
}

impl ImportConfig {
    pub fn options(&self) -> TicketImportOptions {
        TicketImportOptions {
            archive_immediately: self.archive_immediately,
        }
    }
}

/// Global configuration. Every key is optional in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZdConfig {
    /// API root, e.g. `https://acme.zendesk.com/api/v2`.
    pub base_url: String,
    pub connect_timeout_secs: u64,
    /// Per-request cap; command-level timeouts can only shorten it.
    pub request_timeout_secs: u64,
    /// None = `zd/<version>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Extra headers sent verbatim on every request.
    pub headers: BTreeMap<String, String>,
    pub import: ImportConfig,
}

impl Default for ZdConfig {
    fn default() -> Self {
        Self {
            base_url: "https://example.zendesk.com/api/v2".to_string(),
            connect_timeout_secs: 15,
            request_timeout_secs: 60,
            user_agent: None,
            headers: BTreeMap::new(),
            import: ImportConfig::default(),
        }
    }
}

impl ZdConfig {
    /// Apply `ZD_BASE_URL` / `ZD_AUTHORIZATION` from `lookup` (usually the process env).
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }
        if let Some(auth) = lookup(ENV_AUTHORIZATION).filter(|v| !v.trim().is_empty()) {
            self.headers
                .insert("Authorization".to_string(), auth.trim().to_string());
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
            headers: self.headers.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("zd")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Read the config at `path`, writing a default file there if none exists.
pub fn load_or_init_at(path: &Path) -> Result<ZdConfig> {
    if !path.exists() {
        let default_cfg = ZdConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: ZdConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Load from the XDG config dir, then apply environment overrides.
pub fn load_or_init() -> Result<ZdConfig> {
    let path = config_path()?;
    let mut cfg = load_or_init_at(&path)?;
    cfg.apply_env(|key| std::env::var(key).ok());
    Ok(cfg)
}
