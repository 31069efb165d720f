use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Public GitHub REST API root.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Largest page size the repositories endpoint accepts.
pub const MAX_PER_PAGE: u32 = 100;

/// Optional settings loaded from `~/.config/appsrc/config.toml`.
///
/// Every key may be omitted; a missing file means all defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppsrcConfig {
    /// API root, e.g. a GitHub Enterprise `https://ghe.example.com/api/v3`.
    pub api_base: String,
    /// Repositories requested per page (clamped to 1..=100).
    pub per_page: u32,
    /// Per-request timeout in seconds. Unset = wait indefinitely.
    pub timeout_secs: Option<u64>,
    /// User-Agent header; GitHub rejects requests without one.
    pub user_agent: String,
}

impl Default for AppsrcConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            per_page: MAX_PER_PAGE,
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl AppsrcConfig {
    /// Page size actually sent to the API.
    pub fn effective_per_page(&self) -> u32 {
        self.per_page.clamp(1, MAX_PER_PAGE)
    }
}

pub fn default_user_agent() -> String {
    format!("appsrc/{}", env!("CARGO_PKG_VERSION"))
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("appsrc")?;
    Ok(xdg_dirs.get_config_home().join("appsrc").join("config.toml"))
}

/// Load configuration from an explicit path. The file must exist and parse.
pub fn load_from(path: &Path) -> Result<AppsrcConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: AppsrcConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from the XDG config dir, falling back to defaults.
///
/// Never writes to disk. A missing file is normal; an unreadable or malformed
/// one is logged and ignored.
pub fn load_or_default() -> AppsrcConfig {
    let path = match config_path() {
        Ok(p) => p,
        Err(e) => {
            tracing::debug!("no config dir: {:#}", e);
            return AppsrcConfig::default();
        }
    };
    if !path.exists() {
        return AppsrcConfig::default();
    }
    match load_from(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("ignoring config: {:#}", e);
            AppsrcConfig::default()
        }
    }
}
