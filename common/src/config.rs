use std::fmt;
use std::time::Duration;

use tracing::debug;

use crate::error::ConfigError;

pub const API_KEY_VAR: &str = "NEIS_API_KEY";
pub const BASE_URL_VAR: &str = "NEIS_BASE_URL";
pub const TIMEOUT_VAR: &str = "NEIS_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "https://open.neis.go.kr/hub";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Process-wide settings, loaded once at startup and handed to the adapters.
#[derive(Clone)]
pub struct Config {
    /// NEIS open API access key. Never printed.
    api_key: String,
    /// Root of the NEIS hub, without a trailing slash.
    pub base_url: String,
    /// Applied to every outbound request.
    pub timeout: Duration,
}

impl Config {
    /// Builds a config with the default endpoint and timeout.
    ///
    /// A blank key counts as missing.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key: String = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key: String = lookup(API_KEY_VAR).ok_or(ConfigError::MissingApiKey)?;
        let mut cfg: Config = Config::new(api_key)?;

        if let Some(base_url) = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
            debug!("{BASE_URL_VAR} set, using {base_url}");
            cfg = cfg.with_base_url(base_url);
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs: u64 = raw
                .trim()
                .parse()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(raw.clone()))?;
            cfg.timeout = Duration::from_secs(secs);
        }

        Ok(cfg)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
