use anyhow::{bail, Context, Result};
use std::env;
use std::time::Duration;

/// Client-side configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the gymbook backend.
    pub base_url: String,
    /// When set, the mock coaches service is used instead of HTTP.
    pub use_mocks: bool,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, use_mocks: bool) -> Self {
        Self {
            base_url: base_url.into(),
            use_mocks,
            timeout: Duration::from_secs(30),
        }
    }

    /// Build the configuration from the environment.
    ///
    /// `GYMBOOK_API_URL` is required; startup fails hard without it.
    pub fn from_env() -> Result<Self> {
        let base_url =
            env::var("GYMBOOK_API_URL").context("GYMBOOK_API_URL must be set")?;
        if base_url.trim().is_empty() {
            bail!("GYMBOOK_API_URL must not be empty");
        }

        let use_mocks = env::var("GYMBOOK_USE_MOCKS")
            .map(|value| value == "true" || value == "1")
            .unwrap_or(false);

        let timeout_seconds = env::var("GYMBOOK_API_TIMEOUT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            base_url,
            use_mocks,
            timeout: Duration::from_secs(timeout_seconds),
        })
    }
}
