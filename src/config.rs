//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the simulated submission delay
pub const SUBMIT_DELAY_ENV: &str = "RFQ_SUBMIT_DELAY_MS";

/// Delay applied by the simulated sink when nothing else is configured
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// Company shown in the card title when nothing else is configured
pub const DEFAULT_COMPANY_NAME: &str = "Tartaglia Marketing";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RfqConfig {
    /// Simulated submission delay in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// Company name shown in the card title
    pub company_name: Option<String>,
}

impl RfqConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "tartaglia", "rfq-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: RfqConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration, falling back to defaults if the file is unreadable
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            tracing::warn!("Ignoring unreadable config file: {err:#}");
            Self::default()
        })
    }

    /// Submission delay, with the environment taking precedence over the file
    pub fn submit_delay(&self) -> Duration {
        let env_value = std::env::var(SUBMIT_DELAY_ENV).ok();
        resolve_submit_delay(env_value.as_deref(), self.submit_delay_ms)
    }

    /// Company name for the card title
    pub fn company_name(&self) -> &str {
        self.company_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_COMPANY_NAME)
    }
}

fn resolve_submit_delay(env_value: Option<&str>, file_value: Option<u64>) -> Duration {
    if let Some(raw) = env_value {
        match raw.trim().parse::<u64>() {
            Ok(ms) => return Duration::from_millis(ms),
            Err(_) => tracing::warn!("{SUBMIT_DELAY_ENV}={raw:?} is not a number of milliseconds"),
        }
    }

    file_value
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_SUBMIT_DELAY)
}
