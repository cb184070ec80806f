// src/core/config_manager.rs
//! Client configuration - service location plus the fixed upload limits

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
pub const MAX_FILE_NAME_LENGTH: usize = 255;
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TRANSLATE_TO: &str = "en";

const API_URL_VAR: &str = "ANALYSIS_API_URL";
const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: String,
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub max_body_bytes: u64,
    pub translate_to: String,
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            max_body_bytes: MAX_FILE_SIZE_BYTES,
            translate_to: DEFAULT_TRANSLATE_TO.to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: u64) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[derive(Debug, Deserialize)]
struct ProfileConfig {
    api_url: String,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: Option<ProfileConfig>,
    production: Option<ProfileConfig>,
}

impl ConfigManager {
    /// Load configuration from the process environment and working directory
    pub fn load() -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading client configuration for environment: {}", environment);

        let env_url = std::env::var(API_URL_VAR).ok();
        let config_path = PathBuf::from(CONFIG_FILE);
        let base_url = Self::resolve_base_url(env_url.as_deref(), &config_path, &environment)?;

        info!("Analysis service: {}", base_url);

        Ok(Self {
            environment,
            service: ServiceConfig::new(base_url),
        })
    }

    fn get_environment() -> String {
        std::env::var("RESUME_ANALYSER_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    /// Environment variable wins, then the config file profile, then the default.
    fn resolve_base_url(
        env_url: Option<&str>,
        config_path: &Path,
        environment: &str,
    ) -> Result<String> {
        if let Some(url) = env_url.map(str::trim).filter(|u| !u.is_empty()) {
            return Ok(url.to_string());
        }

        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let file: ConfigFile = serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?;

            let profile = match environment {
                "production" => file.production,
                _ => file.local,
            };
            if let Some(profile) = profile {
                return Ok(profile.api_url);
            }
        }

        Ok(DEFAULT_API_URL.to_string())
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
