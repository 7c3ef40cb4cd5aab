use anyhow::{Context, Result};
use std::path::PathBuf;

use super::tiers::{LeagueTier, get_tiers};

pub const TOKEN_VAR: &str = "STRATZ_TOKEN";
pub const API_URL_VAR: &str = "STRATZ_API_URL";
pub const OUTPUT_DIR_VAR: &str = "DOTA2_OUTPUT_DIR";

pub struct ApiSettings {
    pub url: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    /// Retries after the first attempt of a request
    pub retries: usize,
    pub rate_limit_ms: u64,
    pub token: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            url: "https://api.stratz.com/graphql".to_string(),
            user_agent: "STRATZ_API",
            timeout_secs: 30,
            retries: 3,
            rate_limit_ms: 100, // 10 req/sec
            token: String::new(),
        }
    }
}

/// Page sizes for both pagination levels
#[derive(Debug, Clone, Copy)]
pub struct PageSettings {
    pub leagues_per_page: usize,
    pub series_per_page: usize,
    pub matches_per_page: usize,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            leagues_per_page: 10,
            series_per_page: 20,
            matches_per_page: 20,
        }
    }
}

pub struct OutputSettings {
    pub dir: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
        }
    }
}

pub struct AppConfig {
    pub api: ApiSettings,
    pub pages: PageSettings,
    pub output: OutputSettings,
    pub tiers: Vec<LeagueTier>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            api: ApiSettings::default(),
            pages: PageSettings::default(),
            output: OutputSettings::default(),
            tiers: get_tiers(),
        }
    }

    /// Build the configuration from the process environment, loading `.env` first
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        config.api.token = lookup(TOKEN_VAR)
            .filter(|token| !token.trim().is_empty())
            .with_context(|| format!("{} is not set", TOKEN_VAR))?;

        if let Some(url) = lookup(API_URL_VAR) {
            config.api.url = url;
        }
        if let Some(dir) = lookup(OUTPUT_DIR_VAR) {
            config.output.dir = PathBuf::from(dir);
        }

        Ok(config)
    }
}
