//! API configuration
//!
//! WASM has no runtime environment, so overrides are read at compile time.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiConfig {
    pub base_url: String,
    pub organizations_page_size: usize,
    pub models_page_size: usize,
    pub notifications_page_size: usize,
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            organizations_page_size: 10,
            models_page_size: 12,
            notifications_page_size: 10,
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Defaults overridden by `TOOLSAI_API_BASE_URL` / `TOOLSAI_LOG` at build time
    pub fn from_env() -> Self {
        Self::with_overrides(option_env!("TOOLSAI_API_BASE_URL"), option_env!("TOOLSAI_LOG"))
    }

    fn with_overrides(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = base_url.filter(|s| !s.is_empty()) {
            config.base_url = url.to_string();
        }
        if let Some(level) = log_level.filter(|s| !s.is_empty()) {
            config.log_level = level.to_string();
        }
        config
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Join a path onto the base URL with exactly one slash between them
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
