use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sort::SortKey;

/// Client configuration, embedded into the app at build time from
/// `app/leptos-ui/config/repolens.toml`.
///
/// The analysis endpoint is fixed per build; nothing is read from the
/// environment at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl ClientConfig {
    /// Parse and validate a TOML document. Missing sections and keys take
    /// their defaults.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let cfg: ClientConfig =
            toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        self.validate()?;
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()
    }

    /// Full URL of the analyze endpoint.
    pub fn analyze_url(&self) -> String {
        format!(
            "{}{}",
            self.api.base_url.trim_end_matches('/'),
            self.api.analyze_path
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_analyze_path")]
    pub analyze_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            analyze_path: default_analyze_path(),
        }
    }
}

impl ApiConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let base = self.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "api.base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        if !self.analyze_path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "api.analyze_path must start with '/', got '{}'",
                self.analyze_path
            )));
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".into()
}
fn default_analyze_path() -> String {
    "/analyze".into()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Order applied to every fresh result set.
    #[serde(default)]
    pub default_sort: SortKey,
}
