//! Application configuration
//!
//! ```toml
//! log_requests = true
//!
//! [cors]
//! headers = { "Access-Control-Allow-Origin" = "*" }
//! ```

use crate::middleware::CorsConfig;
use crate::Result;
use serde::Deserialize;
use std::path::Path;

/// Configuration for an [`App`](crate::App)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    /// Log every completed request at `info`
    pub log_requests: bool,
    /// Headers for the CORS middleware; empty disables it
    pub cors: CorsConfig,
}

/// File layout, before header validation
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    log_requests: bool,
    cors: RawCors,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawCors {
    headers: Option<toml::Value>,
}

impl ServerConfig {
    /// Parse from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(text)?;
        let cors = match &raw.cors.headers {
            Some(headers) => CorsConfig::from_toml(headers)?,
            None => CorsConfig::default(),
        };

        Ok(Self {
            log_requests: raw.log_requests,
            cors,
        })
    }

    /// Load from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), cors = config.cors.is_configured(), "config loaded");
        Ok(config)
    }
}
