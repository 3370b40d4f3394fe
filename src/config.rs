//! Runtime configuration.
//!
//! Settings come from an optional YAML file and are then overridden by
//! command-line flags (see [`crate::cli::Cli`]). Every field has a default,
//! so an empty file or no file at all yields a working configuration
//! aimed at the public Guardian endpoint.
//!
//! ```yaml
//! endpoint: https://content.guardianapis.com/search
//! api_key: test
//! search:
//!   order_by: newest
//!   query: mexico and surf
//!   page_size: "20"
//! http:
//!   connect_timeout_ms: 15000
//!   read_timeout_ms: 10000
//! ```

use crate::cli::Cli;
use crate::error::NewsError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument, warn};

pub const DEFAULT_ENDPOINT: &str = "https://content.guardianapis.com/search";
pub const DEFAULT_PAGE_SIZE: &str = "20";

/// Top-level configuration passed to the query builder and the fetcher.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NewsConfig {
    /// Search endpoint, without a query string.
    pub endpoint: String,
    /// Guardian API key. The public `test` key is rate limited but works.
    pub api_key: String,
    pub search: SearchSettings,
    pub http: HttpSettings,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: "test".to_string(),
            search: SearchSettings::default(),
            http: HttpSettings::default(),
        }
    }
}

/// User-facing search preferences.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// `newest`, `oldest`, or `relevance`.
    pub order_by: String,
    pub query: String,
    /// Kept as a string because it is sent verbatim as a query parameter.
    pub page_size: String,
    pub show_tags: String,
    pub show_elements: String,
    pub show_fields: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            order_by: "newest".to_string(),
            query: "mexico and surf".to_string(),
            page_size: DEFAULT_PAGE_SIZE.to_string(),
            show_tags: "contributor".to_string(),
            show_elements: "image".to_string(),
            show_fields: "headline,thumbnail,trailText".to_string(),
        }
    }
}

/// Transport settings for the article fetcher.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpSettings {
    pub connect_timeout_ms: u64,
    pub read_timeout_ms: u64,
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            connect_timeout_ms: 15_000,
            read_timeout_ms: 10_000,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}

impl NewsConfig {
    /// Parse a configuration from YAML text.
    pub fn from_yaml(text: &str, origin: &str) -> Result<Self, NewsError> {
        // an empty file deserializes to unit, not to a mapping
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|e| NewsError::Config {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from `path`, or defaults when no path is given.
    #[instrument(level = "info", skip_all, fields(path = ?path))]
    pub async fn load(path: Option<&Path>) -> Result<Self, NewsError> {
        let Some(path) = path else {
            debug!("No config file given; using defaults");
            return Ok(Self::default());
        };
        let origin = path.display().to_string();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| NewsError::Config {
                path: origin.clone(),
                message: e.to_string(),
            })?;
        let config = Self::from_yaml(&text, &origin)?;
        debug!(endpoint = %config.endpoint, "Loaded configuration");
        Ok(config)
    }

    /// Apply command-line overrides on top of file settings.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(endpoint) = &cli.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(api_key) = &cli.api_key {
            self.api_key = api_key.clone();
        }
        if let Some(query) = &cli.query {
            self.search.query = query.clone();
        }
        if let Some(order_by) = &cli.order_by {
            self.search.order_by = order_by.clone();
        }
        if let Some(page_size) = &cli.page_size {
            self.search.page_size = page_size.clone();
        }
        self.search.normalize_page_size();
    }
}

impl SearchSettings {
    /// Replace a page size that is not a positive integer with the default.
    pub fn normalize_page_size(&mut self) {
        match self.page_size.trim().parse::<u32>() {
            Ok(n) if n > 0 => self.page_size = n.to_string(),
            _ => {
                warn!(page_size = %self.page_size, default = DEFAULT_PAGE_SIZE, "Invalid page size; using default");
                self.page_size = DEFAULT_PAGE_SIZE.to_string();
            }
        }
    }
}
