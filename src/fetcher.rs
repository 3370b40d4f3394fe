//! HTTP retrieval of search results.
//!
//! [`ArticleFetcher::fetch`] performs a single GET against a fully built
//! request URL and hands the body to [`crate::parser::parse_articles`].
//! It never fails: an absent or malformed URL, a non-200 status, or a
//! transport error (including connect and read timeouts) is logged and
//! results in an empty list.

use crate::config::HttpSettings;
use crate::error::NewsError;
use crate::models::Article;
use crate::parser::parse_articles;
use reqwest::{Client, ClientBuilder, StatusCode};
use std::time::Instant;
use tracing::{error, info, instrument, warn};
use url::Url;

/// Issues search requests with fixed connect and read timeouts.
///
/// Cloning is cheap; clones share the underlying connection pool but
/// every request owns its own response.
#[derive(Debug, Clone)]
pub struct ArticleFetcher {
    client: Client,
}

/// The client configuration used by [`ArticleFetcher::new`].
pub fn client_builder(settings: &HttpSettings) -> ClientBuilder {
    Client::builder()
        .connect_timeout(settings.connect_timeout())
        .read_timeout(settings.read_timeout())
        .user_agent(settings.user_agent.clone())
}

impl ArticleFetcher {
    /// Build a fetcher from transport settings.
    ///
    /// # Errors
    ///
    /// Fails only if the TLS backend cannot be initialised.
    pub fn new(settings: &HttpSettings) -> Result<Self, NewsError> {
        let client = client_builder(settings).build()?;
        Ok(Self { client })
    }

    /// Wrap an already configured client.
    #[cfg(test)]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetch and parse the articles behind `url`.
    ///
    /// Returns an empty list when there is nothing to show, whatever the
    /// reason; the cause is logged.
    #[instrument(level = "info", skip_all, fields(host = tracing::field::Empty))]
    pub async fn fetch(&self, url: Option<&str>) -> Vec<Article> {
        let Some(raw) = url else {
            warn!("No request URL; skipping fetch");
            return Vec::new();
        };

        let url = match Url::parse(raw) {
            Ok(url) => url,
            Err(source) => {
                let e = NewsError::InvalidUrl {
                    url: raw.to_string(),
                    source,
                };
                error!(error = %e, "Error creating URL");
                return Vec::new();
            }
        };
        tracing::Span::current().record("host", url.host_str().unwrap_or_default());

        let t0 = Instant::now();
        let body = match self.fetch_body(&url).await {
            Ok(body) => body,
            Err(NewsError::Status(status)) => {
                warn!(status = status.as_u16(), "Error response code");
                String::new()
            }
            Err(e) => {
                error!(
                    error = %e,
                    elapsed_ms = t0.elapsed().as_millis() as u64,
                    "Problem retrieving the article JSON results"
                );
                String::new()
            }
        };

        let articles = parse_articles(&body);
        info!(
            count = articles.len(),
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched articles"
        );
        articles
    }

    /// GET `url` and return the body of a 200 response as UTF-8 text.
    async fn fetch_body(&self, url: &Url) -> Result<String, NewsError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(NewsError::Status(status));
        }
        let bytes = response.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
