//! Error types for the fetch and parse pipeline.
//!
//! None of these escape the public boundary functions
//! ([`crate::fetcher::ArticleFetcher::fetch`], [`crate::parser::parse_articles`]);
//! they exist so the internal steps can use `?` and so each failure is
//! logged with a precise cause before being turned into an empty result.

use reqwest::StatusCode;

/// Everything that can go wrong between building a request URL and
/// holding a list of articles.
#[derive(Debug, thiserror::Error)]
pub enum NewsError {
    /// The request URL could not be parsed.
    #[error("invalid request URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Connecting, sending, or reading the body failed (including timeouts).
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with something other than 200 OK.
    #[error("unexpected response status {0}")]
    Status(StatusCode),

    /// The response body is not a JSON document of the expected shape.
    #[error("malformed search response: {0}")]
    Json(#[from] serde_json::Error),

    /// The response body was empty, so there is no document to parse.
    #[error("empty response body")]
    EmptyBody,

    /// Reading or parsing the configuration file failed.
    #[error("config error in {path}: {message}")]
    Config { path: String, message: String },
}
