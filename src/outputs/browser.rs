//! Tap-through to the full article in the system browser.

use crate::models::Article;
use std::error::Error;
use tracing::{info, instrument, warn};
use url::Url;

/// Pick the article for a 1-based list position.
pub fn select_article(articles: &[Article], number: usize) -> Option<&Article> {
    number.checked_sub(1).and_then(|i| articles.get(i))
}

/// Open the `number`-th listed article (1-based) in the default browser.
///
/// # Errors
///
/// Fails when `number` is out of range, the article URL is not an absolute
/// http(s) URL, or no browser could be launched.
#[instrument(level = "info", skip(articles))]
pub fn open_article(articles: &[Article], number: usize) -> Result<(), Box<dyn Error>> {
    let Some(article) = select_article(articles, number) else {
        warn!(count = articles.len(), "No article at that position");
        return Err(format!("no article #{number} (listing has {})", articles.len()).into());
    };

    let url = Url::parse(article.url())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("refusing to open non-web URL {url}").into());
    }

    open::that(url.as_str())?;
    info!(%url, "Opened article in browser");
    Ok(())
}
