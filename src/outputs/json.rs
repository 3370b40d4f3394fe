//! JSON export of the article list.
//!
//! Files are organised by the local date of the run:
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     └── articles.json
//! ```
//! A later run on the same day replaces that day's file.

use crate::models::Article;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;
use tokio::fs;
use tracing::{error, info, instrument};

/// What gets written: the query that produced the list, and the list.
#[derive(Debug, Serialize)]
pub struct ArticleExport<'a> {
    pub query: &'a str,
    pub fetched_on: String,
    pub articles: &'a [Article],
}

/// Write `articles` as `{json_output_dir}/{date}/articles.json` for today's date.
///
/// # Returns
///
/// The path that was written.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir, count = articles.len()))]
pub async fn write_articles(
    articles: &[Article],
    query: &str,
    json_output_dir: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    write_articles_for_date(articles, query, json_output_dir, Local::now().date_naive()).await
}

pub async fn write_articles_for_date(
    articles: &[Article],
    query: &str,
    json_output_dir: &str,
    date: NaiveDate,
) -> Result<PathBuf, Box<dyn Error>> {
    let export = ArticleExport {
        query,
        fetched_on: date.to_string(),
        articles,
    };
    let json = serde_json::to_string_pretty(&export)?;

    let full_json_dir = PathBuf::from(json_output_dir).join(&export.fetched_on);
    info!(full_json_dir = %full_json_dir.display(), "Ensuring JSON directory exists");
    if let Err(e) = fs::create_dir_all(&full_json_dir).await {
        error!(full_json_dir = %full_json_dir.display(), error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let output_json_filename = full_json_dir.join("articles.json");
    fs::write(&output_json_filename, json).await?;
    info!(path = %output_json_filename.display(), "Wrote article JSON");

    Ok(output_json_filename)
}
