//! Plain-text rendering of the article list.
//!
//! Each entry mirrors a list row: section, title, author (omitted when
//! unknown), date, and the trail text with its markup stripped.
//!
//! ```text
//!  1. Travel | Mar 12, 2018
//!     Surfing in Oaxaca
//!     by Jane Doe
//!     Big waves hit the coast
//!     https://www.theguardian.com/travel/surf
//! ```

use crate::connectivity::EmptyState;
use crate::dates::format_publication_date;
use crate::models::Article;
use crate::utils::strip_markup;
use std::fmt::Write;

/// Render one article, numbered from 1.
pub fn render_article(number: usize, article: &Article) -> String {
    let mut out = String::new();
    let indent = " ".repeat(format!("{number:>2}. ").len());

    // writing to a String cannot fail
    let _ = writeln!(
        out,
        "{number:>2}. {} | {}",
        article.section(),
        format_publication_date(article.publication_date())
    );
    let _ = writeln!(out, "{indent}{}", article.title());
    if let Some(name) = article.author().display_name() {
        let _ = writeln!(out, "{indent}by {name}");
    }
    let summary = strip_markup(article.trail_text());
    if !summary.is_empty() {
        let _ = writeln!(out, "{indent}{summary}");
    }
    let _ = writeln!(out, "{indent}{}", article.url());
    out
}

/// Render the whole list, or the empty-state message when there is nothing to show.
pub fn render_listing(articles: &[Article], empty: EmptyState) -> String {
    if articles.is_empty() {
        return format!("{}\n", empty.message());
    }
    articles
        .iter()
        .enumerate()
        .map(|(i, article)| render_article(i + 1, article))
        .collect::<Vec<_>>()
        .join("\n")
}
