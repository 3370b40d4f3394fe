//! Parsing of Guardian search responses.
//!
//! The API nests results two levels down:
//!
//! ```text
//! { "response": { "results": [
//!     { "sectionName", "webPublicationDate", "webUrl",
//!       "fields": { "headline", "trailText" },
//!       "tags": [ { "firstName", "lastName" }, ... ] }   // tags optional
//! ] } }
//! ```
//!
//! There are two levels of recovery. A broken document, or any result item
//! missing a required field, yields no articles at all. A missing or
//! incomplete contributor tag only blanks that article's author.

use crate::error::NewsError;
use crate::models::{Article, Author};
use crate::utils::truncate_for_log;
use serde::Deserialize;
use tracing::{debug, error, instrument};

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    response: SearchResponse,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<ResultItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResultItem {
    section_name: String,
    web_publication_date: String,
    web_url: String,
    fields: ResultFields,
    // left untyped so a malformed tag list only costs the author
    #[serde(default)]
    tags: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResultFields {
    headline: String,
    trail_text: String,
}

impl From<ResultItem> for Article {
    fn from(item: ResultItem) -> Self {
        let author = Author::from_tags(item.tags.as_ref()).unwrap_or_default();
        Article::new(
            item.fields.headline,
            item.fields.trail_text,
            author,
            item.web_publication_date,
            item.section_name,
            item.web_url,
        )
    }
}

/// Parse a search response body into articles, in document order.
///
/// Never fails: any document-level problem is logged and an empty list is
/// returned.
#[instrument(level = "info", skip_all, fields(bytes = json_text.len()))]
pub fn parse_articles(json_text: &str) -> Vec<Article> {
    match try_parse_articles(json_text) {
        Ok(articles) => {
            debug!(count = articles.len(), "Parsed search results");
            articles
        }
        Err(e) => {
            error!(
                error = %e,
                body_preview = %truncate_for_log(json_text, 300),
                "Problem parsing the article JSON results"
            );
            Vec::new()
        }
    }
}

/// Strict variant of [`parse_articles`] that reports why a document was rejected.
pub fn try_parse_articles(json_text: &str) -> Result<Vec<Article>, NewsError> {
    if json_text.trim().is_empty() {
        return Err(NewsError::EmptyBody);
    }
    let envelope: SearchEnvelope = serde_json::from_str(json_text)?;
    Ok(envelope
        .response
        .results
        .into_iter()
        .map(Article::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(n: usize) -> serde_json::Value {
        json!({
            "id": format!("travel/2018/mar/{n}/surf"),
            "sectionName": "Travel",
            "webPublicationDate": "2018-03-12T10:15:30Z",
            "webUrl": format!("https://www.theguardian.com/travel/{n}"),
            "fields": {
                "headline": format!("Headline {n}"),
                "trailText": "<strong>Big</strong> waves",
                "thumbnail": "https://media.guim.co.uk/thumb.jpg"
            },
            "tags": [ { "id": "profile/jane", "firstName": "jane", "lastName": "doe" } ]
        })
    }

    fn document(results: Vec<serde_json::Value>) -> String {
        json!({
            "response": {
                "status": "ok",
                "total": results.len(),
                "results": results
            }
        })
        .to_string()
    }

    #[test]
    fn test_parses_all_results_in_order() {
        let body = document((0..5).map(item).collect());
        let articles = parse_articles(&body);
        assert_eq!(articles.len(), 5);
        for (n, article) in articles.iter().enumerate() {
            assert_eq!(article.title(), format!("Headline {n}"));
            assert_eq!(article.url(), format!("https://www.theguardian.com/travel/{n}"));
        }
    }

    #[test]
    fn test_maps_every_field() {
        let articles = parse_articles(&document(vec![item(1)]));
        let article = &articles[0];
        assert_eq!(article.title(), "Headline 1");
        assert_eq!(article.trail_text(), "<strong>Big</strong> waves");
        assert_eq!(article.author().first_name, "jane");
        assert_eq!(article.author().last_name, "doe");
        assert_eq!(article.publication_date(), "2018-03-12T10:15:30Z");
        assert_eq!(article.section(), "Travel");
        assert_eq!(article.url(), "https://www.theguardian.com/travel/1");
    }

    #[test]
    fn test_missing_tags_blanks_author_only() {
        let mut untagged = item(1);
        untagged.as_object_mut().unwrap().remove("tags");
        let body = document(vec![item(0), untagged, item(2)]);

        let articles = parse_articles(&body);
        assert_eq!(articles.len(), 3);
        assert_eq!(articles[1].author(), &Author::default());
        assert_eq!(articles[1].title(), "Headline 1");
        assert_eq!(articles[2].author().first_name, "jane");
    }

    #[test]
    fn test_incomplete_or_odd_tags_blank_author() {
        let mut no_last = item(0);
        no_last["tags"] = json!([{ "firstName": "jane" }]);
        let mut empty = item(1);
        empty["tags"] = json!([]);
        let mut not_array = item(2);
        not_array["tags"] = json!({ "firstName": "jane", "lastName": "doe" });
        let mut null_tags = item(3);
        null_tags["tags"] = serde_json::Value::Null;

        let articles = parse_articles(&document(vec![no_last, empty, not_array, null_tags]));
        assert_eq!(articles.len(), 4);
        for article in &articles {
            assert_eq!(article.author().first_name, "");
            assert_eq!(article.author().last_name, "");
        }
    }

    #[test]
    fn test_unparseable_json_is_empty() {
        assert!(parse_articles("{\"response\": ").is_empty());
        assert!(parse_articles("<html>rate limited</html>").is_empty());
    }

    #[test]
    fn test_empty_body_is_empty() {
        assert!(parse_articles("").is_empty());
        assert!(matches!(try_parse_articles("  "), Err(NewsError::EmptyBody)));
    }

    #[test]
    fn test_missing_structural_keys_is_empty() {
        assert!(parse_articles("{}").is_empty());
        assert!(parse_articles(r#"{"response": {}}"#).is_empty());
        assert!(parse_articles(r#"{"response": {"results": {}}}"#).is_empty());
        assert!(parse_articles(r#"{"response": {"results": [1, 2]}}"#).is_empty());
    }

    #[test]
    fn test_no_results_is_empty_success() {
        let parsed = try_parse_articles(&document(vec![])).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_one_malformed_item_discards_batch() {
        let mut broken = item(1);
        broken["fields"].as_object_mut().unwrap().remove("headline");
        let body = document(vec![item(0), broken, item(2)]);

        assert!(matches!(try_parse_articles(&body), Err(NewsError::Json(_))));
        assert!(parse_articles(&body).is_empty());
    }
}
