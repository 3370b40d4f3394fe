//! Data models for search results.
//!
//! - [`Article`]: one search result, as handed to the listing layer
//! - [`Author`]: the contributor attached to an article, if any
//!
//! Articles are only ever built by [`crate::parser`]; once built they are
//! read-only.

use crate::utils::upcase;
use serde::Serialize;

/// The contributor credited on an article.
///
/// First and last name always travel together: an article either has an
/// author with both names, or no author at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    /// Build an author from the `tags` value of a result item.
    ///
    /// Only the first tag is considered. Returns `None` when `tags` is
    /// missing, not an array, empty, or when the first tag lacks either
    /// name as a string.
    pub fn from_tags(tags: Option<&serde_json::Value>) -> Option<Self> {
        let first = tags?.as_array()?.first()?.as_object()?;
        let first_name = first.get("firstName")?.as_str()?;
        let last_name = first.get("lastName")?.as_str()?;
        Some(Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        })
    }

    /// Display form with each name capitalised, e.g. `"jane doe"` -> `"Jane Doe"`.
    ///
    /// Returns `None` when either name is blank, which the listing treats
    /// as "no author line".
    pub fn display_name(&self) -> Option<String> {
        if self.first_name.is_empty() || self.last_name.is_empty() {
            return None;
        }
        Some(format!(
            "{} {}",
            upcase(&self.first_name),
            upcase(&self.last_name)
        ))
    }
}

/// A single article returned by the search API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    title: String,
    /// Short summary; may contain inline HTML.
    trail_text: String,
    author: Author,
    /// Raw `webPublicationDate`, e.g. `2018-03-12T10:15:30Z`.
    publication_date: String,
    section: String,
    url: String,
}

impl Article {
    pub fn new(
        title: String,
        trail_text: String,
        author: Author,
        publication_date: String,
        section: String,
        url: String,
    ) -> Self {
        Self {
            title,
            trail_text,
            author,
            publication_date,
            section,
            url,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn trail_text(&self) -> &str {
        &self.trail_text
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn publication_date(&self) -> &str {
        &self.publication_date
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_author_from_first_tag() {
        let tags = json!([
            { "firstName": "jane", "lastName": "doe" },
            { "firstName": "john", "lastName": "roe" }
        ]);
        let author = Author::from_tags(Some(&tags)).unwrap();
        assert_eq!(author.first_name, "jane");
        assert_eq!(author.last_name, "doe");
    }

    #[test]
    fn test_author_absent_shapes() {
        assert_eq!(Author::from_tags(None), None);
        assert_eq!(Author::from_tags(Some(&json!([]))), None);
        assert_eq!(Author::from_tags(Some(&json!("contributor"))), None);
        assert_eq!(Author::from_tags(Some(&json!([42]))), None);
        assert_eq!(
            Author::from_tags(Some(&json!([{ "firstName": "jane" }]))),
            None
        );
        assert_eq!(
            Author::from_tags(Some(&json!([{ "firstName": "jane", "lastName": null }]))),
            None
        );
    }

    #[test]
    fn test_display_name_capitalises() {
        let author = Author {
            first_name: "jane".to_string(),
            last_name: "doe".to_string(),
        };
        assert_eq!(author.display_name().as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_display_name_hidden_when_empty() {
        assert_eq!(Author::default().display_name(), None);
    }

    #[test]
    fn test_article_serialization() {
        let article = Article::new(
            "Surf's up".to_string(),
            "<strong>Waves</strong> in Oaxaca".to_string(),
            Author::default(),
            "2018-03-12T10:15:30Z".to_string(),
            "Travel".to_string(),
            "https://www.theguardian.com/travel/surf".to_string(),
        );

        let json = serde_json::to_string(&article).unwrap();
        assert!(json.contains("\"title\":\"Surf's up\""));
        assert!(json.contains("\"section\":\"Travel\""));
        assert_eq!(article.author().first_name, "");
        assert_eq!(article.author().last_name, "");
    }
}
