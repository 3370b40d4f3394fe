//! Request URL construction.
//!
//! [`build_url`] joins a base endpoint with an ordered list of query
//! parameters. [`SearchSettings::to_params`] turns the user's search
//! preferences into that list, in the order the Guardian API documents
//! them.

use crate::config::SearchSettings;
use itertools::Itertools;

/// Insertion-ordered query parameters with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`. A key already present keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((key, value)),
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Append `params` to `base_endpoint` as a percent-encoded query string.
///
/// `base_endpoint` is expected to be an absolute URL without a query
/// string; it is not validated here. Keys and values are encoded as query
/// components, so `mexico and surf` becomes `mexico%20and%20surf` and the
/// comma in `headline,trailText` becomes `%2C`.
pub fn build_url(base_endpoint: &str, params: &QueryParams) -> String {
    if params.is_empty() {
        return base_endpoint.to_string();
    }
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .join("&");
    format!("{}?{}", base_endpoint, query)
}

impl SearchSettings {
    /// The search preferences as request parameters, `api-key` last.
    pub fn to_params(&self, api_key: &str) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .insert("order-by", &self.order_by)
            .insert("q", &self.query)
            .insert("page-size", &self.page_size)
            .insert("show-tags", &self.show_tags)
            .insert("show-elements", &self.show_elements)
            .insert("show-fields", &self.show_fields)
            .insert("api-key", api_key);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn value<'a>(params: &'a QueryParams, key: &str) -> Option<&'a str> {
        params.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    fn reparse(url: &str) -> Vec<(String, String)> {
        Url::parse(url)
            .unwrap()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_default_search_url() {
        let params = SearchSettings::default().to_params("test");
        let url = build_url("https://content.guardianapis.com/search", &params);
        assert_eq!(
            url,
            "https://content.guardianapis.com/search?order-by=newest&q=mexico%20and%20surf\
             &page-size=20&show-tags=contributor&show-elements=image\
             &show-fields=headline%2Cthumbnail%2CtrailText&api-key=test"
        );
    }

    #[test]
    fn test_round_trip_preserves_order_and_values() {
        let orderings: [&[(&str, &str)]; 3] = [
            &[("q", "fish & chips"), ("order-by", "newest"), ("page-size", "5")],
            &[("page-size", "5"), ("q", "fish & chips"), ("order-by", "newest")],
            &[("api-key", "a=b?c"), ("q", "100% café"), ("show-fields", "headline,trailText")],
        ];
        for pairs in orderings {
            let params: QueryParams = pairs.iter().copied().collect();
            let url = build_url("https://example.com/search", &params);
            let expected: Vec<(String, String)> = pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            assert_eq!(reparse(&url), expected, "url was {url}");
        }
    }

    #[test]
    fn test_no_params_returns_base() {
        assert_eq!(
            build_url("https://example.com/search", &QueryParams::new()),
            "https://example.com/search"
        );
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = QueryParams::new();
        params.insert("q", "one").insert("page-size", "10").insert("q", "two");
        assert_eq!(params.iter().count(), 2);
        assert_eq!(value(&params, "q"), Some("two"));
        assert_eq!(params.iter().next(), Some(("q", "two")));
    }

    #[test]
    fn test_to_params_uses_settings() {
        let settings = SearchSettings {
            order_by: "relevance".to_string(),
            query: "surf".to_string(),
            page_size: "3".to_string(),
            ..SearchSettings::default()
        };
        let params = settings.to_params("k3y");
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            ["order-by", "q", "page-size", "show-tags", "show-elements", "show-fields", "api-key"]
        );
        assert_eq!(value(&params, "order-by"), Some("relevance"));
        assert_eq!(value(&params, "page-size"), Some("3"));
        assert_eq!(value(&params, "api-key"), Some("k3y"));
    }
}
