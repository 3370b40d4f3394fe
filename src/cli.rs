//! Command-line interface definitions for Guardian News.
//!
//! Every search setting can also come from the YAML config file; flags
//! given here win over the file.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the Guardian News client.
///
/// # Examples
///
/// ```sh
/// # Newest articles for the default query
/// guardian_news
///
/// # Custom search, 5 results, open the first one in a browser
/// guardian_news --query "big wave surfing" --page-size 5 --open 1
///
/// # Use a config file and export the listing as JSON
/// guardian_news -c news.yaml -j ./json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long, env = "GUARDIAN_NEWS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Search endpoint (without query string)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Guardian API key
    #[arg(long, env = "GUARDIAN_API_KEY")]
    pub api_key: Option<String>,

    /// Free-text search terms
    #[arg(short, long)]
    pub query: Option<String>,

    /// Result ordering: newest, oldest, or relevance
    #[arg(short, long)]
    pub order_by: Option<String>,

    /// Number of articles to request
    #[arg(short, long)]
    pub page_size: Option<String>,

    /// Also write the listing as JSON under this directory
    #[arg(short, long)]
    pub json_output_dir: Option<String>,

    /// Open the N-th listed article (1-based) in the default browser
    #[arg(long, value_name = "N")]
    pub open: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_arguments() {
        let cli = Cli::parse_from(["guardian_news"]);
        assert!(cli.query.is_none());
        assert!(cli.page_size.is_none());
        assert!(cli.open.is_none());
        assert!(cli.json_output_dir.is_none());
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "guardian_news",
            "-q",
            "surf",
            "-o",
            "oldest",
            "-p",
            "10",
            "-j",
            "/tmp/json",
        ]);

        assert_eq!(cli.query.as_deref(), Some("surf"));
        assert_eq!(cli.order_by.as_deref(), Some("oldest"));
        assert_eq!(cli.page_size.as_deref(), Some("10"));
        assert_eq!(cli.json_output_dir.as_deref(), Some("/tmp/json"));
    }

    #[test]
    fn test_cli_open_index() {
        let cli = Cli::parse_from(["guardian_news", "--open", "3"]);
        assert_eq!(cli.open, Some(3));
    }

    #[test]
    fn test_cli_rejects_non_numeric_open() {
        assert!(Cli::try_parse_from(["guardian_news", "--open", "first"]).is_err());
    }
}
