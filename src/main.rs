//! # Guardian News
//!
//! Searches the Guardian content API and lists the matching articles in
//! the terminal, newest first by default.
//!
//! ## Usage
//!
//! ```sh
//! guardian_news --query "mexico and surf" --page-size 10 --open 1
//! ```
//!
//! ## Architecture
//!
//! 1. **Configuration**: YAML file plus CLI overrides ([`config`], [`cli`])
//! 2. **Query**: search settings become a request URL ([`query`])
//! 3. **Loading**: a background task fetches and parses the results
//!    ([`loader`], [`fetcher`], [`parser`])
//! 4. **Output**: terminal listing, optional JSON export, optional
//!    tap-through to the browser ([`outputs`])
//!
//! Fetch and parse never fail outward: an empty list is the only failure
//! signal, and [`connectivity`] decides which empty message to show.

use clap::Parser;
use std::error::Error;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod connectivity;
mod dates;
mod error;
mod fetcher;
mod loader;
mod models;
mod outputs;
mod parser;
mod query;
mod utils;

use cli::Cli;
use config::NewsConfig;
use connectivity::{Connectivity, EmptyState, NetworkCheck, empty_state_after_load};
use fetcher::ArticleFetcher;
use loader::{ArticleLoader, LoaderRegistry};
use outputs::{browser, json, listing};
use query::build_url;
use utils::ensure_writable_dir;

/// Identity of the single article list this program shows.
const ARTICLE_LOADER_ID: u32 = 1;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("guardian_news starting up");

    // Parse CLI and config
    let args = Cli::parse();
    debug!(?args.config, ?args.json_output_dir, "Parsed CLI arguments");

    let mut config = NewsConfig::load(args.config.as_deref()).await?;
    config.apply_cli(&args);
    info!(
        endpoint = %config.endpoint,
        query = %config.search.query,
        order_by = %config.search.order_by,
        page_size = %config.search.page_size,
        "Configuration ready"
    );

    // Early check: ensure JSON output dir is writable
    if let Some(dir) = &args.json_output_dir {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(
                path = %dir,
                error = %e,
                "JSON output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    // ---- Connectivity ----
    let network = NetworkCheck::for_endpoint(&config.endpoint, config.http.connect_timeout());
    if matches!(network, NetworkCheck::NoHost) {
        warn!(endpoint = %config.endpoint, "Endpoint has no host; cannot check connectivity");
    }
    if !network.is_connected().await {
        print!("{}", listing::render_listing(&[], EmptyState::NoConnection));
        info!("Not connected; skipping load");
        return Ok(());
    }

    // ---- Load articles in the background ----
    let request_url = build_url(&config.endpoint, &config.search.to_params(&config.api_key));
    let fetcher = Arc::new(ArticleFetcher::new(&config.http)?);
    let mut registry = LoaderRegistry::new();
    let handle = registry.init_loader(
        ARTICLE_LOADER_ID,
        ArticleLoader::new(fetcher, Some(request_url)),
    );

    let loaded = tokio::select! {
        loaded = handle.finished() => loaded,
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted; abandoning article load");
            None
        }
    };
    registry.reset(ARTICLE_LOADER_ID);
    let Some(articles) = loaded else {
        return Ok(());
    };

    // ---- Listing ----
    let empty_state = empty_state_after_load(!articles.is_empty(), &network).await;
    print!("{}", listing::render_listing(&articles, empty_state));

    // ---- JSON export ----
    if let Some(dir) = &args.json_output_dir {
        if articles.is_empty() {
            info!(path = %dir, "No articles; skipping JSON export");
        } else if let Err(e) = json::write_articles(&articles, &config.search.query, dir).await {
            error!(error = %e, "Failed to write article JSON");
        }
    }

    // ---- Tap-through ----
    if let Some(number) = args.open {
        if let Err(e) = browser::open_article(&articles, number) {
            error!(number, error = %e, "Could not open article");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        articles = articles.len(),
        "Execution complete"
    );

    Ok(())
}
