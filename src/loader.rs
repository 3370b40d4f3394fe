//! Background loading of search results.
//!
//! A load runs fetch-then-parse on a tokio task so the caller stays
//! responsive. Results are delivered through a [`LoadHandle`]. Before
//! publishing, the task checks that the handle is still active; a
//! cancelled or dropped handle means the requester has gone away and the
//! articles are thrown away instead of delivered.
//!
//! [`LoaderRegistry`] keys loads by an id so a given requester never has
//! more than one fetch in flight.

use crate::fetcher::ArticleFetcher;
use crate::models::Article;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::oneshot;
use tracing::{debug, info, instrument};

/// One load of the article list from a fixed URL.
#[derive(Debug, Clone)]
pub struct ArticleLoader {
    fetcher: Arc<ArticleFetcher>,
    url: Option<String>,
}

impl ArticleLoader {
    pub fn new(fetcher: Arc<ArticleFetcher>, url: Option<String>) -> Self {
        Self { fetcher, url }
    }

    /// Spawn the load on the current tokio runtime.
    #[instrument(level = "info", skip_all)]
    pub fn start(self) -> LoadHandle {
        let active = Arc::new(AtomicBool::new(true));
        let (tx, rx) = oneshot::channel();

        let task_active = Arc::clone(&active);
        tokio::spawn(async move {
            let articles = self.fetcher.fetch(self.url.as_deref()).await;
            if !task_active.load(Ordering::Acquire) {
                debug!(count = articles.len(), "Load cancelled; discarding results");
                return;
            }
            if tx.send(articles).is_err() {
                debug!("Receiver gone; discarding results");
            }
        });
        info!("Article load started");

        LoadHandle {
            active,
            rx: Some(rx),
            delivered: None,
        }
    }
}

/// The requester's side of a running load.
///
/// Dropping the handle cancels delivery. Once the articles have arrived
/// the handle keeps them, so asking again returns the same list.
#[derive(Debug)]
pub struct LoadHandle {
    active: Arc<AtomicBool>,
    // None once the channel has completed; a completed oneshot must not be polled again
    rx: Option<oneshot::Receiver<Vec<Article>>>,
    delivered: Option<Vec<Article>>,
}

impl LoadHandle {
    /// Stop caring about the result. The request itself runs to
    /// completion; its articles are discarded.
    pub fn cancel(&self) {
        self.active.store(false, Ordering::Release);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Wait for the articles.
    ///
    /// Returns `None` if the load was cancelled before it published.
    /// Later calls return the already delivered list without waiting.
    pub async fn finished(&mut self) -> Option<Vec<Article>> {
        if let Some(articles) = &self.delivered {
            return Some(articles.clone());
        }
        if !self.is_active() {
            return None;
        }
        let rx = self.rx.as_mut()?;
        let outcome = rx.await;
        self.rx = None;
        let articles = outcome.ok()?;
        self.delivered = Some(articles.clone());
        Some(articles)
    }
}

impl Drop for LoadHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Running loads keyed by requester id.
#[derive(Debug, Default)]
pub struct LoaderRegistry {
    loads: HashMap<u32, LoadHandle>,
}

impl LoaderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `loader` under `id` unless a load for `id` is already registered.
    ///
    /// Returns the handle for `id`, new or existing.
    pub fn init_loader(&mut self, id: u32, loader: ArticleLoader) -> &mut LoadHandle {
        self.loads.entry(id).or_insert_with(|| {
            debug!(id, "Starting loader");
            loader.start()
        })
    }

    /// Cancel and forget the load for `id`.
    pub fn reset(&mut self, id: u32) -> bool {
        match self.loads.remove(&id) {
            Some(handle) => {
                handle.cancel();
                debug!(id, "Loader reset");
                true
            }
            None => false,
        }
    }
}
