//! Network reachability.
//!
//! An empty article list means either "we could not reach the API" or
//! "the query matched nothing". The fetcher does not tell the two apart;
//! the presentation layer asks a [`Connectivity`] implementation instead
//! and picks the message via [`empty_state_after_load`].
//!
//! A direct TCP probe says nothing about a network that is only reachable
//! through a proxy, and the fetcher's HTTP client honours the usual proxy
//! environment variables. [`NetworkCheck::for_endpoint`] therefore skips
//! probing and assumes connectivity when one of those is set.

use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, info, instrument};
use url::Url;

/// Something that can report whether the network is usable right now.
pub trait Connectivity {
    async fn is_connected(&self) -> bool;
}

/// Treats the network as up when a TCP connection to a host succeeds.
#[derive(Debug, Clone)]
pub struct HostProbe {
    host: String,
    port: u16,
    timeout: Duration,
}

impl HostProbe {
    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            timeout,
        }
    }

    /// Probe the host and port of `endpoint`. Returns `None` for URLs
    /// without a host.
    pub fn for_endpoint(endpoint: &str, timeout: Duration) -> Option<Self> {
        let url = Url::parse(endpoint).ok()?;
        let host = url.host_str()?.to_string();
        let port = url.port_or_known_default()?;
        Some(Self::new(host, port, timeout))
    }
}

impl Connectivity for HostProbe {
    #[instrument(level = "debug", skip_all, fields(host = %self.host, port = self.port))]
    async fn is_connected(&self) -> bool {
        let addr = (self.host.as_str(), self.port);
        match timeout(self.timeout, TcpStream::connect(addr)).await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                debug!(error = %e, "Probe connection failed");
                false
            }
            Err(_) => {
                debug!("Probe timed out");
                false
            }
        }
    }
}

/// Environment variables the HTTP client reads a proxy from.
const PROXY_ENV_VARS: [&str; 6] = [
    "HTTPS_PROXY",
    "https_proxy",
    "HTTP_PROXY",
    "http_proxy",
    "ALL_PROXY",
    "all_proxy",
];

/// Whether `lookup` reports a non-empty proxy setting.
pub fn proxy_configured_with(lookup: impl Fn(&str) -> Option<String>) -> bool {
    PROXY_ENV_VARS
        .iter()
        .any(|name| lookup(*name).is_some_and(|value| !value.trim().is_empty()))
}

/// Whether the process environment configures an HTTP proxy.
pub fn proxy_configured() -> bool {
    proxy_configured_with(|name| std::env::var(name).ok())
}

/// How this run decides whether the network is up.
#[derive(Debug, Clone)]
pub enum NetworkCheck {
    /// Connect straight to the endpoint's host.
    Probe(HostProbe),
    /// Requests go through a proxy; a direct probe would be meaningless.
    ViaProxy,
    /// The endpoint has no host to probe.
    NoHost,
}

impl NetworkCheck {
    pub fn for_endpoint(endpoint: &str, timeout: Duration) -> Self {
        Self::choose(endpoint, timeout, proxy_configured())
    }

    fn choose(endpoint: &str, timeout: Duration, via_proxy: bool) -> Self {
        if via_proxy {
            info!("Proxy configured; skipping direct connectivity probe");
            return Self::ViaProxy;
        }
        match HostProbe::for_endpoint(endpoint, timeout) {
            Some(probe) => Self::Probe(probe),
            None => Self::NoHost,
        }
    }
}

impl Connectivity for NetworkCheck {
    async fn is_connected(&self) -> bool {
        match self {
            Self::Probe(probe) => probe.is_connected().await,
            Self::ViaProxy => true,
            Self::NoHost => false,
        }
    }
}

/// Why the listing is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    NoConnection,
    NoArticles,
}

impl EmptyState {
    pub fn for_connectivity(connected: bool) -> Self {
        if connected {
            Self::NoArticles
        } else {
            Self::NoConnection
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::NoConnection => "No internet connection.",
            Self::NoArticles => "No articles found.",
        }
    }
}

/// The empty-state message for a finished load.
///
/// Only consults `network` when nothing was loaded, since the connection
/// may have dropped while the request was in flight.
pub async fn empty_state_after_load(loaded_any: bool, network: &impl Connectivity) -> EmptyState {
    if loaded_any {
        return EmptyState::NoArticles;
    }
    EmptyState::for_connectivity(network.is_connected().await)
}
