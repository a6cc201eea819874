//! HTTP access to the provider's server list and config downloads.

use anyhow::Context;
use async_trait::async_trait;
use nordservers_core::{parse_server_list, NordError, ProviderConfig, ServerRecord};
use reqwest::{Client, StatusCode};
use tracing::{debug, info};

/// Fetches a URL and returns the body as text.
///
/// Handlers only depend on this trait, so the whole pipeline can run against
/// a local mock server.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// GET `url` and return the full response body.
    ///
    /// # Errors
    ///
    /// Returns `NordError::Network` on any connection, status, or body
    /// read failure.
    async fn fetch_text(&self, url: &str) -> nordservers_core::Result<String>;
}

/// [`Fetcher`] backed by `reqwest`.
///
/// No timeout and no retries: a hung connection blocks until the process is
/// killed, and the first failure is final.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with the crate's user agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("nordservers/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

fn network_error(url: &str, reason: impl ToString) -> NordError {
    NordError::Network {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}

/// Describe a non-success status the way a user can act on it.
fn status_reason(status: StatusCode) -> String {
    match status {
        StatusCode::NOT_FOUND => "not found (HTTP 404)".to_string(),
        StatusCode::TOO_MANY_REQUESTS => "rate limited (HTTP 429)".to_string(),
        StatusCode::SERVICE_UNAVAILABLE => "service unavailable (HTTP 503)".to_string(),
        _ => format!("HTTP {}", status),
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> nordservers_core::Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| network_error(url, e))?;

        let status = response.status();
        debug!(%url, %status, "response received");
        if !status.is_success() {
            return Err(network_error(url, status_reason(status)));
        }

        response.text().await.map_err(|e| network_error(url, e))
    }
}

/// Fetch and decode the full server list.
///
/// # Errors
///
/// Returns `Network` if the list cannot be fetched and `MalformedResponse`
/// if it cannot be decoded.
pub async fn fetch_servers<F: Fetcher + ?Sized>(
    fetcher: &F,
    config: &ProviderConfig,
) -> nordservers_core::Result<Vec<ServerRecord>> {
    info!("Fetching {} ...", config.server_list_url);
    let body = fetcher.fetch_text(&config.server_list_url).await?;
    let servers = parse_server_list(&body)?;
    info!("received {} servers ({} bytes)", servers.len(), body.len());
    Ok(servers)
}
