//! HTTP client for fetching catalog pages.

use bytes::Bytes;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

use crate::url::{BASE_URL, page_url};

/// Configuration for the sale client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the catalog site.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum request attempts for a single fetch.
    pub max_attempts: u32,
    /// Fixed delay between rate-limited attempts.
    pub retry_delay: Duration,
    /// Number of items a full listing page carries.
    pub page_size: u32,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_attempts: 5,
            retry_delay: Duration::from_secs(2),
            page_size: 36, // items on a full listing page
            user_agent: format!("onsale/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while fetching a page.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request failed at the transport level.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Every allowed attempt was answered with 429 Too Many Requests.
    #[error("rate limited fetching {url}, gave up after {attempts} attempts")]
    RateLimited {
        /// URL that kept being rate limited.
        url: String,
        /// Number of attempts consumed.
        attempts: u32,
    },

    /// The server answered with a status this client does not handle.
    #[error("unexpected status {status} fetching {url}")]
    UnexpectedStatus {
        /// URL that was fetched.
        url: String,
        /// HTTP status code.
        status: u16,
    },
}

/// HTTP client with connection pooling and fixed-delay retry on rate limits.
#[derive(Debug, Clone)]
pub struct SaleClient {
    client: Client,
    config: ClientConfig,
}

impl SaleClient {
    /// Creates a new sale client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            // Keep connections alive for reuse across page fetches
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches a URL, retrying on 429 with a fixed delay.
    ///
    /// Only rate limiting is retried. Transport errors and statuses other
    /// than 200/429 are returned on the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails at the transport level, if
    /// the server answers with an unexpected status, or if every allowed
    /// attempt was rate limited.
    pub async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        let mut attempts = 0;

        loop {
            let response = self.client.get(url).send().await?;

            if response.status() == StatusCode::TOO_MANY_REQUESTS {
                attempts += 1;
                if attempts < self.config.max_attempts {
                    tracing::warn!(
                        url,
                        attempt = attempts,
                        delay_ms = self.config.retry_delay.as_millis() as u64,
                        "rate limited, retrying after delay"
                    );
                    drop(response);
                    tokio::time::sleep(self.config.retry_delay).await;
                    continue;
                }
                return Err(FetchError::RateLimited {
                    url: url.to_string(),
                    attempts,
                });
            }

            if response.status() != StatusCode::OK {
                return Err(FetchError::UnexpectedStatus {
                    url: url.to_string(),
                    status: response.status().as_u16(),
                });
            }

            return Ok(response.bytes().await?);
        }
    }

    /// Fetches a sales page body as text.
    ///
    /// Site-relative links are resolved against the configured base URL;
    /// fully-qualified links are fetched verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails.
    pub async fn sale_page(&self, link: &str) -> Result<String, FetchError> {
        let url = page_url(&self.config.base_url, link);
        let body = self.fetch(&url).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Fetches a game detail page body as text.
    ///
    /// Game links share the sales-page link handling: both relative paths
    /// and fully-qualified URLs occur in listing payloads.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails.
    pub async fn game_page(&self, link: &str) -> Result<String, FetchError> {
        self.sale_page(link).await
    }
}
