pub mod config;
pub mod error;
pub mod global_market;
pub mod handle;
pub mod markets;
pub mod method;
pub mod proxy_url;
pub mod social_stats;
pub mod tickers;

use std::future::Future;

use hyper::ext::ReasonPhrase;
use reqwest::{Client, ClientBuilder};
use tracing::{debug, warn};

pub use config::CoinloreConfig;
pub use error::{CoinloreError, Result};
pub use global_market::GlobalStats;
pub use handle::RequestHandle;
pub use markets::MarketQuote;
pub use method::Method;
pub use proxy_url::UrlBuilder;
pub use social_stats::{RedditStats, SocialStats, TwitterStats};
pub use tickers::{Coin, CoinListEnvelope, ListInfo};

/// Coinlore data access service. Every query performs exactly one GET through
/// the configured proxy and returns one decoded result; nothing is cached.
///
/// Clones share the underlying HTTP connection pool.
#[derive(Debug, Clone)]
pub struct CoinloreClient {
    reqwest: Client,
    urls: UrlBuilder,
}

impl CoinloreClient {
    pub fn new(config: CoinloreConfig) -> Result<Self> {
        config.validate()?;
        let reqwest = ClientBuilder::new().build()?;

        Ok(Self::with_http_client(config, reqwest))
    }

    /// Use a caller-supplied reqwest client. The config is not validated.
    pub fn with_http_client(config: CoinloreConfig, reqwest: Client) -> Self {
        Self {
            reqwest,
            urls: UrlBuilder::new(&config),
        }
    }

    pub fn urls(&self) -> &UrlBuilder {
        &self.urls
    }

    /// All coins, with the list envelope stripped.
    ///
    /// Unlike [`get_coin_by_id`](Self::get_coin_by_id), only the `data` array
    /// is returned; the envelope's `info` is dropped.
    pub async fn list_all_coins(&self) -> Result<Vec<tickers::Coin>> {
        let envelope = self.call0::<tickers::Tickers>().await?;
        Ok(envelope.data)
    }

    /// The envelope for one coin, returned as-is so callers keep its `info`.
    pub async fn get_coin_by_id(&self, id: &str) -> Result<tickers::CoinListEnvelope> {
        self.call::<tickers::Ticker>(id).await
    }

    /// Global market statistics. Fails with [`CoinloreError::EmptyResponse`]
    /// when the upstream array is empty.
    pub async fn get_global_stats(&self) -> Result<global_market::GlobalStats> {
        let stats = self.call0::<global_market::Global>().await?;

        stats.into_iter().next().ok_or_else(|| {
            warn!(endpoint = global_market::Global::PATH, "empty global stats response");
            CoinloreError::EmptyResponse {
                endpoint: global_market::Global::PATH,
            }
        })
    }

    pub async fn get_markets_for_coin(&self, id: &str) -> Result<Vec<markets::MarketQuote>> {
        self.call::<markets::Markets>(id).await
    }

    pub async fn get_social_stats_for_coin(&self, id: &str) -> Result<social_stats::SocialStats> {
        self.call::<social_stats::Social>(id).await
    }

    /// Run a query on the tokio runtime behind an abort handle.
    ///
    /// ```rust,ignore
    /// let handle = client.spawn(|c| async move { c.list_all_coins().await });
    /// handle.abort();
    /// ```
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<T, F, Fut>(&self, query: F) -> RequestHandle<T>
    where
        F: FnOnce(CoinloreClient) -> Fut,
        Fut: Future<Output = Result<T>> + Send + 'static,
        T: Send + 'static,
    {
        RequestHandle::spawn(query(self.clone()))
    }

    /// Request an endpoint's bare path.
    pub async fn call0<M: Method>(&self) -> Result<M::Response> {
        self.get(M::PATH, M::PATH).await
    }

    /// Request an endpoint for one coin id.
    pub async fn call<M: Method>(&self, id: &str) -> Result<M::Response> {
        self.get(M::PATH, &format!("{}?id={id}", M::PATH)).await
    }

    // Generic GET request
    async fn get<R: serde::de::DeserializeOwned>(&self, endpoint: &'static str, sub_path: &str) -> Result<R> {
        let url = self.urls.build(sub_path);
        debug!(endpoint, %url, "sending request");

        let response = self.reqwest.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let status_text = reason_phrase(&response);
            warn!(endpoint, status = status.as_u16(), %status_text, "upstream returned an error status");
            // A failed body read still reports the status.
            let body = response.text().await.unwrap_or_else(|err| {
                debug!(endpoint, error = %err, "failed to read error body");
                String::new()
            });
            return Err(CoinloreError::Status {
                status: status.as_u16(),
                status_text,
                body,
            });
        }

        let body = response.text().await?;
        debug!(endpoint, status = status.as_u16(), bytes = body.len(), "response received");

        serde_json::from_str(&body).map_err(|source| {
            warn!(endpoint, error = %source, "failed to decode response body");
            CoinloreError::Decode { endpoint, source }
        })
    }
}

/// Reason phrase as sent on the wire, or the canonical one for the status.
fn reason_phrase(response: &reqwest::Response) -> String {
    response
        .extensions()
        .get::<ReasonPhrase>()
        .map(|phrase| String::from_utf8_lossy(phrase.as_bytes()).into_owned())
        .unwrap_or_else(|| response.status().canonical_reason().unwrap_or_default().to_string())
}
