//! Remote price sources.
//!
//! A `PriceSource` performs the single round trip to the quoting service and hands
//! back the raw status and body; interpretation lives in [`crate::fetcher`]. The
//! HTTP implementation owns its own `reqwest` client, so its lifetime is whatever
//! the caller gives it.
use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::Client as HTTPClient;
use reqwest::header::ACCEPT;
use url::Url;

use crate::net::{DEFAULT_BASE_URL, TICKER_PRICE_PATH, USER_AGENT};
use crate::result::Result;
use crate::symbol::Symbol;

/// Raw answer from the quoting service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl SourceResponse {
    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One request/response round trip for the latest price of a symbol.
pub trait PriceSource {
    /// Asks the service for the latest traded price of `symbol`.
    ///
    /// Fails only when no response could be obtained; any status the service
    /// answers with is returned as-is.
    fn ticker_price(&self, symbol: &Symbol) -> Result<SourceResponse>;
}

/// Settings for [`HttpPriceSource`].
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// API root (e.g. `https://api.binance.com`). A path prefix is kept, so
    /// `http://proxy/binance` resolves to `http://proxy/binance/api/v3/ticker/price`.
    pub base_url: String,
    /// Request timeout. `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

/// Blocking HTTP source for the exchange's public ticker endpoint.
pub struct HttpPriceSource {
    endpoint: Url,
    http_client: HTTPClient,
}

impl HttpPriceSource {
    /// Builds the client and resolves the ticker endpoint against `config.base_url`.
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let mut base = Url::parse(config.base_url.trim())?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base.join(TICKER_PRICE_PATH)?;

        let mut builder = HTTPClient::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            endpoint,
            http_client: builder.build()?,
        })
    }

    #[cfg(test)]
    fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl PriceSource for HttpPriceSource {
    fn ticker_price(&self, symbol: &Symbol) -> Result<SourceResponse> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("symbol", symbol.as_str());

        info!("Requesting {} price from {}", symbol, url);
        let response = self
            .http_client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;
        debug!("Response {}: {}", status, body);

        Ok(SourceResponse { status, body })
    }
}
