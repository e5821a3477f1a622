//! Turns a raw ticker response into a [`PriceQuote`].
//!
//! Status handling:
//! - 2xx — the body must be a `{"symbol": ..., "price": ...}` object for the
//!   requested symbol with a numeric price string.
//! - 400/404 carrying the exchange's `{"code", "msg"}` payload — the service
//!   knows no price for this symbol.
//! - anything else — the service is not usable right now.
use chrono::Utc;
use log::info;

use crate::error::FetchError;
use crate::quote::{ApiErrorPayload, PriceQuote, TickerPrice};
use crate::result::Result;
use crate::source::{PriceSource, SourceResponse};
use crate::symbol::Symbol;

/// Fetches the latest price of a symbol from a [`PriceSource`].
pub struct PriceFetcher<S> {
    source: S,
}

impl<S: PriceSource> PriceFetcher<S> {
    /// Wraps a source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Issues exactly one request for `symbol` and returns the quote.
    pub fn fetch_price(&self, symbol: &Symbol) -> Result<PriceQuote> {
        let fetched_at = Utc::now();
        let response = self.source.ticker_price(symbol)?;
        let quote = interpret(symbol, response)?.into_quote(symbol, fetched_at)?;
        info!("{} last traded at {} ({})", quote.symbol, quote.price, quote.fetched_at);
        Ok(quote)
    }
}

fn interpret(symbol: &Symbol, response: SourceResponse) -> Result<TickerPrice> {
    if response.is_success() {
        return Ok(serde_json::from_str::<TickerPrice>(&response.body)?);
    }

    info!("Ticker request for {} failed with status {}", symbol, response.status);
    match (response.status, serde_json::from_str::<ApiErrorPayload>(&response.body)) {
        (400 | 404, Ok(api_error)) => Err(FetchError::QuoteUnavailable(format!(
            "{}: {} (code {})",
            symbol, api_error.msg, api_error.code
        ))),
        (status, _) => Err(FetchError::Network(format!("service answered with status {}", status))),
    }
}
