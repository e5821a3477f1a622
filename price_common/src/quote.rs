//! Price quote model and the JSON shapes the exchange sends.
//!
//! The exchange transports prices as decimal strings; [`TickerPrice::into_quote`]
//! validates the payload against the requested symbol and converts the price to
//! `f64`.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::FetchError;
use crate::symbol::Symbol;

/// Latest traded price for one trading pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    /// Trading pair the price belongs to.
    pub symbol: Symbol,
    /// Last traded price. Always finite and non-negative.
    pub price: f64,
    /// When the request was issued.
    pub fetched_at: DateTime<Utc>,
}

/// Renders the single output line of the client: `Current <SYMBOL> <price>`.
impl fmt::Display for PriceQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Current {} {}", self.symbol, self.price)
    }
}

/// Success payload of `GET /api/v3/ticker/price?symbol=...`.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerPrice {
    /// Symbol the price belongs to.
    pub symbol: String,
    /// Decimal price string, e.g. `"42000.50000000"`.
    pub price: String,
}

/// Error payload returned with non-2xx statuses, e.g. `{"code":-1121,"msg":"Invalid symbol."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorPayload {
    /// Exchange error code (`-1121` is an unknown symbol).
    pub code: i64,
    /// Human-readable message.
    pub msg: String,
}

impl TickerPrice {
    /// Checks the payload belongs to `requested` and converts the price.
    pub fn into_quote(
        self,
        requested: &Symbol,
        fetched_at: DateTime<Utc>,
    ) -> Result<PriceQuote, FetchError> {
        if !self.symbol.eq_ignore_ascii_case(requested.as_str()) {
            return Err(FetchError::QuoteUnavailable(format!(
                "asked for {} but the service answered for {:?}",
                requested, self.symbol
            )));
        }

        Ok(PriceQuote {
            symbol: requested.clone(),
            price: parse_price(&self.price)?,
            fetched_at,
        })
    }
}

/// Converts a transported price string into a finite, non-negative `f64`.
pub fn parse_price(raw: &str) -> Result<f64, FetchError> {
    let price: f64 = raw
        .trim()
        .parse()
        .map_err(|_| FetchError::MalformedResponse(format!("price {:?} is not a number", raw)))?;

    if !price.is_finite() || price < 0.0 {
        return Err(FetchError::MalformedResponse(format!(
            "price {:?} is not a finite non-negative value",
            raw
        )));
    }
    // "-0" parses to negative zero
    Ok(if price == 0.0 { 0.0 } else { price })
}
