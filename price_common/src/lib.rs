//!
//! Spot price lookup against an exchange's public market-data API.
//!
//! This crate aggregates:
//! - `error` — the `FetchError` taxonomy used across the workspace.
//! - `result` — handy `Result<T, FetchError>` alias.
//! - `symbol` — validated trading-pair codes.
//! - `quote` — the `PriceQuote` model and the exchange's JSON shapes.
//! - `net` — endpoint constants.
//! - `source` — the `PriceSource` seam and its blocking HTTP implementation.
//! - `fetcher` — `PriceFetcher`, which turns one response into a quote.
#![warn(missing_docs)]
pub mod error;
pub mod fetcher;
pub mod net;
pub mod quote;
pub mod result;
pub mod source;
pub mod symbol;

pub use error::FetchError;
pub use fetcher::PriceFetcher;
pub use quote::PriceQuote;
pub use result::Result;
pub use source::{HttpPriceSource, PriceSource, SourceConfig};
pub use symbol::Symbol;
