//! Endpoint constants for the exchange's public market-data API.

/// Root of the public spot REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.binance.com";
/// Latest traded price for one symbol (`?symbol=<SYMBOL>`), relative to the API root.
pub const TICKER_PRICE_PATH: &str = "api/v3/ticker/price";
/// Trading pair looked up when none is given.
pub const DEFAULT_SYMBOL: &str = "BTCUSDT";
/// Sent as `User-Agent` on every request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
