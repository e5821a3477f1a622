//! Command-line arguments for the price client.
//!
//! Every flag has a default, so running the binary bare fetches `BTCUSDT` from the
//! public API.
use clap::Parser;
use price_common::net::{DEFAULT_BASE_URL, DEFAULT_SYMBOL};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Trading pair to look up, e.g. BTCUSDT.
    #[clap(long, default_value = DEFAULT_SYMBOL)]
    pub symbol: String,

    /// Root of the market-data REST API. A path prefix such as `/binance` is kept.
    #[clap(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds. The HTTP client's default applies when omitted.
    #[clap(long)]
    pub timeout_secs: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_arguments() {
        let args = Args::try_parse_from(["price_client"]).unwrap();
        assert_eq!(args.symbol, "BTCUSDT");
        assert_eq!(args.base_url, "https://api.binance.com");
        assert_eq!(args.timeout_secs, None);
    }

    #[test]
    fn overrides() {
        let args = Args::try_parse_from([
            "price_client",
            "--symbol",
            "ethusdt",
            "--base-url",
            "http://127.0.0.1:9000",
            "--timeout-secs",
            "3",
        ])
        .unwrap();
        assert_eq!(args.symbol, "ethusdt");
        assert_eq!(args.base_url, "http://127.0.0.1:9000");
        assert_eq!(args.timeout_secs, Some(3));
    }
}
