//! Price Client — prints the latest traded price of one trading pair.
//!
//! Sends a single request to the exchange's public ticker endpoint and writes
//! `Current <SYMBOL> <price>` to stdout. Failures go to stderr with exit code 1 and
//! nothing is printed on stdout.
//!
//! Usage example (CLI):
//! ```bash
//! price_client
//! price_client --symbol ETHUSDT --timeout-secs 5
//! ```
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use clap::Parser;
use log::debug;
use price_common::{HttpPriceSource, PriceFetcher, PriceQuote, Result, SourceConfig, Symbol};
use std::process::ExitCode;
use std::time::Duration;

fn run(args: &Args) -> Result<PriceQuote> {
    let symbol: Symbol = args.symbol.parse()?;
    let config = SourceConfig {
        base_url: args.base_url.clone(),
        timeout: args.timeout_secs.map(Duration::from_secs),
    };

    let fetcher = PriceFetcher::new(HttpPriceSource::new(&config)?);
    fetcher.fetch_price(&symbol)
}

fn main() -> ExitCode {
    init_logger();
    let args = Args::parse();

    match run(&args) {
        Ok(quote) => {
            println!("{}", quote);
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("Price lookup for {} failed: {:?}", args.symbol, e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
