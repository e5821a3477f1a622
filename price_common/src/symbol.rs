//! Trading-pair symbols.

use std::fmt;
use std::str::FromStr;

use crate::error::FetchError;

/// A validated trading-pair code such as `BTCUSDT`.
///
/// Parsing trims surrounding whitespace and upper-cases the input; the result is
/// non-empty and made only of ASCII letters and digits.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct Symbol(String);

impl Symbol {
    /// Returns the symbol as sent on the wire.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Symbol {
    type Err = FetchError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(FetchError::InvalidSymbol(raw.to_string()));
        }
        Ok(Symbol(trimmed.to_ascii_uppercase()))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
