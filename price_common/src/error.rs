//! Error types shared by the fetch path and the command-line client.
//!
//! The `FetchError` enum covers the three ways a price lookup can fail
//! (network, malformed payload, no quote for the symbol) plus the two caller
//! mistakes that are rejected before any request is sent.
use thiserror::Error;

/// Unified error type for price lookups.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The remote service could not be reached, refused the connection, timed out,
    /// or answered with a status that makes it unusable right now.
    #[error("Network error: {0}")]
    Network(String),

    /// A response arrived but could not be parsed into a numeric price.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The service answered but has no price for the requested symbol.
    #[error("Quote unavailable: {0}")]
    QuoteUnavailable(String),

    /// The symbol is empty or contains characters no trading pair uses.
    #[error("Invalid symbol: {0:?}")]
    InvalidSymbol(String),

    /// The configured API root is not a valid URL.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::MalformedResponse(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::MalformedResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_are_malformed_responses() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(FetchError::from(err), FetchError::MalformedResponse(_)));
    }

    #[test]
    fn bad_base_url_is_an_endpoint_error() {
        let err = url::Url::parse("not a url").unwrap_err();
        let err = FetchError::from(err);
        assert!(matches!(err, FetchError::InvalidEndpoint(_)));
        assert!(err.to_string().starts_with("Invalid endpoint"));
    }
}
