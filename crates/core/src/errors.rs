//! Core error types for the Command Center service layer.
//!
//! Every failure surfaced by the fetch-and-normalize service is a
//! [`StockDataError`]: the ticker that was requested, an [`ErrorKind`] that
//! the transport layer maps to a status code, and a human-readable message.

use serde::Serialize;
use thiserror::Error;

use command_center_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, StockDataError>;

/// Classification of a failed fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The ticker was rejected before any upstream call.
    InvalidTicker,
    /// The upstream provider has no data for the ticker.
    SymbolNotFound,
    /// The upstream call failed (network, auth, provider error).
    UpstreamFetch,
    /// The upstream answered with data we could not normalize.
    Normalization,
    /// The upstream call did not complete within the configured timeout.
    UpstreamTimeout,
}

/// A failed price-history or news request.
///
/// Cloneable so that every caller waiting on the same in-flight fetch
/// receives its own copy of the outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to fetch data for {ticker}: {message}")]
pub struct StockDataError {
    pub ticker: String,
    pub kind: ErrorKind,
    pub message: String,
}

impl StockDataError {
    pub fn new(ticker: impl Into<String>, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_ticker(ticker: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ticker, ErrorKind::InvalidTicker, reason)
    }

    /// Wrap a provider failure, keeping the provider's message verbatim.
    pub fn from_provider(ticker: impl Into<String>, error: &MarketDataError) -> Self {
        let kind = if error.is_timeout() {
            ErrorKind::UpstreamTimeout
        } else if error.is_not_found() {
            ErrorKind::SymbolNotFound
        } else if error.is_malformed() {
            ErrorKind::Normalization
        } else {
            ErrorKind::UpstreamFetch
        };
        Self::new(ticker, kind, error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_embeds_ticker_and_message() {
        let error = StockDataError::new("ZZZZ1", ErrorKind::UpstreamFetch, "boom");
        assert_eq!(error.to_string(), "Failed to fetch data for ZZZZ1: boom");
    }

    #[test]
    fn test_from_provider_classification() {
        let not_found = MarketDataError::SymbolNotFound("ZZZZ1".to_string());
        assert_eq!(
            StockDataError::from_provider("ZZZZ1", &not_found).kind,
            ErrorKind::SymbolNotFound
        );

        let timeout = MarketDataError::Timeout {
            provider: "YAHOO".to_string(),
        };
        assert_eq!(
            StockDataError::from_provider("AAPL", &timeout).kind,
            ErrorKind::UpstreamTimeout
        );

        let malformed = MarketDataError::InvalidResponse {
            provider: "FINNHUB".to_string(),
            message: "expected array".to_string(),
        };
        assert_eq!(
            StockDataError::from_provider("AAPL", &malformed).kind,
            ErrorKind::Normalization
        );

        let unauthorized = MarketDataError::Unauthorized {
            provider: "FINNHUB".to_string(),
        };
        let error = StockDataError::from_provider("AAPL", &unauthorized);
        assert_eq!(error.kind, ErrorKind::UpstreamFetch);
        assert_eq!(
            error.to_string(),
            "Failed to fetch data for AAPL: Unauthorized: FINNHUB"
        );
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ErrorKind::UpstreamTimeout).unwrap(),
            "\"upstream_timeout\""
        );
    }
}
