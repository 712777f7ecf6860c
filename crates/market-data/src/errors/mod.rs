//! Error types for the market data crate.
//!
//! [`MarketDataError`] covers every way an upstream provider call can fail.
//! Callers classify errors with [`is_not_found`](MarketDataError::is_not_found),
//! [`is_timeout`](MarketDataError::is_timeout) and
//! [`is_malformed`](MarketDataError::is_malformed) rather than matching on
//! individual variants.

use thiserror::Error;

/// Errors that can occur during market data operations.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// No data available for the requested date range.
    /// The symbol may exist but has no rows in the specified period.
    #[error("No data for date range")]
    NoDataForRange,

    /// The provider rate limited the request (HTTP 429 / quota exceeded).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider rejected our credential.
    #[error("Unauthorized: {provider}")]
    Unauthorized {
        /// The provider that rejected the request
        provider: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider answered, but not in the shape we expect.
    #[error("Invalid response: {provider} - {message}")]
    InvalidResponse {
        /// The provider that returned the payload
        provider: String,
        /// What was wrong with the payload
        message: String,
    },

    /// The requested price granularity is not one we know how to ask for.
    #[error("Unsupported price interval: {0}")]
    UnsupportedInterval(String),

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// True when the provider told us the symbol or range has no data.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SymbolNotFound(_) | Self::NoDataForRange)
    }

    /// True when the call did not complete in time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// True when the provider responded with data we could not interpret.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::InvalidResponse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(MarketDataError::SymbolNotFound("ZZZZ1".to_string()).is_not_found());
        assert!(MarketDataError::NoDataForRange.is_not_found());
        assert!(!MarketDataError::RateLimited {
            provider: "YAHOO".to_string()
        }
        .is_not_found());
    }

    #[test]
    fn test_timeout_classification() {
        let error = MarketDataError::Timeout {
            provider: "FINNHUB".to_string(),
        };
        assert!(error.is_timeout());
        assert!(!error.is_not_found());
        assert!(!MarketDataError::NoDataForRange.is_timeout());
    }

    #[test]
    fn test_malformed_classification() {
        let error = MarketDataError::InvalidResponse {
            provider: "FINNHUB".to_string(),
            message: "expected array".to_string(),
        };
        assert!(error.is_malformed());
        assert!(!error.is_timeout());
    }

    #[test]
    fn test_error_display() {
        let error = MarketDataError::SymbolNotFound("INVALID".to_string());
        assert_eq!(format!("{}", error), "Symbol not found: INVALID");

        let error = MarketDataError::RateLimited {
            provider: "YAHOO".to_string(),
        };
        assert_eq!(format!("{}", error), "Rate limited: YAHOO");

        let error = MarketDataError::ProviderError {
            provider: "FINNHUB".to_string(),
            message: "API key invalid".to_string(),
        };
        assert_eq!(format!("{}", error), "Provider error: FINNHUB - API key invalid");

        let error = MarketDataError::UnsupportedInterval("2h".to_string());
        assert_eq!(format!("{}", error), "Unsupported price interval: 2h");
    }
}
