//! Ticker validation.

use crate::errors::{Result, StockDataError};

/// Longest ticker accepted, which covers exchange suffixes like `SHOP.TO`
/// and FX symbols like `EURUSD=X`.
pub const MAX_TICKER_LEN: usize = 32;

/// Trim `raw` and check it looks like a ticker symbol.
///
/// Case is preserved: the cache key and the echoed `ticker` field are the
/// string the caller sent.
pub fn validate_ticker(raw: &str) -> Result<String> {
    let ticker = raw.trim();

    if ticker.is_empty() {
        return Err(StockDataError::invalid_ticker(ticker, "ticker must not be empty"));
    }

    if ticker.chars().count() > MAX_TICKER_LEN {
        return Err(StockDataError::invalid_ticker(
            ticker,
            format!("ticker must be at most {} characters", MAX_TICKER_LEN),
        ));
    }

    if let Some(c) = ticker.chars().find(|c| !is_ticker_char(*c)) {
        return Err(StockDataError::invalid_ticker(
            ticker,
            format!("ticker contains invalid character '{}'", c),
        ));
    }

    Ok(ticker.to_string())
}

fn is_ticker_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '^' | '=' | '-' | '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_accepts_common_symbols() {
        for ticker in ["AAPL", "brk.b", "SHOP.TO", "BTC-USD", "EURUSD=X", "^GSPC", "ZZZZ1"] {
            assert_eq!(validate_ticker(ticker).unwrap(), ticker);
        }
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(validate_ticker("  MSFT ").unwrap(), "MSFT");
    }

    #[test]
    fn test_rejects_empty() {
        let err = validate_ticker("   ").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidTicker);
        assert_eq!(err.message, "ticker must not be empty");
    }

    #[test]
    fn test_rejects_bad_characters() {
        let err = validate_ticker("AA PL").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidTicker);
        assert!(validate_ticker("../etc").is_err());
        assert!(validate_ticker("AAPL?x=1").is_err());
    }

    #[test]
    fn test_rejects_long_tickers() {
        let long = "A".repeat(MAX_TICKER_LEN + 1);
        assert!(validate_ticker(&long).is_err());
        assert!(validate_ticker(&"A".repeat(MAX_TICKER_LEN)).is_ok());
    }
}
