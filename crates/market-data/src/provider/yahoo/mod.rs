//! Yahoo Finance price-history provider.
//!
//! This provider uses the Yahoo Finance chart API to fetch OHLC bars for
//! equities/ETFs (e.g., AAPL, SHOP.TO), cryptocurrencies (e.g., BTC-USD) and
//! foreign exchange rates (e.g., EURUSD=X) at intraday or daily granularity.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use time::OffsetDateTime;
use tracing::{debug, warn};
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::{PriceBar, PriceInterval};
use crate::provider::PriceHistoryProvider;

const PROVIDER_ID: &str = "YAHOO";

/// Yahoo Finance price-history provider.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Result<Self, MarketDataError> {
        let connector =
            yahoo::YahooConnector::new().map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to initialize Yahoo connector: {}", e),
            })?;
        Ok(Self { connector })
    }

    /// Convert chrono DateTime<Utc> to time::OffsetDateTime for the Yahoo API.
    fn chrono_to_offset_datetime(dt: DateTime<Utc>) -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(dt.timestamp())
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
    }

    /// Convert a Yahoo quote to our PriceBar model.
    fn yahoo_quote_to_bar(yahoo_quote: &yahoo::Quote) -> Result<PriceBar, MarketDataError> {
        let timestamp: DateTime<Utc> = Utc
            .timestamp_opt(yahoo_quote.timestamp as i64, 0)
            .single()
            .ok_or_else(|| MarketDataError::InvalidResponse {
                provider: PROVIDER_ID.to_string(),
                message: format!("Invalid timestamp: {}", yahoo_quote.timestamp),
            })?;

        Ok(PriceBar {
            timestamp,
            open: finite(yahoo_quote.open),
            high: finite(yahoo_quote.high),
            low: finite(yahoo_quote.low),
            close: finite(yahoo_quote.close),
            volume: Some(yahoo_quote.volume),
        })
    }
}

#[async_trait]
impl PriceHistoryProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_price_history(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        interval: PriceInterval,
    ) -> Result<Vec<PriceBar>, MarketDataError> {
        debug!(
            "Fetching {} price history for {} from {} to {} from Yahoo",
            interval,
            symbol,
            start.format("%Y-%m-%d %H:%M"),
            end.format("%Y-%m-%d %H:%M")
        );

        let start_time = Self::chrono_to_offset_datetime(start);
        let end_time = Self::chrono_to_offset_datetime(end);

        let response = self
            .connector
            .get_quote_history_interval(symbol, start_time, end_time, interval.as_str())
            .await
            .map_err(|e| {
                if matches!(e, yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) {
                    MarketDataError::SymbolNotFound(symbol.to_string())
                } else {
                    MarketDataError::ProviderError {
                        provider: PROVIDER_ID.to_string(),
                        message: e.to_string(),
                    }
                }
            })?;

        match response.quotes() {
            Ok(yahoo_quotes) => {
                let bars = yahoo_quotes
                    .iter()
                    .map(Self::yahoo_quote_to_bar)
                    .collect::<Result<Vec<_>, _>>()?;

                if bars.is_empty() {
                    return Err(MarketDataError::NoDataForRange);
                }

                debug!("Yahoo: fetched {} bars for {}", bars.len(), symbol);
                Ok(bars)
            }
            Err(yahoo::YahooError::NoQuotes) => {
                warn!(
                    "No price history returned for '{}' between {} and {}",
                    symbol,
                    start.format("%Y-%m-%d"),
                    end.format("%Y-%m-%d")
                );
                Err(MarketDataError::NoDataForRange)
            }
            Err(e) => Err(MarketDataError::InvalidResponse {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            }),
        }
    }
}

/// Yahoo encodes missing prices as NaN in some payloads.
fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_filters_nan() {
        assert_eq!(finite(1.5), Some(1.5));
        assert_eq!(finite(f64::NAN), None);
        assert_eq!(finite(f64::INFINITY), None);
    }

    #[test]
    fn test_chrono_to_offset_datetime() {
        let dt = Utc.timestamp_opt(1_704_067_200, 0).unwrap();
        let converted = YahooProvider::chrono_to_offset_datetime(dt);
        assert_eq!(converted.unix_timestamp(), 1_704_067_200);
    }

    #[test]
    fn test_interval_codes_match_chart_api() {
        assert_eq!(PriceInterval::OneHour.as_str(), "1h");
        assert_eq!(PriceInterval::OneDay.as_str(), "1d");
        assert_eq!(PriceInterval::OneWeek.as_str(), "1wk");
    }
}
