//! Market data provider trait definitions.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::errors::MarketDataError;
use crate::models::{NewsItem, PriceBar, PriceInterval};

/// Trait for historical price providers.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use command_center_market_data::{PriceHistoryProvider, PriceBar, PriceInterval};
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl PriceHistoryProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     async fn get_price_history(/* ... */) -> Result<Vec<PriceBar>, MarketDataError> {
///         // ...
///     }
/// }
/// ```
#[async_trait]
pub trait PriceHistoryProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and error messages.
    fn id(&self) -> &'static str;

    /// Fetch price bars for `symbol` between `start` and `end`.
    ///
    /// Bars are expected in chronological order, but callers must not rely
    /// on it.
    async fn get_price_history(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        interval: PriceInterval,
    ) -> Result<Vec<PriceBar>, MarketDataError>;
}

/// Trait for company news providers.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and error messages.
    fn id(&self) -> &'static str;

    /// Fetch news published for `symbol` between `from` and `to` (inclusive dates).
    ///
    /// Items are returned in provider order.
    async fn get_company_news(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<NewsItem>, MarketDataError>;
}
