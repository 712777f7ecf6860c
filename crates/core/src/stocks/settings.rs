//! Fetch windows and upstream limits.

use std::time::Duration;

use command_center_market_data::PriceInterval;

/// Days of price history requested, ending now.
pub const DEFAULT_PRICE_WINDOW_DAYS: i64 = 30;

/// Days of news requested, ending today.
pub const DEFAULT_NEWS_WINDOW_DAYS: i64 = 30;

/// Longest trailing window either operation may request.
pub const MAX_WINDOW_DAYS: i64 = 3650;

/// Upper bound on a single upstream call.
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug, PartialEq)]
pub struct FetchSettings {
    pub price_window_days: i64,
    pub price_interval: PriceInterval,
    pub news_window_days: i64,
    pub upstream_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            price_window_days: DEFAULT_PRICE_WINDOW_DAYS,
            price_interval: PriceInterval::OneHour,
            news_window_days: DEFAULT_NEWS_WINDOW_DAYS,
            upstream_timeout: DEFAULT_UPSTREAM_TIMEOUT,
        }
    }
}
