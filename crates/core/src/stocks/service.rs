//! Fetch-and-normalize service.
//!
//! Both operations follow the same path: validate the ticker, return the
//! cached entry on a hit, otherwise call the provider (bounded by the
//! upstream timeout), shape the result, and store it. Concurrent misses
//! for the same ticker share a single upstream call. Failures are returned
//! to every waiter and never cached.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use log::{debug, info, warn};

use command_center_market_data::{MarketDataError, NewsProvider, PriceHistoryProvider};

use crate::cache::{CacheEntry, CacheNamespace, CacheStore};
use crate::errors::{ErrorKind, Result, StockDataError};

use super::model::{NewsResult, PriceSeries};
use super::normalize::normalize_price_bars;
use super::settings::FetchSettings;
use super::ticker::validate_ticker;
use super::traits::StockDataServiceTrait;

/// Service serving price history and news through the shared cache.
pub struct StockDataService {
    price_provider: Arc<dyn PriceHistoryProvider>,
    news_provider: Arc<dyn NewsProvider>,
    cache: Arc<CacheStore>,
    settings: FetchSettings,
}

impl StockDataService {
    pub fn new(
        price_provider: Arc<dyn PriceHistoryProvider>,
        news_provider: Arc<dyn NewsProvider>,
        cache: Arc<CacheStore>,
        settings: FetchSettings,
    ) -> Self {
        Self {
            price_provider,
            news_provider,
            cache,
            settings,
        }
    }

    /// Call the price provider for the trailing window and normalize its rows.
    async fn fetch_price_history(&self, ticker: &str) -> Result<PriceSeries> {
        let end = Utc::now();
        let start = TimeDelta::try_days(self.settings.price_window_days)
            .and_then(|window| end.checked_sub_signed(window))
            .ok_or_else(|| window_out_of_range(ticker, "price", self.settings.price_window_days))?;
        let interval = self.settings.price_interval;

        info!(
            "Fetching {} price history for {} from {}",
            interval,
            ticker,
            self.price_provider.id()
        );

        let bars = with_upstream_timeout(
            ticker,
            self.price_provider.id(),
            self.settings.upstream_timeout,
            self.price_provider
                .get_price_history(ticker, start, end, interval),
        )
        .await?;

        let data = normalize_price_bars(&bars)
            .map_err(|e| StockDataError::new(ticker, ErrorKind::Normalization, e.to_string()))?;

        debug!("Normalized {} price points for {}", data.len(), ticker);

        Ok(PriceSeries {
            ticker: ticker.to_string(),
            data,
        })
    }

    /// Call the news provider for the trailing window of calendar dates.
    async fn fetch_news(&self, ticker: &str) -> Result<NewsResult> {
        let to = Utc::now().date_naive();
        let from = TimeDelta::try_days(self.settings.news_window_days)
            .and_then(|window| to.checked_sub_signed(window))
            .ok_or_else(|| window_out_of_range(ticker, "news", self.settings.news_window_days))?;

        info!(
            "Fetching news for {} from {} ({} to {})",
            ticker,
            self.news_provider.id(),
            from,
            to
        );

        let data = with_upstream_timeout(
            ticker,
            self.news_provider.id(),
            self.settings.upstream_timeout,
            self.news_provider.get_company_news(ticker, from, to),
        )
        .await?;

        debug!("Fetched {} news items for {}", data.len(), ticker);

        Ok(NewsResult {
            ticker: ticker.to_string(),
            data,
        })
    }

    /// Serve from cache or run `fetch` once for all concurrent callers.
    ///
    /// A failure is logged once by the fetch itself, not by each waiter.
    async fn cached<F>(&self, namespace: CacheNamespace, ticker: &str, fetch: F) -> Result<CacheEntry>
    where
        F: Future<Output = Result<CacheEntry>>,
    {
        if let Some(entry) = self.cache.get(namespace, ticker).await {
            debug!("Cache hit for {} {}", namespace, ticker);
            return Ok(entry);
        }

        debug!("Cache miss for {} {}", namespace, ticker);

        let fetch = async {
            let result = fetch.await;
            if let Err(e) = &result {
                warn!("{}", e);
            }
            result
        };

        self.cache
            .get_or_try_fetch(namespace, ticker, fetch)
            .await
            .map_err(|e| (*e).clone())
    }
}

#[async_trait]
impl StockDataServiceTrait for StockDataService {
    async fn get_price_history(&self, ticker: &str) -> Result<Arc<PriceSeries>> {
        let ticker = validate_ticker(ticker)?;

        let entry = self
            .cached(CacheNamespace::Price, &ticker, async {
                self.fetch_price_history(&ticker)
                    .await
                    .map(|series| CacheEntry::Price(Arc::new(series)))
            })
            .await?;

        entry.into_price().ok_or_else(|| {
            StockDataError::new(
                &ticker,
                ErrorKind::Normalization,
                "cached entry is not a price series",
            )
        })
    }

    async fn get_news(&self, ticker: &str) -> Result<Arc<NewsResult>> {
        let ticker = validate_ticker(ticker)?;

        let entry = self
            .cached(CacheNamespace::News, &ticker, async {
                self.fetch_news(&ticker)
                    .await
                    .map(|news| CacheEntry::News(Arc::new(news)))
            })
            .await?;

        entry.into_news().ok_or_else(|| {
            StockDataError::new(
                &ticker,
                ErrorKind::Normalization,
                "cached entry is not a news result",
            )
        })
    }
}

/// Bound an upstream call by `limit` and lift its error into the service taxonomy.
async fn with_upstream_timeout<T, F>(
    ticker: &str,
    provider: &str,
    limit: Duration,
    call: F,
) -> Result<T>
where
    F: Future<Output = std::result::Result<T, MarketDataError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(StockDataError::from_provider(ticker, &e)),
        Err(_) => Err(StockDataError::new(
            ticker,
            ErrorKind::UpstreamTimeout,
            format!("{} did not respond within {} ms", provider, limit.as_millis()),
        )),
    }
}

fn window_out_of_range(ticker: &str, what: &str, days: i64) -> StockDataError {
    StockDataError::new(
        ticker,
        ErrorKind::UpstreamFetch,
        format!("{} window of {} days is out of range", what, days),
    )
}
