use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;

use super::model::{NewsResult, PriceSeries};

/// Trait for the fetch-and-normalize service.
#[async_trait]
pub trait StockDataServiceTrait: Send + Sync {
    /// Trailing price history for `ticker`, served from cache when present.
    async fn get_price_history(&self, ticker: &str) -> Result<Arc<PriceSeries>>;

    /// Trailing company news for `ticker`, served from cache when present.
    async fn get_news(&self, ticker: &str) -> Result<Arc<NewsResult>>;
}
