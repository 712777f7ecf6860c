use std::sync::Arc;

use crate::config::{Config, LogFormat};
use command_center_core::{CacheStore, StockDataService, StockDataServiceTrait};
use command_center_market_data::{FinnhubProvider, YahooProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub stock_data_service: Arc<dyn StockDataServiceTrait>,
}

impl AppState {
    pub fn new(stock_data_service: Arc<dyn StockDataServiceTrait>) -> Self {
        Self { stock_data_service }
    }
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let price_provider = Arc::new(YahooProvider::new()?);
    let news_provider = Arc::new(FinnhubProvider::with_timeout(
        config.finnhub_api_key.clone(),
        config.fetch.upstream_timeout,
    ));
    let cache = Arc::new(CacheStore::new(&config.cache));

    tracing::info!(
        "Cache: ttl {}s, {} entries per namespace",
        config.cache.ttl.as_secs(),
        config.cache.max_entries
    );
    tracing::info!(
        "Price history: {} days at {}; news: {} days; upstream timeout {} ms",
        config.fetch.price_window_days,
        config.fetch.price_interval,
        config.fetch.news_window_days,
        config.fetch.upstream_timeout.as_millis()
    );

    let stock_data_service = Arc::new(StockDataService::new(
        price_provider,
        news_provider,
        cache,
        config.fetch.clone(),
    ));

    Ok(Arc::new(AppState::new(stock_data_service)))
}
