//! Command Center Core - caching and normalization of upstream market data.
//!
//! This crate sits between the HTTP surface and the upstream providers of
//! the `command-center-market-data` crate. It owns the process-wide cache
//! and the fetch-and-normalize service that fills it.

pub mod cache;
pub mod errors;
pub mod stocks;

pub use cache::{
    CacheEntry, CacheNamespace, CacheSettings, CacheStore, DEFAULT_CACHE_MAX_ENTRIES,
    DEFAULT_CACHE_TTL,
};
pub use stocks::{
    FetchSettings, NewsResult, PricePoint, PriceSeries, StockDataService, StockDataServiceTrait,
};

// Re-export error types
pub use errors::{ErrorKind, Result, StockDataError};
