//! Command Center Market Data Crate
//!
//! This crate provides the upstream data sources behind the Command Center
//! API: historical prices and company news.
//!
//! # Overview
//!
//! The market data crate supports:
//! - Historical OHLC price bars at a configurable granularity (Yahoo Finance)
//! - Company news for a date range (Finnhub)
//!
//! # Architecture
//!
//! ```text
//! +----------------------+     +----------------------+
//! | PriceHistoryProvider |     |     NewsProvider     |  (traits)
//! +----------------------+     +----------------------+
//!            |                            |
//!            v                            v
//! +----------------------+     +----------------------+
//! |    YahooProvider     |     |   FinnhubProvider    |  (vendors)
//! +----------------------+     +----------------------+
//!            |                            |
//!            v                            v
//! +----------------------+     +----------------------+
//! |    Vec<PriceBar>     |     |    Vec<NewsItem>     |  (raw records)
//! +----------------------+     +----------------------+
//! ```
//!
//! # Core Types
//!
//! - [`PriceBar`] - Raw OHLC row as returned by a price provider
//! - [`PriceInterval`] - Granularity of a price-history request
//! - [`NewsItem`] - Opaque news record, passed through untouched
//! - [`MarketDataError`] - Provider failure taxonomy

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;

pub use models::{NewsItem, PriceBar, PriceInterval};

pub use provider::finnhub::FinnhubProvider;
pub use provider::yahoo::YahooProvider;
pub use provider::{NewsProvider, PriceHistoryProvider};
