//! Stock price-history and news operations.
//!
//! - [`model`] - Normalized response shapes (PriceSeries, NewsResult)
//! - [`normalize`] - Conversion of raw provider rows into price points
//! - [`ticker`] - Ticker validation applied before any cache or upstream access
//! - [`settings`] - Fetch windows, granularity and upstream timeout
//! - [`service`] - Fetch-and-normalize service backed by the cache
//!
//! # Architecture
//!
//! ```text
//! handler ─▶ StockDataService ─▶ CacheStore ──hit──▶ Arc<PriceSeries | NewsResult>
//!                                    │
//!                                   miss (single-flight)
//!                                    ▼
//!                     PriceHistoryProvider / NewsProvider ─▶ normalize ─▶ store
//! ```

pub mod model;
pub mod normalize;
pub mod service;
pub mod settings;
pub mod ticker;
mod traits;


pub use model::{NewsResult, PricePoint, PriceSeries};
pub use service::StockDataService;
pub use settings::FetchSettings;
pub use traits::StockDataServiceTrait;
