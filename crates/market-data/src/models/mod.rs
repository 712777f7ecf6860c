//! Market data models
//!
//! This module contains the raw record types returned by providers:
//! - `price` - OHLC rows (PriceBar) and request granularity (PriceInterval)
//! - `news` - Opaque news records (NewsItem)

mod news;
mod price;

pub use news::NewsItem;
pub use price::{PriceBar, PriceInterval};
