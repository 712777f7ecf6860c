//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `PriceHistoryProvider` and `NewsProvider` traits
//! - Concrete provider implementations (Yahoo for prices, Finnhub for news)
//!
//! The service layer depends only on the traits, so vendors can be swapped
//! and tests can script provider behaviour.

mod traits;

pub mod finnhub;
pub mod yahoo;

pub use traits::{NewsProvider, PriceHistoryProvider};
