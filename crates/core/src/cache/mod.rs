//! Process-wide response cache.
//!
//! Price and news results live in separate namespaces keyed by ticker, so
//! the two never collide. Each namespace is bounded (least-recently-used
//! eviction once full), entries expire after a fixed time-to-live, and
//! concurrent misses for one key are coalesced into a single fetch.

mod store;

pub use store::{
    CacheEntry, CacheNamespace, CacheSettings, CacheStore, DEFAULT_CACHE_MAX_ENTRIES,
    DEFAULT_CACHE_TTL,
};
