use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use moka::policy::EvictionPolicy;

use crate::stocks::{NewsResult, PriceSeries};

/// Default lifetime of a cached response.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(15 * 60);

/// Default number of entries kept per namespace.
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = 1024;

/// Separate key spaces for the two kinds of cached response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CacheNamespace {
    Price,
    News,
}

impl CacheNamespace {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheNamespace::Price => "price",
            CacheNamespace::News => "news",
        }
    }
}

impl fmt::Display for CacheNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored response. Immutable once built; hits hand out shared views.
#[derive(Clone, Debug, PartialEq)]
pub enum CacheEntry {
    Price(Arc<PriceSeries>),
    News(Arc<NewsResult>),
}

impl CacheEntry {
    pub fn namespace(&self) -> CacheNamespace {
        match self {
            CacheEntry::Price(_) => CacheNamespace::Price,
            CacheEntry::News(_) => CacheNamespace::News,
        }
    }

    pub fn into_price(self) -> Option<Arc<PriceSeries>> {
        match self {
            CacheEntry::Price(series) => Some(series),
            CacheEntry::News(_) => None,
        }
    }

    pub fn into_news(self) -> Option<Arc<NewsResult>> {
        match self {
            CacheEntry::News(news) => Some(news),
            CacheEntry::Price(_) => None,
        }
    }
}

/// Bounds applied to the cache.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheSettings {
    /// How long an entry is served before it is refetched.
    pub ttl: Duration,
    /// Capacity of each namespace.
    pub max_entries: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_CACHE_TTL,
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
        }
    }
}

/// Concurrent, bounded, expiring cache of normalized responses.
///
/// Each namespace is its own map with its own capacity, keyed by ticker.
#[derive(Clone)]
pub struct CacheStore {
    price: Cache<String, CacheEntry>,
    news: Cache<String, CacheEntry>,
}

impl CacheStore {
    pub fn new(settings: &CacheSettings) -> Self {
        Self {
            price: build_namespace(settings),
            news: build_namespace(settings),
        }
    }

    fn namespace(&self, namespace: CacheNamespace) -> &Cache<String, CacheEntry> {
        match namespace {
            CacheNamespace::Price => &self.price,
            CacheNamespace::News => &self.news,
        }
    }

    /// Pure lookup. Expired entries are reported as absent.
    pub async fn get(&self, namespace: CacheNamespace, ticker: &str) -> Option<CacheEntry> {
        self.namespace(namespace).get(ticker).await
    }

    /// Insert or overwrite; last write wins.
    pub async fn put(&self, namespace: CacheNamespace, ticker: &str, entry: CacheEntry) {
        self.namespace(namespace)
            .insert(ticker.to_string(), entry)
            .await;
    }

    /// Return the cached entry or run `fetch` to produce it.
    ///
    /// Only one `fetch` runs per key at a time; concurrent callers for the
    /// same key wait for it and share its outcome. `Ok` values are stored,
    /// errors are handed to every waiter and never stored.
    pub async fn get_or_try_fetch<F, E>(
        &self,
        namespace: CacheNamespace,
        ticker: &str,
        fetch: F,
    ) -> Result<CacheEntry, Arc<E>>
    where
        F: Future<Output = Result<CacheEntry, E>>,
        E: Send + Sync + 'static,
    {
        self.namespace(namespace)
            .try_get_with(ticker.to_string(), fetch)
            .await
    }

    pub async fn invalidate(&self, namespace: CacheNamespace, ticker: &str) {
        self.namespace(namespace).invalidate(ticker).await;
    }

    /// Approximate number of live entries in `namespace`; exact after
    /// [`run_pending_tasks`](Self::run_pending_tasks).
    pub fn entry_count(&self, namespace: CacheNamespace) -> u64 {
        self.namespace(namespace).entry_count()
    }

    /// Apply pending evictions and expirations in both namespaces.
    pub async fn run_pending_tasks(&self) {
        self.price.run_pending_tasks().await;
        self.news.run_pending_tasks().await;
    }
}

fn build_namespace(settings: &CacheSettings) -> Cache<String, CacheEntry> {
    Cache::builder()
        .max_capacity(settings.max_entries)
        .time_to_live(settings.ttl)
        .eviction_policy(EvictionPolicy::lru())
        .build()
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new(&CacheSettings::default())
    }
}
