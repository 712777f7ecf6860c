use std::{fmt::Display, net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{anyhow, bail, Context};
use command_center_core::stocks::settings::MAX_WINDOW_DAYS;
use command_center_core::{CacheSettings, FetchSettings, DEFAULT_CACHE_MAX_ENTRIES};
use command_center_market_data::PriceInterval;

/// Output format of the tracing subscriber.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("expected `text` or `json`, got `{}`", other)),
        }
    }
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub finnhub_api_key: String,
    pub fetch: FetchSettings,
    pub cache: CacheSettings,
    pub log_format: LogFormat,
}

impl Config {
    /// Load `.env` if present, then read configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Unset variables
    /// fall back to defaults; malformed values are errors.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let finnhub_api_key = lookup("FINNHUB_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| anyhow!("FINNHUB_API_KEY must be set"))?;

        let listen_addr: SocketAddr = parse_var(&lookup, "CC_LISTEN_ADDR", "0.0.0.0:8000")?;
        let cors_allow = lookup("CC_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let request_timeout_ms: u64 = parse_var(&lookup, "CC_REQUEST_TIMEOUT_MS", "30000")?;
        let upstream_timeout_ms: u64 = parse_var(&lookup, "CC_UPSTREAM_TIMEOUT_MS", "10000")?;
        let price_window_days: i64 = parse_var(&lookup, "CC_PRICE_WINDOW_DAYS", "30")?;
        let price_interval: PriceInterval = parse_var(&lookup, "CC_PRICE_INTERVAL", "1h")?;
        let news_window_days: i64 = parse_var(&lookup, "CC_NEWS_WINDOW_DAYS", "30")?;
        let cache_ttl_secs: u64 = parse_var(&lookup, "CC_CACHE_TTL_SECS", "900")?;
        let cache_max_entries: u64 = parse_var(
            &lookup,
            "CC_CACHE_MAX_ENTRIES",
            &DEFAULT_CACHE_MAX_ENTRIES.to_string(),
        )?;
        let log_format: LogFormat = parse_var(&lookup, "CC_LOG_FORMAT", "text")?;

        check_window("CC_PRICE_WINDOW_DAYS", price_window_days)?;
        check_window("CC_NEWS_WINDOW_DAYS", news_window_days)?;
        if request_timeout_ms == 0 {
            bail!("CC_REQUEST_TIMEOUT_MS must be positive");
        }
        if upstream_timeout_ms == 0 {
            bail!("CC_UPSTREAM_TIMEOUT_MS must be positive");
        }
        if cache_ttl_secs == 0 {
            bail!("CC_CACHE_TTL_SECS must be positive");
        }
        if cache_max_entries == 0 {
            bail!("CC_CACHE_MAX_ENTRIES must be positive");
        }

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(request_timeout_ms),
            finnhub_api_key,
            fetch: FetchSettings {
                price_window_days,
                price_interval,
                news_window_days,
                upstream_timeout: Duration::from_millis(upstream_timeout_ms),
            },
            cache: CacheSettings {
                ttl: Duration::from_secs(cache_ttl_secs),
                max_entries: cache_max_entries,
            },
            log_format,
        })
    }
}

fn check_window(key: &str, days: i64) -> anyhow::Result<()> {
    if !(1..=MAX_WINDOW_DAYS).contains(&days) {
        bail!("{} must be between 1 and {} days, got {}", key, MAX_WINDOW_DAYS, days);
    }
    Ok(())
}

fn parse_var<T, F>(lookup: &F, key: &str, default: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).unwrap_or_else(|| default.to_string());
    raw.trim()
        .parse()
        .map_err(|e: T::Err| anyhow!("{}", e))
        .with_context(|| format!("Invalid {}: `{}`", key, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[("FINNHUB_API_KEY", "secret")]).unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:8000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.cors_allow, vec!["*".to_string()]);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.finnhub_api_key, "secret");
        assert_eq!(config.fetch, FetchSettings::default());
        assert_eq!(config.cache, CacheSettings::default());
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_missing_api_key_fails() {
        let err = config_from(&[]).err().unwrap();
        assert!(err.to_string().contains("FINNHUB_API_KEY"));

        assert!(config_from(&[("FINNHUB_API_KEY", "   ")]).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("FINNHUB_API_KEY", "secret"),
            ("CC_LISTEN_ADDR", "127.0.0.1:9000"),
            ("CC_CORS_ALLOW_ORIGINS", "http://a.test, http://b.test,"),
            ("CC_UPSTREAM_TIMEOUT_MS", "2500"),
            ("CC_PRICE_WINDOW_DAYS", "7"),
            ("CC_PRICE_INTERVAL", "1d"),
            ("CC_NEWS_WINDOW_DAYS", "3"),
            ("CC_CACHE_TTL_SECS", "60"),
            ("CC_CACHE_MAX_ENTRIES", "10"),
            ("CC_LOG_FORMAT", "JSON"),
        ])
        .unwrap();

        assert_eq!(config.listen_addr.port(), 9000);
        assert_eq!(config.cors_allow, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.fetch.upstream_timeout, Duration::from_millis(2500));
        assert_eq!(config.fetch.price_window_days, 7);
        assert_eq!(config.fetch.price_interval, PriceInterval::OneDay);
        assert_eq!(config.fetch.news_window_days, 3);
        assert_eq!(config.cache.ttl, Duration::from_secs(60));
        assert_eq!(config.cache.max_entries, 10);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_malformed_values_fail() {
        for (key, value) in [
            ("CC_LISTEN_ADDR", "not-an-addr"),
            ("CC_REQUEST_TIMEOUT_MS", "soon"),
            ("CC_PRICE_INTERVAL", "2h"),
            ("CC_CACHE_TTL_SECS", "0"),
            ("CC_PRICE_WINDOW_DAYS", "-1"),
            ("CC_REQUEST_TIMEOUT_MS", "0"),
            ("CC_CACHE_MAX_ENTRIES", "0"),
            ("CC_LOG_FORMAT", "xml"),
        ] {
            let result = config_from(&[("FINNHUB_API_KEY", "secret"), (key, value)]);
            assert!(result.is_err(), "{}={} should be rejected", key, value);
        }
    }

    #[test]
    fn test_windows_are_bounded() {
        for key in ["CC_PRICE_WINDOW_DAYS", "CC_NEWS_WINDOW_DAYS"] {
            let err = config_from(&[("FINNHUB_API_KEY", "secret"), (key, "1000000000000")])
                .err()
                .unwrap();
            assert!(err.to_string().contains(key));

            let config =
                config_from(&[("FINNHUB_API_KEY", "secret"), (key, "3650")]).unwrap();
            assert!(
                config.fetch.price_window_days == MAX_WINDOW_DAYS
                    || config.fetch.news_window_days == MAX_WINDOW_DAYS
            );
        }
    }

    #[test]
    fn test_error_names_the_variable() {
        let err = config_from(&[("FINNHUB_API_KEY", "secret"), ("CC_CACHE_MAX_ENTRIES", "lots")])
            .err()
            .unwrap();
        assert!(err.to_string().contains("CC_CACHE_MAX_ENTRIES"));
    }
}
