use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::MarketDataError;

/// Raw price row as returned by a price-history provider
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Start of the bar
    pub timestamp: DateTime<Utc>,

    /// Opening price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,

    /// High price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,

    /// Low price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,

    /// Closing price. Providers leave this empty when the upstream row had none.
    pub close: Option<f64>,

    /// Trading volume
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
}

impl PriceBar {
    /// Create a bar with only a close price
    pub fn new(timestamp: DateTime<Utc>, close: f64) -> Self {
        Self {
            timestamp,
            open: None,
            high: None,
            low: None,
            close: Some(close),
            volume: None,
        }
    }
}

/// Granularity of a price-history request
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceInterval {
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[default]
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1wk")]
    OneWeek,
}

impl PriceInterval {
    /// Interval code understood by the Yahoo chart API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMinute => "1m",
            Self::FiveMinutes => "5m",
            Self::FifteenMinutes => "15m",
            Self::ThirtyMinutes => "30m",
            Self::OneHour => "1h",
            Self::OneDay => "1d",
            Self::OneWeek => "1wk",
        }
    }
}

impl fmt::Display for PriceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceInterval {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1m" => Ok(Self::OneMinute),
            "5m" => Ok(Self::FiveMinutes),
            "15m" => Ok(Self::FifteenMinutes),
            "30m" => Ok(Self::ThirtyMinutes),
            "1h" | "60m" => Ok(Self::OneHour),
            "1d" => Ok(Self::OneDay),
            "1wk" => Ok(Self::OneWeek),
            other => Err(MarketDataError::UnsupportedInterval(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_price_bar_new() {
        let ts = Utc.timestamp_opt(1_704_067_200, 0).unwrap();
        let bar = PriceBar::new(ts, 150.25);
        assert_eq!(bar.close, Some(150.25));
        assert!(bar.open.is_none());
        assert!(bar.volume.is_none());
    }

    #[test]
    fn test_interval_parsing() {
        assert_eq!("1h".parse::<PriceInterval>().unwrap(), PriceInterval::OneHour);
        assert_eq!("60m".parse::<PriceInterval>().unwrap(), PriceInterval::OneHour);
        assert_eq!(" 1D ".parse::<PriceInterval>().unwrap(), PriceInterval::OneDay);
        assert_eq!("1wk".parse::<PriceInterval>().unwrap(), PriceInterval::OneWeek);
        assert!(matches!(
            "2h".parse::<PriceInterval>(),
            Err(MarketDataError::UnsupportedInterval(s)) if s == "2h"
        ));
    }

    #[test]
    fn test_interval_default_is_hourly() {
        assert_eq!(PriceInterval::default(), PriceInterval::OneHour);
        assert_eq!(PriceInterval::default().to_string(), "1h");
    }
}
