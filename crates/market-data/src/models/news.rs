use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A news record exactly as the provider returned it.
///
/// The record is kept as raw JSON so that every upstream field (headline,
/// url, datetime, source, and anything the provider adds later) is passed
/// through without being reshaped. Accessors exist for logging only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewsItem(Value);

impl NewsItem {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn headline(&self) -> Option<&str> {
        self.0.get("headline").and_then(Value::as_str)
    }

    /// Publication time in Unix seconds, when the provider supplied one.
    pub fn datetime(&self) -> Option<i64> {
        self.0.get("datetime").and_then(Value::as_i64)
    }
}

impl From<Value> for NewsItem {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
