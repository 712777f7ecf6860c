//! Normalized response models.

use serde::{Deserialize, Serialize};

use command_center_market_data::NewsItem;

/// One closing price at a point in time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Unix timestamp in whole seconds
    pub time: i64,
    /// Closing price
    pub value: f64,
}

/// Price history for a ticker, sorted ascending by `time`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub ticker: String,
    pub data: Vec<PricePoint>,
}

/// News for a ticker, in the order the provider returned it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsResult {
    pub ticker: String,
    pub data: Vec<NewsItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_price_series_wire_shape() {
        let series = PriceSeries {
            ticker: "AAPL".to_string(),
            data: vec![
                PricePoint {
                    time: 100,
                    value: 1.0,
                },
                PricePoint {
                    time: 200,
                    value: 2.5,
                },
            ],
        };

        assert_eq!(
            serde_json::to_value(&series).unwrap(),
            json!({
                "ticker": "AAPL",
                "data": [{"time": 100, "value": 1.0}, {"time": 200, "value": 2.5}]
            })
        );
    }

    #[test]
    fn test_news_result_wire_shape() {
        let item = json!({"headline": "h", "datetime": 1, "url": "u"});
        let news = NewsResult {
            ticker: "MSFT".to_string(),
            data: vec![NewsItem::new(item.clone())],
        };

        assert_eq!(
            serde_json::to_value(&news).unwrap(),
            json!({"ticker": "MSFT", "data": [item]})
        );
    }
}
