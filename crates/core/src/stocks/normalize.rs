//! Conversion of raw provider rows into [`PricePoint`]s.

use thiserror::Error;

use command_center_market_data::PriceBar;

use super::model::PricePoint;

/// A raw row that cannot become a price point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("row {index} at {timestamp} has no close price")]
    MissingClose { index: usize, timestamp: i64 },
}

/// Map each bar to `(unix seconds, close)` and sort ascending by time.
///
/// The sort is stable, so rows sharing a timestamp keep upstream order.
pub fn normalize_price_bars(bars: &[PriceBar]) -> Result<Vec<PricePoint>, NormalizeError> {
    let mut points = bars
        .iter()
        .enumerate()
        .map(|(index, bar)| {
            let time = bar.timestamp.timestamp();
            match bar.close {
                Some(value) if value.is_finite() => Ok(PricePoint { time, value }),
                _ => Err(NormalizeError::MissingClose {
                    index,
                    timestamp: time,
                }),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    points.sort_by_key(|p| p.time);
    Ok(points)
}
