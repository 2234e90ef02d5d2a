use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One raw daily bar as delivered by the data-fetch collaborator.
/// Any field other than `date` and `close` is carried for display only;
/// the signal computation ignores it. Missing cells stay `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyBar {
    pub symbol: String,
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
}

/// A single clean observation: one trading date, one finite close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Gap-free closing-price series, chronological, one point per trading day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClosingSeries {
    pub symbol: String,
    pub points: Vec<PricePoint>,
}

impl ClosingSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One fully aligned output row: both indicators are defined here.
/// Warm-up rows are never emitted, so `rsi` and `sma` are plain values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    pub date: NaiveDate,
    pub close: f64,
    pub rsi: f64,
    pub sma: f64,
}

/// Discrete trading recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::Hold => "HOLD",
        };
        write!(f, "{}", text)
    }
}

/// An indicator row with its classification attached, for charting
/// collaborators (price + SMA overlay, RSI pane).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalRow {
    pub date: NaiveDate,
    pub close: f64,
    pub rsi: f64,
    pub sma: f64,
    pub signal: Signal,
}

/// The headline result: classification and indicator state at the most
/// recent aligned row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatestSignal {
    pub symbol: String,
    pub date: NaiveDate,
    pub close: f64,
    pub rsi: f64,
    pub sma: f64,
    pub signal: Signal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_display_matches_wire_form() {
        assert_eq!(Signal::Buy.to_string(), "BUY");
        assert_eq!(Signal::Sell.to_string(), "SELL");
        assert_eq!(Signal::Hold.to_string(), "HOLD");
    }
}
