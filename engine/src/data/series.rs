// Series preparation: reduces a raw daily-bar history to the clean
// closing-price series the indicator engine consumes.
use crate::error::EngineError;
use shared::models::{ClosingSeries, DailyBar, PricePoint};
use std::collections::HashSet;

/// Drops bars with missing or non-finite closes, keeps only the close field,
/// preserves chronological ordering, and deduplicates by date keeping the
/// first occurrence. Fails with `NoData` when nothing usable remains.
pub fn prepare(symbol: &str, bars: &[DailyBar]) -> Result<ClosingSeries, EngineError> {
    let mut seen_dates = HashSet::new();
    let mut points = Vec::with_capacity(bars.len());

    for b in bars {
        let close = match b.close {
            Some(c) if c.is_finite() => c,
            _ => continue,
        };
        if !seen_dates.insert(b.date) {
            continue;
        }
        points.push(PricePoint { date: b.date, close });
    }

    if points.is_empty() {
        return Err(EngineError::NoData);
    }

    Ok(ClosingSeries {
        symbol: symbol.to_string(),
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    fn bar(day_offset: u64, close: Option<f64>) -> DailyBar {
        DailyBar {
            symbol: "TEST".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Days::new(day_offset),
            open: close,
            high: close,
            low: close,
            close,
            volume: Some(0.0),
        }
    }

    #[test]
    fn test_prepare_drops_missing_and_non_finite_closes() {
        let bars = vec![
            bar(0, Some(100.0)),
            bar(1, None),
            bar(2, Some(f64::NAN)),
            bar(3, Some(f64::INFINITY)),
            bar(4, Some(101.0)),
        ];
        let series = prepare("TEST", &bars).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.points[0].close, 100.0);
        assert_eq!(series.points[1].close, 101.0);
    }

    #[test]
    fn test_prepare_preserves_order_and_dedups_first() {
        let mut bars = vec![bar(0, Some(1.0)), bar(1, Some(2.0)), bar(2, Some(3.0))];
        bars.push(bar(1, Some(99.0))); // duplicate date, later occurrence

        let series = prepare("TEST", &bars).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.points[1].close, 2.0);
        assert!(series.points.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_prepare_empty_history_is_no_data() {
        let result = prepare("TEST", &[]);
        assert!(matches!(result, Err(EngineError::NoData)));
    }

    #[test]
    fn test_prepare_all_closes_missing_is_no_data() {
        let bars = vec![bar(0, None), bar(1, None), bar(2, Some(f64::NAN))];
        let result = prepare("TEST", &bars);
        assert!(matches!(result, Err(EngineError::NoData)));
    }

    #[test]
    fn test_prepare_keeps_symbol() {
        let series = prepare("PETR4", &[bar(0, Some(10.0))]).unwrap();
        assert_eq!(series.symbol, "PETR4");
    }
}
