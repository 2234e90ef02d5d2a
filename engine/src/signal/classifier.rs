// Per-row BUY/SELL/HOLD classification over the aligned indicator rows.
use crate::error::EngineError;
use shared::models::{IndicatorRow, LatestSignal, Signal, SignalRow};

// Exported so charting collaborators draw their threshold lines from the
// same values the classifier uses.
pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;

// Both inequalities are strict: a row sitting exactly on a threshold holds.
// The opposed close/sma comparisons make BUY and SELL mutually exclusive.
fn classify_row(row: &IndicatorRow) -> Signal {
    if row.rsi < RSI_OVERSOLD && row.close > row.sma {
        Signal::Buy
    } else if row.rsi > RSI_OVERBOUGHT && row.close < row.sma {
        Signal::Sell
    } else {
        Signal::Hold
    }
}

/// Attaches a signal to every aligned row. Row-local: no cross-row state.
pub fn classify(rows: &[IndicatorRow]) -> Vec<SignalRow> {
    rows.iter()
        .map(|row| SignalRow {
            date: row.date,
            close: row.close,
            rsi: row.rsi,
            sma: row.sma,
            signal: classify_row(row),
        })
        .collect()
}

/// The classification at the chronologically last row.
pub fn latest(symbol: &str, rows: &[SignalRow]) -> Result<LatestSignal, EngineError> {
    let last = rows.last().ok_or(EngineError::EmptySeries)?;
    Ok(LatestSignal {
        symbol: symbol.to_string(),
        date: last.date,
        close: last.close,
        rsi: last.rsi,
        sma: last.sma,
        signal: last.signal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(rsi: f64, close: f64, sma: f64) -> IndicatorRow {
        IndicatorRow {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            close,
            rsi,
            sma,
        }
    }

    fn signal_of(rsi: f64, close: f64, sma: f64) -> Signal {
        classify(&[row(rsi, close, sma)])[0].signal
    }

    #[test]
    fn test_buy_requires_oversold_and_close_above_sma() {
        assert_eq!(signal_of(25.0, 105.0, 100.0), Signal::Buy);
        // Each leg alone is not enough.
        assert_eq!(signal_of(25.0, 95.0, 100.0), Signal::Hold);
        assert_eq!(signal_of(50.0, 105.0, 100.0), Signal::Hold);
    }

    #[test]
    fn test_sell_requires_overbought_and_close_below_sma() {
        assert_eq!(signal_of(75.0, 95.0, 100.0), Signal::Sell);
        assert_eq!(signal_of(75.0, 105.0, 100.0), Signal::Hold);
        assert_eq!(signal_of(50.0, 95.0, 100.0), Signal::Hold);
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        // Sitting exactly on a threshold never triggers.
        assert_eq!(signal_of(30.0, 105.0, 100.0), Signal::Hold);
        assert_eq!(signal_of(70.0, 95.0, 100.0), Signal::Hold);
    }

    #[test]
    fn test_strong_uptrend_holds() {
        // RSI pinned at 100 with close above SMA: the sell condition needs
        // close BELOW sma, so a strong uptrend holds rather than sells.
        assert_eq!(signal_of(100.0, 130.0, 120.5), Signal::Hold);
    }

    #[test]
    fn test_no_row_is_both_buy_and_sell() {
        // Sweep a grid of indicator states; the conjunctive rules can never
        // agree because the close/sma comparisons oppose each other.
        for rsi in [0.0, 15.0, 30.0, 45.0, 70.0, 85.0, 100.0] {
            for close in [90.0, 100.0, 110.0] {
                let buy = rsi < RSI_OVERSOLD && close > 100.0;
                let sell = rsi > RSI_OVERBOUGHT && close < 100.0;
                assert!(!(buy && sell));
                let got = signal_of(rsi, close, 100.0);
                match got {
                    Signal::Buy => assert!(buy),
                    Signal::Sell => assert!(sell),
                    Signal::Hold => assert!(!buy && !sell),
                }
            }
        }
    }

    #[test]
    fn test_classify_is_row_local_and_idempotent() {
        let rows = vec![
            row(25.0, 105.0, 100.0),
            row(75.0, 95.0, 100.0),
            row(50.0, 100.0, 100.0),
        ];
        let first = classify(&rows);
        let second = classify(&rows);
        assert_eq!(first, second);
        assert_eq!(first[0].signal, Signal::Buy);
        assert_eq!(first[1].signal, Signal::Sell);
        assert_eq!(first[2].signal, Signal::Hold);
    }

    #[test]
    fn test_latest_returns_last_row() {
        let mut earlier = row(50.0, 100.0, 100.0);
        earlier.date = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        let annotated = classify(&[earlier, row(25.0, 105.0, 100.0)]);
        let latest = latest("AAPL", &annotated).unwrap();
        assert_eq!(latest.symbol, "AAPL");
        assert_eq!(latest.signal, Signal::Buy);
        assert_eq!(latest.close, 105.0);
    }

    #[test]
    fn test_latest_on_empty_series() {
        let result = latest("AAPL", &[]);
        assert!(matches!(result, Err(EngineError::EmptySeries)));
    }
}
