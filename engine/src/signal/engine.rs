// Computes RSI and SMA over a closing series and aligns them by date.
use crate::config::settings::EngineSettings;
use crate::error::EngineError;
use crate::indicators::{IndicatorCalculator, Rsi, Sma};
use chrono::NaiveDate;
use shared::models::{ClosingSeries, IndicatorRow};
use std::collections::BTreeMap;

pub struct IndicatorEngine {
    rsi: Rsi,
    sma: Sma,
    min_len: usize,
}

impl IndicatorEngine {
    pub fn new(rsi_period: usize, sma_period: usize) -> Self {
        Self {
            rsi: Rsi::new(rsi_period),
            sma: Sma::new(sma_period),
            // RSI needs one extra point for its first price change.
            min_len: sma_period.max(rsi_period + 1),
        }
    }

    /// One aligned row per date where BOTH indicators are defined. Warm-up
    /// rows are excluded, never null-filled, so at the default 14/20 the
    /// output starts 20 periods into the input and has `len - 19` rows.
    pub fn compute(&self, series: &ClosingSeries) -> Result<Vec<IndicatorRow>, EngineError> {
        if series.len() < self.min_len {
            return Err(EngineError::InsufficientHistory {
                got: series.len(),
                need: self.min_len,
            });
        }

        let rsi_by_date = defined_by_date(series, self.rsi.calculate(&series.points));
        let sma_by_date = defined_by_date(series, self.sma.calculate(&series.points));

        // Intersection by date rather than positional trimming: the two
        // warm-up lengths differ and must never be lined up by index.
        let rows = series
            .points
            .iter()
            .filter_map(|p| match (rsi_by_date.get(&p.date), sma_by_date.get(&p.date)) {
                (Some(&rsi), Some(&sma)) => Some(IndicatorRow {
                    date: p.date,
                    close: p.close,
                    rsi,
                    sma,
                }),
                _ => None,
            })
            .collect();

        Ok(rows)
    }
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        let settings = EngineSettings::default();
        Self::new(settings.rsi_period, settings.sma_period)
    }
}

fn defined_by_date(series: &ClosingSeries, values: Vec<Option<f64>>) -> BTreeMap<NaiveDate, f64> {
    series
        .points
        .iter()
        .zip(values)
        .filter_map(|(p, v)| v.map(|v| (p.date, v)))
        .collect()
}
