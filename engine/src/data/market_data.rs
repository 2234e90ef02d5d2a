// Manages loaded daily price history, one bar list per symbol
use anyhow::Result;
use shared::models::DailyBar;
use std::collections::HashMap;

// In-memory memoization layer for fetched histories. The signal pipeline
// itself stays value-based; callers hand it an owned copy of the bars.
pub struct HistoryStore {
    data: HashMap<String, Vec<DailyBar>>,
}

impl HistoryStore {
    pub fn new() -> Self {
        HistoryStore {
            data: HashMap::new(),
        }
    }

    pub fn add_bars(&mut self, symbol: &str, new_bars: Vec<DailyBar>) -> Result<()> {
        let bars = self.data.entry(symbol.to_string()).or_default();

        bars.extend(new_bars);
        // Stable sort, then keep the first bar loaded for each date.
        bars.sort_by_key(|b| b.date);
        bars.dedup_by_key(|b| b.date);

        Ok(())
    }

    pub fn get_bars(&self, symbol: &str) -> Option<Vec<DailyBar>> {
        self.data.get(symbol).cloned()
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}
