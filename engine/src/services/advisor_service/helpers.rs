// Helper functions shared by the advisor service handlers
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::settings::EngineSettings;
use crate::data::market_data::HistoryStore;
use crate::data::series;
use crate::error::EngineError;
use crate::signal::{classify, IndicatorEngine};
use shared::models::{DailyBar, SignalRow};

// Fetch the stored history for a symbol. An unknown symbol is the opaque
// fetch-collaborator failure; a history that exists but is empty or holds
// no usable closes surfaces as NoData from the series preparer instead.
pub async fn fetch_bars(
    symbol: &str,
    history_store: &Arc<RwLock<HistoryStore>>,
) -> Result<Vec<DailyBar>, EngineError> {
    let store = history_store.read().await;
    let bars = store.get_bars(symbol);
    drop(store); // Explicitly drop lock after data retrieval

    bars.ok_or_else(|| {
        EngineError::MarketDataError(format!("No price history found for symbol '{}'", symbol))
    })
}

// The full pipeline for one symbol: prepare -> compute -> classify.
// Each call recomputes from scratch on an owned copy of the bars.
pub async fn annotated_series(
    symbol: &str,
    settings: &EngineSettings,
    history_store: &Arc<RwLock<HistoryStore>>,
) -> Result<Vec<SignalRow>, EngineError> {
    let bars = fetch_bars(symbol, history_store).await?;
    let closing = series::prepare(symbol, &bars)?;
    let engine = IndicatorEngine::new(settings.rsi_period, settings.sma_period);
    let rows = engine.compute(&closing)?;
    Ok(classify(&rows))
}
