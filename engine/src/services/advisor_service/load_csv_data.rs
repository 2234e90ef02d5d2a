// Handler for the LoadCsvData request
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::data::csv_parser::DailyBarCsvParser;
use crate::data::market_data::HistoryStore;
use crate::error::EngineError;
use crate::services::{LoadCsvRequest, LoadCsvResponse};

pub async fn handle_load_csv_data(
    req_payload: LoadCsvRequest,
    history_store: Arc<RwLock<HistoryStore>>,
) -> Result<LoadCsvResponse, EngineError> {
    let bars = DailyBarCsvParser::load_bars_from_csv(&req_payload.file_path, &req_payload.symbol)
        .map_err(EngineError::from)?;

    let bars_loaded = bars.len();
    let mut store = history_store.write().await;
    store
        .add_bars(&req_payload.symbol, bars)
        .map_err(EngineError::from)?;
    drop(store);

    tracing::info!(
        symbol = %req_payload.symbol,
        count = bars_loaded,
        "Loaded daily bars from CSV"
    );
    Ok(LoadCsvResponse {
        success: true,
        message: format!(
            "Loaded {} daily bars for symbol {}",
            bars_loaded, req_payload.symbol
        ),
        bars_loaded,
    })
}
