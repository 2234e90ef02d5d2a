// Handler for the GetSignalSeries request
use std::sync::Arc;
use tokio::sync::RwLock;

use super::helpers;
use crate::config::settings::EngineSettings;
use crate::data::market_data::HistoryStore;
use crate::error::EngineError;
use crate::services::{SeriesRequest, SeriesResponse};

pub async fn handle_get_signal_series(
    req_payload: SeriesRequest,
    settings: &EngineSettings,
    history_store: Arc<RwLock<HistoryStore>>,
) -> Result<SeriesResponse, EngineError> {
    tracing::debug!(symbol = %req_payload.symbol, "Handling SeriesRequest in dedicated handler");

    let rows = helpers::annotated_series(&req_payload.symbol, settings, &history_store).await?;

    tracing::debug!(symbol = %req_payload.symbol, count = rows.len(), "Annotated series computed");
    Ok(SeriesResponse {
        symbol: req_payload.symbol,
        rows,
    })
}
