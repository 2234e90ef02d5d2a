// Handler for the GetSignal request
use std::sync::Arc;
use tokio::sync::RwLock;

use super::helpers;
use crate::config::settings::EngineSettings;
use crate::data::market_data::HistoryStore;
use crate::error::EngineError;
use crate::services::SignalRequest;
use crate::signal::classifier;
use shared::models::LatestSignal;

pub async fn handle_get_signal(
    req_payload: SignalRequest,
    settings: &EngineSettings,
    history_store: Arc<RwLock<HistoryStore>>,
) -> Result<LatestSignal, EngineError> {
    tracing::debug!(symbol = %req_payload.symbol, "Handling SignalRequest in dedicated handler");

    let rows = helpers::annotated_series(&req_payload.symbol, settings, &history_store).await?;
    let latest = classifier::latest(&req_payload.symbol, &rows)?;

    tracing::info!(
        symbol = %latest.symbol,
        signal = %latest.signal,
        date = %latest.date,
        close = latest.close,
        rsi = latest.rsi,
        sma = latest.sma,
        "Latest signal computed"
    );
    Ok(latest)
}
