// engine/src/services/advisor_service/mod.rs
// Module hub for the advisor service: the AdvisorService struct, its
// dispatch methods, and the handler submodules.

use super::{LoadCsvRequest, LoadCsvResponse, SeriesRequest, SeriesResponse, SignalRequest};
use crate::config::settings::EngineSettings;
use crate::data::market_data::HistoryStore;
use crate::error::EngineError;
use shared::models::LatestSignal;
use std::sync::Arc;
use tokio::sync::RwLock;

pub mod get_signal;
pub mod get_signal_series;
pub mod helpers;
pub mod load_csv_data;

pub struct AdvisorService {
    history_store: Arc<RwLock<HistoryStore>>,
    settings: EngineSettings,
}

impl AdvisorService {
    pub fn new(history_store: Arc<RwLock<HistoryStore>>, settings: EngineSettings) -> Self {
        AdvisorService {
            history_store,
            settings,
        }
    }

    pub async fn load_csv_data(
        &self,
        request: LoadCsvRequest,
    ) -> Result<LoadCsvResponse, EngineError> {
        tracing::info!(
            symbol = %request.symbol,
            path = %request.file_path,
            "Received LoadCsvRequest, dispatching to handler."
        );
        load_csv_data::handle_load_csv_data(request, self.history_store.clone()).await
    }

    pub async fn get_signal(&self, request: SignalRequest) -> Result<LatestSignal, EngineError> {
        tracing::info!(
            symbol = %request.symbol,
            "Received SignalRequest, dispatching to handler."
        );
        get_signal::handle_get_signal(request, &self.settings, self.history_store.clone()).await
    }

    pub async fn get_signal_series(
        &self,
        request: SeriesRequest,
    ) -> Result<SeriesResponse, EngineError> {
        tracing::info!(
            symbol = %request.symbol,
            "Received SeriesRequest, dispatching to handler."
        );
        get_signal_series::handle_get_signal_series(
            request,
            &self.settings,
            self.history_store.clone(),
        )
        .await
    }
}
