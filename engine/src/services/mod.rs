// Service layer: request/response types for the in-process advisor
// service, plus the service module itself.
pub mod advisor_service;

use serde::{Deserialize, Serialize};
use shared::models::SignalRow;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadCsvRequest {
    pub file_path: String,
    pub symbol: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadCsvResponse {
    pub success: bool,
    pub message: String,
    pub bars_loaded: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalRequest {
    pub symbol: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesRequest {
    pub symbol: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesResponse {
    pub symbol: String,
    pub rows: Vec<SignalRow>,
}
