// Engine settings, potentially loaded from a config file or environment variables
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct EngineSettings {
    pub rsi_period: usize,
    pub sma_period: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        // The standard RSI(14) / SMA(20) configuration.
        EngineSettings {
            rsi_period: 14,
            sma_period: 20,
        }
    }
}
