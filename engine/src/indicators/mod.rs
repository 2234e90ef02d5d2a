// Technical indicators module
pub mod rsi;
pub mod sma;

pub use rsi::Rsi;
pub use sma::Sma;

use serde_json::Value;
use shared::models::PricePoint;

// Common trait for all indicators
pub trait IndicatorCalculator: Send + Sync {
    fn name(&self) -> &str;
    fn parameters(&self) -> Value; // Parameters used for this indicator instance
    // One output slot per input point; None while the indicator is still
    // inside its warm-up window.
    fn calculate(&self, data: &[PricePoint]) -> Vec<Option<f64>>;
}
