use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    // Fetch produced a history, but nothing in it was usable.
    #[error("No usable closing prices in raw history")]
    NoData,

    // Fewer usable closes than the longest indicator window needs.
    #[error("Insufficient history: {got} usable closes, at least {need} required")]
    InsufficientHistory { got: usize, need: usize },

    // Alignment left zero rows. Subsumed by InsufficientHistory in practice,
    // kept distinct so the classifier can fail on its own terms.
    #[error("Aligned series is empty, no signal to report")]
    EmptySeries,

    #[error("Market data store error: {0}")]
    MarketDataError(String),

    // Opaque pass-through for data acquisition failures (file access, CSV
    // structure, field parsing). Never retried here.
    #[error(transparent)]
    AcquisitionError(#[from] anyhow::Error),
}
