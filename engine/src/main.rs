// Engine main entry point
use engine::config::settings::EngineSettings;
use engine::data::market_data::HistoryStore;
use engine::services::advisor_service::AdvisorService;
use engine::services::{LoadCsvRequest, SeriesRequest, SignalRequest};
use shared::utils::format_price;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let (file_path, symbol) = match (args.next(), args.next()) {
        (Some(f), Some(s)) => (f, s.to_uppercase()),
        _ => {
            eprintln!("Usage: engine <history.csv> <SYMBOL>");
            std::process::exit(2);
        }
    };

    info!("Starting Signal Advisor Engine...");

    let settings = EngineSettings::default();
    let history_store = Arc::new(RwLock::new(HistoryStore::new()));
    let advisor = AdvisorService::new(history_store, settings);

    let loaded = advisor
        .load_csv_data(LoadCsvRequest {
            file_path: file_path.clone(),
            symbol: symbol.clone(),
        })
        .await?;
    info!(count = loaded.bars_loaded, "{}", loaded.message);

    let latest = advisor
        .get_signal(SignalRequest {
            symbol: symbol.clone(),
        })
        .await?;
    println!(
        "Latest signal for {}: {}  ({} close {}, RSI {}, SMA {})",
        latest.symbol,
        latest.signal,
        latest.date,
        format_price(latest.close),
        format_price(latest.rsi),
        format_price(latest.sma),
    );

    // Tail of the annotated series for a quick look; full charting is a
    // front-end concern.
    let series = advisor.get_signal_series(SeriesRequest { symbol }).await?;
    let tail_start = series.rows.len().saturating_sub(10);
    for row in &series.rows[tail_start..] {
        println!(
            "{}  close {:>9}  rsi {:>7}  sma {:>9}  {}",
            row.date,
            format_price(row.close),
            format_price(row.rsi),
            format_price(row.sma),
            row.signal,
        );
    }

    Ok(())
}
