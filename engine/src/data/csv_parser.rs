use anyhow::{anyhow, Result};
use csv::{ReaderBuilder, StringRecord};
use shared::models::DailyBar;
use std::fs::File;
use std::io::BufReader;

// Module for daily-bar export format handling: ISO dates, plain decimals,
// empty or literal "null" cells where the source had no value.
pub mod daily_format {
    use anyhow::{anyhow, Result};
    use chrono::NaiveDate;
    use std::str::FromStr;

    // Parses dates like "2024-01-03"
    pub fn parse_date(s: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| anyhow!("Failed to parse date '{}': {}", s, e))
    }

    // Parses a price cell that must hold a value.
    pub fn parse_price(s: &str) -> Result<f64> {
        f64::from_str(s.trim())
            .map_err(|e| anyhow!("Failed to parse price '{}': {}", s, e))
    }

    // Price/volume cells may be empty or "null" in real exports. That is
    // missing data, not a format error; anything else must parse.
    pub fn parse_optional_price(s: &str) -> Result<Option<f64>> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") {
            return Ok(None);
        }
        parse_price(trimmed).map(Some)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::Datelike;

        #[test]
        fn test_parse_date_valid() {
            let date = parse_date("2024-01-03").unwrap();
            assert_eq!(date.year(), 2024);
            assert_eq!(date.month(), 1);
            assert_eq!(date.day(), 3);
        }

        #[test]
        fn test_parse_date_invalid() {
            assert!(parse_date("03/01/2024").is_err());
            assert!(parse_date("2024-13-01").is_err());
        }

        #[test]
        fn test_parse_price_simple() {
            assert_eq!(parse_price("184.25").unwrap(), 184.25);
            assert_eq!(parse_price(" 0.5 ").unwrap(), 0.5);
        }

        #[test]
        fn test_parse_price_invalid() {
            assert!(parse_price("NOT_A_NUMBER").is_err());
        }

        #[test]
        fn test_parse_optional_price_missing_cells() {
            assert_eq!(parse_optional_price("").unwrap(), None);
            assert_eq!(parse_optional_price("  ").unwrap(), None);
            assert_eq!(parse_optional_price("null").unwrap(), None);
            assert_eq!(parse_optional_price("NULL").unwrap(), None);
        }

        #[test]
        fn test_parse_optional_price_present() {
            assert_eq!(parse_optional_price("184.25").unwrap(), Some(184.25));
        }

        #[test]
        fn test_parse_optional_price_garbage_is_error() {
            assert!(parse_optional_price("n/a").is_err());
        }
    }
}

pub struct DailyBarCsvParser;

impl DailyBarCsvParser {
    // CSV Header: Date,Open,High,Low,Close,Adj Close,Volume
    // Example Row: 2024-01-03,184.22,185.88,183.43,184.25,183.94,58414500
    pub fn load_bars_from_csv(file_path: &str, symbol: &str) -> Result<Vec<DailyBar>> {
        let file = File::open(file_path)
            .map_err(|e| anyhow!("Failed to open CSV file '{}': {}", file_path, e))?;
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(BufReader::new(file));

        let mut bars = Vec::new();
        let headers = rdr.headers()?.clone();

        for (idx, result) in rdr.records().enumerate() {
            let record = result
                .map_err(|e| anyhow!("Error reading CSV record at line {}: {}", idx + 2, e))?;

            let date_str = Self::get_field(&record, &headers, "Date")?
                .ok_or_else(|| anyhow!("Missing 'Date' field in CSV record at line {}", idx + 2))?;
            let date = daily_format::parse_date(date_str)
                .map_err(|e| anyhow!("Error parsing 'Date' at line {}: {}", idx + 2, e))?;

            let open = Self::price_field(&record, &headers, "Open", idx)?;
            let high = Self::price_field(&record, &headers, "High", idx)?;
            let low = Self::price_field(&record, &headers, "Low", idx)?;
            let close = Self::price_field(&record, &headers, "Close", idx)?;
            let volume = Self::price_field(&record, &headers, "Volume", idx)?;

            bars.push(DailyBar {
                symbol: symbol.to_string(),
                date,
                open,
                high,
                low,
                close,
                volume,
            });
        }
        Ok(bars)
    }

    // Optional numeric field: absent column or empty/"null" cell is None,
    // a present but unparseable cell is an error.
    fn price_field(
        record: &StringRecord,
        headers: &StringRecord,
        name: &str,
        idx: usize,
    ) -> Result<Option<f64>> {
        match Self::get_field(record, headers, name)? {
            Some(raw) => daily_format::parse_optional_price(raw)
                .map_err(|e| anyhow!("Error parsing '{}' at line {}: {}", name, idx + 2, e)),
            None => Ok(None),
        }
    }

    // Helper to get field by header name; tolerant of column reordering.
    fn get_field<'a>(
        record: &'a StringRecord,
        headers: &'a StringRecord,
        name: &str,
    ) -> Result<Option<&'a str>> {
        match headers.iter().position(|header| header == name) {
            Some(pos) => Ok(record.get(pos)),
            None => Ok(None),
        }
    }
}
