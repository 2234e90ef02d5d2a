// Display helpers shared between the engine CLI and front-end collaborators.

/// Two-decimal formatting for prices and indicator values in headline output.
pub fn format_price(value: f64) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(120.5), "120.50");
        assert_eq!(format_price(99.999), "100.00");
        assert_eq!(format_price(0.0), "0.00");
    }
}
