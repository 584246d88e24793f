//! Numeric coercion for currency-like cell values

/// Parse a free-text amount into a number.
///
/// Strips currency symbols, thousands separators and whitespace, keeping
/// digits, the decimal point and a leading minus. Empty or unparseable
/// input yields `0.0` — silent fallback is the contract, callers never
/// see an error for a malformed cell.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    if cleaned.is_empty() || cleaned == "-" {
        return 0.0;
    }

    cleaned.parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_amount("50000"), 50000.0);
        assert_eq!(parse_amount("1234.56"), 1234.56);
        assert_eq!(parse_amount("-250"), -250.0);
    }

    #[test]
    fn test_currency_and_separators() {
        assert_eq!(parse_amount("₹1,50,000"), 150000.0);
        assert_eq!(parse_amount("$ 2,500.75"), 2500.75);
        assert_eq!(parse_amount(" 1 800 "), 1800.0);
    }

    #[test]
    fn test_fallback_to_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("-"), 0.0);
        assert_eq!(parse_amount("N/A"), 0.0);
        assert_eq!(parse_amount("Not Provided"), 0.0);
        // Two decimal points cannot parse, falls back rather than erroring
        assert_eq!(parse_amount("1.2.3"), 0.0);
    }
}
