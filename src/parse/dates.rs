//! Calendar date and pay-period parsing

use chrono::{Datelike, Local, NaiveDate};

/// Date formats tried in order; first match wins.
///
/// Day-first formats come before ISO because the source data is
/// predominantly DD-MM-YYYY.
const DATE_FORMATS: &[&str] = &[
    "%d-%m-%Y",
    "%d/%m/%Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d %b %Y",
    "%d %B %Y",
];

/// Parse a free-text calendar date.
///
/// Tries DD-MM-YYYY / DD/MM/YYYY, then ISO YYYY-MM-DD / YYYY/MM/DD, then
/// "D Month YYYY" with month names or abbreviations. Returns today's date
/// when nothing matches or the matched date is invalid (e.g. day 32).
pub fn parse_date(raw: &str) -> NaiveDate {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return Local::now().date_naive();
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(cleaned, format) {
            return date;
        }
    }

    Local::now().date_naive()
}

/// Month number from a name or abbreviation (first three letters decide).
fn month_number(name: &str) -> Option<u32> {
    let prefix: String = name
        .chars()
        .take(3)
        .collect::<String>()
        .to_ascii_lowercase();
    let month = match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// Parse a free-text pay period into a `"YYYY-MM"` string.
///
/// Tries `MonthName[-/ ]YYYY`, then `MM-YYYY`, then `YYYY-MM`, in that
/// order. Falls back to the current year-month on total failure.
pub fn parse_pay_period(raw: &str) -> String {
    let cleaned = raw.trim().to_ascii_lowercase();

    if !cleaned.is_empty() {
        // MonthName followed by a four digit year, any of -, /, space between
        let alpha: String = cleaned.chars().take_while(|c| c.is_alphabetic()).collect();
        if let Some(month) = month_number(&alpha) {
            let digits: String = cleaned.chars().filter(|c| c.is_ascii_digit()).collect();
            if digits.len() == 4 {
                return format!("{}-{:02}", digits, month);
            }
        }

        let parts: Vec<&str> = cleaned.split(['-', '/']).map(str::trim).collect();
        if parts.len() == 2 {
            // MM-YYYY
            if let (2, 4) = (parts[0].len(), parts[1].len()) {
                if let (Ok(month), Ok(year)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
                    if (1..=12).contains(&month) {
                        return format!("{}-{:02}", year, month);
                    }
                }
            }
            // YYYY-MM
            if let (4, 2) = (parts[0].len(), parts[1].len()) {
                if let (Ok(year), Ok(month)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
                    if (1..=12).contains(&month) {
                        return format!("{}-{:02}", year, month);
                    }
                }
            }
        }
    }

    let now = Local::now().date_naive();
    format!("{}-{:02}", now.year(), now.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_first_formats() {
        let expected = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        assert_eq!(parse_date("31-01-2026"), expected);
        assert_eq!(parse_date("31/01/2026"), expected);
    }

    #[test]
    fn test_iso_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        assert_eq!(parse_date("2025-12-01"), expected);
        assert_eq!(parse_date("2025/12/01"), expected);
    }

    #[test]
    fn test_month_name_format() {
        let expected = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(parse_date("5 Mar 2026"), expected);
        assert_eq!(parse_date("5 March 2026"), expected);
    }

    #[test]
    fn test_invalid_date_falls_back_to_today() {
        let today = Local::now().date_naive();
        assert_eq!(parse_date("32-01-2026"), today);
        assert_eq!(parse_date("gibberish"), today);
        assert_eq!(parse_date(""), today);
    }

    #[test]
    fn test_pay_period_month_name() {
        assert_eq!(parse_pay_period("Jan-2026"), "2026-01");
        assert_eq!(parse_pay_period("January 2026"), "2026-01");
        assert_eq!(parse_pay_period("sep/2025"), "2025-09");
    }

    #[test]
    fn test_pay_period_numeric() {
        assert_eq!(parse_pay_period("01-2026"), "2026-01");
        assert_eq!(parse_pay_period("2026-01"), "2026-01");
    }

    #[test]
    fn test_pay_period_fallback() {
        let now = Local::now().date_naive();
        let current = format!("{}-{:02}", now.year(), now.month());
        assert_eq!(parse_pay_period(""), current);
        assert_eq!(parse_pay_period("13-2026"), current);
        // Two digit years are not recognized
        assert_eq!(parse_pay_period("Jan-26"), current);
    }
}
