//! Field coercion rules
//!
//! The feeds never reject a row over a bad date or quantity token; those
//! fields coerce to documented fallbacks instead. Only missing *required*
//! fields drop a row, and that check lives with the mappings.

use chrono::{DateTime, TimeZone, Utc};
use orderdesk_core::{CellValue, DEFAULT_QUANTITY};

/// Coerce a cell to a calendar date, falling back to the given instant
///
/// Accepts `"YYYY-MM-DD"` or `"YYYY/MM/DD"`, split on whichever separator is
/// present. Anything else, including an absent cell or an out-of-range date
/// like month 13, yields the fallback unchanged. No timezone normalization;
/// parsed dates are midnight UTC.
pub fn date_or(cell: &CellValue, fallback: DateTime<Utc>) -> DateTime<Utc> {
    let text = match cell.as_text() {
        Some(t) => t,
        None => return fallback,
    };

    let separator = if text.contains('-') {
        '-'
    } else if text.contains('/') {
        '/'
    } else {
        return fallback;
    };

    let parts: Vec<&str> = text.trim().split(separator).collect();
    if parts.len() != 3 {
        return fallback;
    }

    let year = parts[0].trim().parse::<i32>();
    let month = parts[1].trim().parse::<u32>();
    let day = parts[2].trim().parse::<u32>();

    match (year, month, day) {
        (Ok(y), Ok(m), Ok(d)) => Utc
            .with_ymd_and_hms(y, m, d, 0, 0, 0)
            .single()
            .unwrap_or(fallback),
        _ => fallback,
    }
}

/// Coerce a cell to a quantity of at least 1
///
/// Takes the leading digits of string input (so `"7 pcs"` is 7) or truncates
/// numeric input. Absent, non-numeric, or zero input falls back to 1 and
/// never fails.
pub fn quantity_or_default(cell: &CellValue) -> u32 {
    if let Some(n) = cell.as_number() {
        let n = n.trunc();
        if n >= 1.0 && n <= u32::MAX as f64 {
            return n as u32;
        }
        return DEFAULT_QUANTITY;
    }

    let text = match cell.as_text() {
        Some(t) => t,
        None => return DEFAULT_QUANTITY,
    };

    let digits: String = text
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits
        .parse::<u32>()
        .ok()
        .filter(|q| *q >= 1)
        .unwrap_or(DEFAULT_QUANTITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallback() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 12, 31, 23, 59, 59).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_date_dash_format() {
        let cell = CellValue::string("2024-03-05");
        assert_eq!(date_or(&cell, fallback()), date(2024, 3, 5));
    }

    #[test]
    fn test_date_slash_format() {
        let cell = CellValue::string("2024/03/05");
        assert_eq!(date_or(&cell, fallback()), date(2024, 3, 5));
    }

    #[test]
    fn test_date_fallback_cases() {
        for cell in [
            CellValue::string("not-a-date"),
            CellValue::string(""),
            CellValue::string("2024-03"),
            CellValue::string("2024-03-05-06"),
            CellValue::string("2024-13-05"), // month out of range
            CellValue::Empty,
        ] {
            assert_eq!(date_or(&cell, fallback()), fallback(), "cell: {:?}", cell);
        }
    }

    #[test]
    fn test_quantity_parsing() {
        assert_eq!(quantity_or_default(&CellValue::string("7")), 7);
        assert_eq!(quantity_or_default(&CellValue::string("7 pcs")), 7);
        assert_eq!(quantity_or_default(&CellValue::string(" 12")), 12);
        assert_eq!(quantity_or_default(&CellValue::Number(3.0)), 3);
        assert_eq!(quantity_or_default(&CellValue::Number(3.9)), 3);
    }

    #[test]
    fn test_quantity_fallbacks() {
        assert_eq!(quantity_or_default(&CellValue::string("")), 1);
        assert_eq!(quantity_or_default(&CellValue::string("abc")), 1);
        assert_eq!(quantity_or_default(&CellValue::string("0")), 1);
        assert_eq!(quantity_or_default(&CellValue::Number(0.0)), 1);
        assert_eq!(quantity_or_default(&CellValue::Number(-2.0)), 1);
        assert_eq!(quantity_or_default(&CellValue::Empty), 1);
    }
}
