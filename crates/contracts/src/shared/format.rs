/// Display formatting for dates, money and percentages.
///
/// Values are stored raw (ISO strings, plain numbers) and only formatted here.
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format an ISO date or datetime as DD/MM/YYYY.
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024".
/// Unparseable input is returned unchanged.
pub fn format_date(value: &str) -> String {
    parse_date(value)
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Format an ISO datetime as DD/MM/YYYY HH:MM.
pub fn format_datetime(value: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format("%d/%m/%Y %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value.split('.').next().unwrap_or(value), "%Y-%m-%dT%H:%M:%S") {
        return dt.format("%d/%m/%Y %H:%M").to_string();
    }
    format_date(value)
}

/// Parse the date part of an ISO date/datetime string.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split('T').next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// The `YYYY-MM-DD` part of an ISO string, as an `<input type="date">` expects.
pub fn date_input_value(value: &str) -> String {
    parse_date(value)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Money with two decimals and comma thousands separators: 12500 -> "12,500.00".
pub fn format_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::new();
    for (i, ch) in whole.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let whole: String = grouped.chars().rev().collect();
    format!("{}{}.{:02}", if negative { "-" } else { "" }, whole, cents % 100)
}

/// Percentage without trailing zeros: 80.0 -> "80%", 66.5 -> "66.5%".
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number(value))
}

/// Plain number without a trailing ".0".
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let s = format!("{:.2}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31/12/2024 23:59");
        assert_eq!(format_datetime("2024-03-15T14:02:26.123"), "15/03/2024 14:02");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(date_input_value("invalid"), "");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(12500.0), "12,500.00");
        assert_eq!(format_money(300.5), "300.50");
        assert_eq!(format_money(-1234567.891), "-1,234,567.89");
        assert_eq!(format_money(0.0), "0.00");
    }

    #[test]
    fn test_format_percent_and_number() {
        assert_eq!(format_percent(80.0), "80%");
        assert_eq!(format_percent(66.5), "66.5%");
        assert_eq!(format_number(12.25), "12.25");
    }
}
