// src/dashboard/format.rs
//! Presentation formatting shared by the dashboard shapers.

use chrono::{NaiveDate, NaiveDateTime};

/// `$1.2M`, `$350K` or `$999`.
pub fn currency(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.0}K", value / 1_000.0)
    } else {
        format!("${value:.0}")
    }
}

pub fn percent(value: f64) -> String {
    format!("{value:.0}%")
}

pub fn count(value: f64) -> String {
    format!("{value:.0}")
}

/// Whole dollars with thousands separators: `$1,250,000`.
pub fn grouped_dollars(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 && digits != "0" { "-" } else { "" };
    format!("{sign}${grouped}")
}

pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn clock_time(ts: NaiveDateTime) -> String {
    ts.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_boundaries() {
        assert_eq!(currency(1_000_000.0), "$1.0M");
        assert_eq!(currency(999_999.0), "$1000K");
        assert_eq!(currency(1_000.0), "$1K");
        assert_eq!(currency(999.0), "$999");
        assert_eq!(currency(12_500_000.0), "$12.5M");
        assert_eq!(currency(0.0), "$0");
    }

    #[test]
    fn percent_rounds_to_integer() {
        assert_eq!(percent(94.2), "94%");
        assert_eq!(percent(77.8), "78%");
        assert_eq!(percent(100.0), "100%");
    }

    #[test]
    fn grouped_dollars_inserts_separators() {
        assert_eq!(grouped_dollars(850_000.0), "$850,000");
        assert_eq!(grouped_dollars(1_234_567.4), "$1,234,567");
        assert_eq!(grouped_dollars(999.0), "$999");
        assert_eq!(grouped_dollars(0.0), "$0");
        assert_eq!(grouped_dollars(-1_500.0), "-$1,500");
    }

    #[test]
    fn dates_and_times() {
        let d = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
        assert_eq!(iso_date(d), "2024-02-05");
        assert_eq!(clock_time(d.and_hms_opt(9, 7, 30).unwrap()), "09:07");
    }
}
