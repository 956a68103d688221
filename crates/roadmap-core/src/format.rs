//! Number formatting for the stat cards

use crate::domain::MetricKey;

/// `8500` -> `"8,500"`
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `320000` -> `"$320.0k"`, zero -> `"$0.00"`
pub fn format_currency(value: u64) -> String {
    if value == 0 {
        return "$0.00".to_string();
    }
    format!("${:.1}k", value as f64 / 1000.0)
}

pub fn format_metric(key: MetricKey, value: u64) -> String {
    if key.is_balance() {
        format_currency(value)
    } else {
        format_count(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(950), "950");
        assert_eq!(format_count(8500), "8,500");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "$0.00");
        assert_eq!(format_currency(320000), "$320.0k");
        assert_eq!(format_currency(1500), "$1.5k");
    }

    #[test]
    fn test_format_metric_picks_currency_for_tvl() {
        assert_eq!(format_metric(MetricKey::Tvl, 2000), "$2.0k");
        assert_eq!(format_metric(MetricKey::Visits, 2000), "2,000");
    }
}
