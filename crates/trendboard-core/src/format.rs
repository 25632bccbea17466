//! Number formatting for labels and tooltips

/// Group thousands with commas: `1234567` -> `"1,234,567"`
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a chart value: integral values get thousands separators,
/// fractional ones keep up to one decimal
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return "NaN".to_string();
    }
    if value.fract() == 0.0 && value.abs() < u64::MAX as f64 {
        let grouped = format_count(value.abs() as u64);
        if value < 0.0 {
            format!("-{}", grouped)
        } else {
            grouped
        }
    } else {
        format!("{:.1}", value)
    }
}

/// Share of `value` in `total`, rounded to one decimal
pub fn percentage(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    (value / total * 1000.0).round() / 10.0
}

/// Per-value percentages of a series, each rounded to one decimal
pub fn percentages(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    values.iter().map(|v| percentage(*v, total)).collect()
}

/// Compact notation for stat cards (K, M, B)
pub fn format_compact(n: u64) -> String {
    if n >= 1_000_000_000 {
        format!("{:.1}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count_groups() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(30.0), "30");
        assert_eq!(format_value(12_500.0), "12,500");
        assert_eq!(format_value(42.5), "42.5");
        assert_eq!(format_value(-150.0), "-150");
        assert_eq!(format_value(f64::NAN), "NaN");
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let cases: [&[f64]; 4] = [
            &[30.0, 70.0],
            &[1.0, 1.0, 1.0],
            &[17.0, 3.0, 5.0, 11.0, 64.0],
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0],
        ];
        for values in cases {
            let sum: f64 = percentages(values).iter().sum();
            // each entry may be off by at most 0.05
            let tolerance = 0.05 * values.len() as f64 + 1e-9;
            assert!((sum - 100.0).abs() <= tolerance, "sum {} for {:?}", sum, values);
        }
    }

    #[test]
    fn test_percentage_of_empty_total() {
        assert_eq!(percentage(5.0, 0.0), 0.0);
        assert!(percentages(&[]).is_empty());
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(950), "950");
        assert_eq!(format_compact(1_500), "1.5K");
        assert_eq!(format_compact(2_300_000), "2.3M");
    }
}
