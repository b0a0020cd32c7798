/// Format a dollar amount for display: rounded to whole dollars with
/// thousands separators, e.g. `$12,500`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$-".to_string();
    }
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_and_drops_cents() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(950.0), "$950");
        assert_eq!(format_currency(1500.0), "$1,500");
        assert_eq!(format_currency(1234567.0), "$1,234,567");
        assert_eq!(format_currency(999.5), "$1,000");
        assert_eq!(format_currency(-1500.4), "-$1,500");
    }

    #[test]
    fn non_finite_is_placeholder() {
        assert_eq!(format_currency(f64::NAN), "$-");
    }
}
