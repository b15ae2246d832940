/// Formats currency amounts for presentation. The symbol is display-only.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64, symbol: &str) -> String;
}

/// Renders whole units with thousands separators, e.g. `$1,611`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WholeUnitFormatter;

impl CurrencyFormatter for WholeUnitFormatter {
    fn format_amount(&self, amount: f64, symbol: &str) -> String {
        let rounded = if amount.is_finite() { amount.round() } else { 0.0 };
        let sign = if rounded < 0.0 { "-" } else { "" };
        let digits = format!("{:.0}", rounded.abs());
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        format!("{sign}{symbol}{grouped}")
    }
}

pub fn format_amount(amount: f64, symbol: &str) -> String {
    WholeUnitFormatter.format_amount(amount, symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_and_rounds() {
        assert_eq!(format_amount(161.051, "$"), "$161");
        assert_eq!(format_amount(1_234_567.5, "€"), "€1,234,568");
        assert_eq!(format_amount(-2500.0, "$"), "-$2,500");
        assert_eq!(format_amount(f64::NAN, "$"), "$0");
    }
}
