use bigdecimal::BigDecimal;
use crate::domain::LineItem;

/// Sum of `unit price * quantity` over every line.
pub fn compute_total(lines: &[LineItem]) -> BigDecimal {
    lines
        .iter()
        .fold(BigDecimal::from(0), |total, line| total + line.subtotal())
}

/// Two decimal places, for display.
pub fn format_amount(amount: &BigDecimal) -> String {
    amount.round(2).with_scale(2).to_string()
}
