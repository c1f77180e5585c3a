//! Money and percentage formatting for terminal output.
//!
//! Baht amounts get two decimals and thousands separators, returns are
//! signed percentages, allocation weights unsigned ones.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use investfolio_core::fx::Currency;

/// "฿1,234.56"; negative amounts carry a leading minus.
pub fn format_thb(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{}฿{}", sign, group_thousands(rounded.abs()))
}

/// An amount in its own currency, e.g. "฿135.50" or "$110.00".
pub fn format_amount(amount: Decimal, currency: Currency) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let symbol = match currency {
        Currency::Thb => "฿",
        Currency::Usd => "$",
    };
    format!("{}{}{}", sign, symbol, group_thousands(rounded.abs()))
}

/// A return ratio as a signed percentage: 0.0278 -> "+2.78%".
/// Zero stays unsigned.
pub fn format_percent(ratio: Decimal) -> String {
    let pct = (ratio * dec!(100)).round_dp(2);
    if pct > Decimal::ZERO {
        format!("+{:.2}%", pct)
    } else {
        format!("{:.2}%", pct)
    }
}

/// An allocation weight (already 0-100) without a sign: "33.33%".
pub fn format_allocation(pct: Decimal) -> String {
    format!("{:.2}%", pct.round_dp(2))
}

/// A share count without trailing zeros: 100.000 -> "100".
pub fn format_quantity(quantity: Decimal) -> String {
    quantity.normalize().to_string()
}

/// Renders a non-negative amount with two decimals and `,` separators.
fn group_thousands(amount: Decimal) -> String {
    let text = format!("{:.2}", amount);
    let (int_part, frac_part) = text.split_once('.').expect("two-decimal format");

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}.{}", grouped, frac_part)
}
