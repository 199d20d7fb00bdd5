use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to two decimal places, exact midpoints to the even cent.
fn round_half_even(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

/// Inserts a comma every three digits of an unsigned integer string.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a salary for display, e.g. `75000.0` -> `"$75,000.00"`.
///
/// Rounding works on the exact binary value of `amount`, so `2.675` (stored
/// as 2.67499...) shows as `$2.67` and an exact tie like `60000.125` goes to
/// the even cent.
///
/// Values that cannot be represented as a [`Decimal`] (NaN, infinities,
/// magnitudes beyond ~7.9e28) render as "—".
pub fn format_currency(amount: f64) -> String {
    let Some(decimal) = Decimal::from_f64_retain(amount) else {
        tracing::warn!(amount, "cannot format non-representable amount");
        return "—".to_string();
    };

    let rounded = round_half_even(decimal);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!("{sign}${}.{cents}", group_thousands(whole))
}
