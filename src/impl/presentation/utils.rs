use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Standard number of decimal places for the given currency
/// (ex. JPY = 0, USD = 2).
fn decimal_places(currency: Currency) -> usize {
    currency.exponent().unwrap_or(0) as usize
}

/// Formats a number with thousands separators and a fixed number of decimal
/// places. Uses the en locale ('.' as decimal mark, i.e. 1,000.00)
/// regardless of the user's locale or currency.
pub(crate) fn format_number(amount: f64, decimal_places: usize) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let factor = 10f64.powi(decimal_places as i32);
    let scaled = (amount.abs() * factor).round() as i64;
    let integer_part = (scaled / factor as i64).to_formatted_string(&Locale::en);
    if decimal_places == 0 {
        return format!("{}{}", sign, integer_part);
    }
    let fractional_part = scaled % factor as i64;
    format!(
        "{}{}.{:0width$}",
        sign,
        integer_part,
        fractional_part,
        width = decimal_places
    )
}

/// Formats a cash amount with the currency's symbol and its standard number
/// of decimal places.
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    format!(
        "{} {}",
        format_number(amount, decimal_places(currency)),
        currency.symbol()
    )
}
