//! # Currency Formatting

use buffr_core::money::group_thousands;
use buffr_core::policy::CURRENCY_SYMBOL;
use buffr_core::{LoanCalculationError, Money, Quantity};

/// Format a raw amount as `N$12,345.67`.
///
/// Never fails: NaN and infinities render as `N$0`. Values too large for
/// cents are rounded to whole units.
pub fn format_currency(amount: f64) -> String {
    match Money::from_f64(amount, Quantity::LoanAmount) {
        Ok(money) => money.to_string(),
        Err(LoanCalculationError::OutOfRange(_)) => format_whole_units(amount),
        Err(_) => format!("{CURRENCY_SYMBOL}0"),
    }
}

fn format_whole_units(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", amount.abs().round());
    format!("{CURRENCY_SYMBOL}{sign}{}", group_thousands(&digits))
}
