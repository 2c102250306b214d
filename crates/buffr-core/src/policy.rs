//! # Lending Policy
//!
//! Fixed business policy for BuffrLend short-term loans. These values are
//! not configurable per call; changing them is a product decision.

use crate::money::Money;

/// Once-off interest charged on the principal, in percent.
///
/// Applied once over the life of the loan, not per annum and not compounded.
pub const INTEREST_RATE: i64 = 15;

/// NAMFISA regulatory levy on the principal, in percent.
pub const NAMFISA_LEVY_RATE: i64 = 4;

/// Fixed stamp duty per loan.
pub const STAMP_DUTY: Money = Money::from_units(15);

/// Processing fee as a percentage of the principal, before clamping.
pub const PROCESSING_FEE_RATE: i64 = 1;

/// Lower bound for the processing fee.
pub const MIN_PROCESSING_FEE: Money = Money::from_units(20);

/// Upper bound for the processing fee.
pub const MAX_PROCESSING_FEE: Money = Money::from_units(100);

/// Smallest principal BuffrLend will quote.
pub const MIN_LOAN_AMOUNT: Money = Money::from_units(500);

/// Largest principal BuffrLend will quote.
pub const MAX_LOAN_AMOUNT: Money = Money::from_units(10_000);

/// Shortest loan term, in months.
pub const MIN_LOAN_TERM: u32 = 1;

/// Longest loan term, in months.
pub const MAX_LOAN_TERM: u32 = 5;

/// The "1/3 rule": at most a third of the monthly salary may be committed.
pub const AFFORDABILITY_DIVISOR: u32 = 3;

/// Currency symbol used in every formatted amount.
pub const CURRENCY_SYMBOL: &str = "N$";

/// ISO 4217 code for the Namibian dollar.
pub const CURRENCY_CODE: &str = "NAD";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_bounds_are_ordered() {
        assert!(MIN_LOAN_AMOUNT < MAX_LOAN_AMOUNT);
        assert_eq!(MIN_LOAN_AMOUNT.cents(), 50_000);
        assert_eq!(MAX_LOAN_AMOUNT.cents(), 1_000_000);
    }

    #[test]
    fn term_bounds_are_ordered() {
        assert!(MIN_LOAN_TERM >= 1);
        assert!(MIN_LOAN_TERM <= MAX_LOAN_TERM);
    }

    #[test]
    fn processing_fee_bounds_are_ordered() {
        assert!(MIN_PROCESSING_FEE < MAX_PROCESSING_FEE);
    }
}
