//! # Interest and Fees
//!
//! Charges derived from the loan principal:
//!
//! - **Interest**: once-off [`INTEREST_RATE`] percent of the principal.
//! - **Processing fee**: [`PROCESSING_FEE_RATE`] percent, clamped to
//!   [`MIN_PROCESSING_FEE`]..=[`MAX_PROCESSING_FEE`].
//! - **NAMFISA levy**: [`NAMFISA_LEVY_RATE`] percent.
//! - **Stamp duty**: fixed [`STAMP_DUTY`].

use buffr_core::policy::{
    INTEREST_RATE, MAX_PROCESSING_FEE, MIN_PROCESSING_FEE, NAMFISA_LEVY_RATE,
    PROCESSING_FEE_RATE, STAMP_DUTY,
};
use buffr_core::{LoanCalculationError, Money, Quantity};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Itemised fees for one principal.
///
/// `total_fees` is always the sum of the other three fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    /// Clamped percentage processing fee.
    pub processing_fee: Money,
    /// Regulatory levy.
    pub namfisa_levy: Money,
    /// Fixed stamp duty.
    pub stamp_duty: Money,
    /// Sum of the three fees.
    pub total_fees: Money,
}

fn ensure_non_negative(loan_amount: Money) -> Result<()> {
    if loan_amount.is_negative() {
        return Err(LoanCalculationError::NegativeValue(Quantity::LoanAmount));
    }
    Ok(())
}

/// Once-off interest on `loan_amount`. Zero principal yields zero.
pub fn calculate_interest(loan_amount: Money) -> Result<Money> {
    ensure_non_negative(loan_amount)?;
    Ok(loan_amount.percent(INTEREST_RATE))
}

/// Processing fee for a non-negative principal, before any validation.
pub fn processing_fee(loan_amount: Money) -> Money {
    loan_amount
        .percent(PROCESSING_FEE_RATE)
        .clamp(MIN_PROCESSING_FEE, MAX_PROCESSING_FEE)
}

/// Itemised fees for `loan_amount`.
pub fn calculate_fees(loan_amount: Money) -> Result<FeeBreakdown> {
    ensure_non_negative(loan_amount)?;

    let processing_fee = processing_fee(loan_amount);
    let namfisa_levy = loan_amount.percent(NAMFISA_LEVY_RATE);
    let stamp_duty = STAMP_DUTY;
    let total_fees = processing_fee
        .checked_add(namfisa_levy)
        .and_then(|sum| sum.checked_add(stamp_duty))
        .ok_or(LoanCalculationError::OutOfRange(Quantity::LoanAmount))?;

    Ok(FeeBreakdown {
        processing_fee,
        namfisa_levy,
        stamp_duty,
        total_fees,
    })
}
