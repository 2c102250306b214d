//! # Loan Quote
//!
//! Combines interest and fees into the full cost of a loan and splits it
//! into equal monthly installments.
//!
//! ```text
//! total_payable   = loan_amount + interest + total_fees
//! monthly_payment = total_payable / loan_term_months
//! ```
//!
//! There is no amortization and no compounding. The even split rounds
//! half-up to the cent; [`crate::schedule`] assigns any remainder to the
//! final installment.

use buffr_core::policy::INTEREST_RATE;
use buffr_core::{LoanCalculationError, LoanTerm, Money, Quantity};
use serde::{Deserialize, Serialize};

use crate::fees::{calculate_fees, calculate_interest, FeeBreakdown};
use crate::validation::{validate_money_amount, validate_term_months};
use crate::Result;

/// The computed quote for one (amount, term) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanDetails {
    /// Principal requested.
    pub loan_amount: Money,
    /// Term in months.
    pub loan_term_months: u32,
    /// Once-off interest rate, in percent.
    pub buffr_fee_rate: i64,
    /// Interest charged on the principal.
    pub buffr_fee_amount: Money,
    /// Processing fee, levy and stamp duty combined.
    pub user_total_fees: Money,
    /// Everything the borrower repays.
    pub total_payable: Money,
    /// Even monthly share of `total_payable`.
    pub monthly_payment: Money,
    /// Itemised fees behind `user_total_fees`.
    pub fees: FeeBreakdown,
}

impl LoanDetails {
    /// Labelled, formatted lines for a plain-text breakdown.
    pub fn summary_lines(&self) -> Vec<(&'static str, String)> {
        let term = match LoanTerm::new(self.loan_term_months) {
            Ok(term) => term.to_string(),
            Err(_) => format!("{} months", self.loan_term_months),
        };
        vec![
            ("Loan amount", self.loan_amount.to_string()),
            ("Term", term),
            ("Interest", self.buffr_fee_amount.to_string()),
            ("Processing fee", self.fees.processing_fee.to_string()),
            ("NAMFISA levy", self.fees.namfisa_levy.to_string()),
            ("Stamp duty", self.fees.stamp_duty.to_string()),
            ("Total fees", self.user_total_fees.to_string()),
            ("Total payable", self.total_payable.to_string()),
            ("Monthly payment", self.monthly_payment.to_string()),
        ]
    }
}

/// Split `total_payable` evenly over `term_months`, rounded half-up to the cent.
pub fn calculate_monthly_payment(total_payable: Money, term_months: u32) -> Result<Money> {
    if total_payable.is_negative() {
        return Err(LoanCalculationError::NegativeValue(Quantity::TotalPayable));
    }
    total_payable
        .div_half_up(term_months)
        .ok_or(LoanCalculationError::NonPositiveValue(Quantity::TermMonths))
}

/// Quote an already-validated term. The amount range is not re-checked.
pub fn quote(loan_amount: Money, term: LoanTerm) -> Result<LoanDetails> {
    let interest = calculate_interest(loan_amount)?;
    let fees = calculate_fees(loan_amount)?;
    let total_payable = loan_amount
        .checked_add(interest)
        .and_then(|sum| sum.checked_add(fees.total_fees))
        .ok_or(LoanCalculationError::OutOfRange(Quantity::TotalPayable))?;
    let monthly_payment = calculate_monthly_payment(total_payable, term.months())?;

    tracing::debug!(
        loan_amount = %loan_amount,
        term_months = term.months(),
        total_payable = %total_payable,
        monthly_payment = %monthly_payment,
        "loan quote computed"
    );

    Ok(LoanDetails {
        loan_amount,
        loan_term_months: term.months(),
        buffr_fee_rate: INTEREST_RATE,
        buffr_fee_amount: interest,
        user_total_fees: fees.total_fees,
        total_payable,
        monthly_payment,
        fees,
    })
}

/// Validate the amount and term, then quote.
///
/// The amount is checked first; its error wins when both are invalid.
pub fn calculate_loan_details(loan_amount: Money, term_months: u32) -> Result<LoanDetails> {
    let loan_amount = validate_money_amount(loan_amount).into_result()?;
    let term = validate_term_months(term_months).into_result()?;
    quote(loan_amount, term)
}
