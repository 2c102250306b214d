//! # Input Validation
//!
//! Lenient validators for borrower input. They never fail: each returns a
//! result object carrying a validity flag, the error (if any) and a
//! corrected value the form can offer instead ("did you mean N$500?").
//!
//! The `f64` entry points accept raw numeric input from a UI or HTTP body.
//! The typed entry points ([`validate_money_amount`], [`validate_term_months`])
//! are what [`crate::calculate_loan_details`] runs internally.

use buffr_core::policy::{MAX_LOAN_AMOUNT, MAX_LOAN_TERM, MIN_LOAN_AMOUNT, MIN_LOAN_TERM};
use buffr_core::{AmountViolation, LoanCalculationError, LoanTerm, Money, Quantity, TermViolation};
use serde::{Serialize, Serializer};

use crate::Result;

/// Serialize an optional error as its display message or `null`.
fn serialize_error<S: Serializer>(
    error: &Option<LoanCalculationError>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match error {
        Some(err) => serializer.serialize_some(&err.to_string()),
        None => serializer.serialize_none(),
    }
}

/// Outcome of validating a loan amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AmountValidation {
    /// True when the amount can be quoted as-is.
    pub is_valid: bool,
    /// Why the amount was rejected.
    #[serde(serialize_with = "serialize_error")]
    pub error: Option<LoanCalculationError>,
    /// The input when valid, otherwise the nearest quotable amount.
    pub corrected_amount: Money,
}

impl AmountValidation {
    fn valid(amount: Money) -> Self {
        Self {
            is_valid: true,
            error: None,
            corrected_amount: amount,
        }
    }

    fn invalid(error: LoanCalculationError, corrected_amount: Money) -> Self {
        Self {
            is_valid: false,
            error: Some(error),
            corrected_amount,
        }
    }

    /// The user-facing message, if invalid.
    pub fn message(&self) -> Option<String> {
        self.error.map(|err| err.to_string())
    }

    /// Collapse into the strict policy: the amount, or the error.
    pub fn into_result(self) -> Result<Money> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.corrected_amount),
        }
    }
}

/// Outcome of validating a loan term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TermValidation {
    /// True when the term can be quoted as-is.
    pub is_valid: bool,
    /// Why the term was rejected.
    #[serde(serialize_with = "serialize_error")]
    pub error: Option<LoanCalculationError>,
    /// The input when valid, otherwise a suggested replacement.
    pub corrected_term: u32,
}

impl TermValidation {
    fn valid(months: u32) -> Self {
        Self {
            is_valid: true,
            error: None,
            corrected_term: months,
        }
    }

    fn invalid(error: LoanCalculationError, corrected_term: u32) -> Self {
        Self {
            is_valid: false,
            error: Some(error),
            corrected_term,
        }
    }

    /// The user-facing message, if invalid.
    pub fn message(&self) -> Option<String> {
        self.error.map(|err| err.to_string())
    }

    /// Collapse into the strict policy: the validated term, or the error.
    pub fn into_result(self) -> Result<LoanTerm> {
        match self.error {
            Some(err) => Err(err),
            None => LoanTerm::new(self.corrected_term),
        }
    }
}

/// Validate a typed amount against the quotable range.
pub fn validate_money_amount(amount: Money) -> AmountValidation {
    if amount < MIN_LOAN_AMOUNT {
        return AmountValidation::invalid(AmountViolation::BelowMinimum.into(), MIN_LOAN_AMOUNT);
    }
    if amount > MAX_LOAN_AMOUNT {
        return AmountValidation::invalid(AmountViolation::AboveMaximum.into(), MAX_LOAN_AMOUNT);
    }
    AmountValidation::valid(amount)
}

/// Validate a raw numeric amount.
///
/// The range check uses the raw value, so 499.999 is below the minimum.
/// An in-range amount is then rounded to the cent.
pub fn validate_loan_amount(amount: f64) -> AmountValidation {
    if !amount.is_finite() {
        return AmountValidation::invalid(
            LoanCalculationError::NonFiniteValue(Quantity::LoanAmount),
            MIN_LOAN_AMOUNT,
        );
    }
    if amount < MIN_LOAN_AMOUNT.to_f64() {
        return AmountValidation::invalid(AmountViolation::BelowMinimum.into(), MIN_LOAN_AMOUNT);
    }
    if amount > MAX_LOAN_AMOUNT.to_f64() {
        return AmountValidation::invalid(AmountViolation::AboveMaximum.into(), MAX_LOAN_AMOUNT);
    }
    match Money::from_f64(amount, Quantity::LoanAmount) {
        Ok(money) => AmountValidation::valid(money),
        Err(err) => AmountValidation::invalid(err, MIN_LOAN_AMOUNT),
    }
}

/// Validate a typed month count against the policy range.
pub fn validate_term_months(months: u32) -> TermValidation {
    match LoanTerm::new(months) {
        Ok(term) => TermValidation::valid(term.months()),
        Err(err @ LoanCalculationError::InvalidTerm(TermViolation::AboveMaximum)) => {
            TermValidation::invalid(err, MAX_LOAN_TERM)
        }
        Err(err) => TermValidation::invalid(err, MIN_LOAN_TERM),
    }
}

/// Validate a raw numeric term.
///
/// A fractional term is corrected by rounding half-up (3.5 becomes 4);
/// the suggestion is not itself range-checked. It is unsigned, so a
/// negative fractional term such as -3.5 suggests 0.
pub fn validate_loan_term(term: f64) -> TermValidation {
    if !term.is_finite() {
        return TermValidation::invalid(
            LoanCalculationError::NonFiniteValue(Quantity::LoanTerm),
            MIN_LOAN_TERM,
        );
    }
    if term.fract() != 0.0 {
        // Saturating cast: negative suggestions become 0.
        let rounded = (term + 0.5).floor() as u32;
        return TermValidation::invalid(TermViolation::NotWholeNumber.into(), rounded);
    }
    if term < f64::from(MIN_LOAN_TERM) {
        return TermValidation::invalid(TermViolation::BelowMinimum.into(), MIN_LOAN_TERM);
    }
    if term > f64::from(MAX_LOAN_TERM) {
        return TermValidation::invalid(TermViolation::AboveMaximum.into(), MAX_LOAN_TERM);
    }
    TermValidation::valid(term as u32)
}
