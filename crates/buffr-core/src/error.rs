//! # Error Hierarchy
//!
//! Structured error types for loan calculation, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! The display text of every variant is the exact message shown to the
//! borrower, so callers can surface `err.to_string()` without mapping.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::policy::{MAX_LOAN_AMOUNT, MAX_LOAN_TERM, MIN_LOAN_AMOUNT, MIN_LOAN_TERM};

/// The input a calculation error refers to.
///
/// Drives the subject of the error message ("Loan amount cannot be negative").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    /// The requested principal.
    LoanAmount,
    /// The requested term as entered by the borrower.
    LoanTerm,
    /// The divisor of an installment split.
    TermMonths,
    /// Principal plus interest plus fees.
    TotalPayable,
    /// Gross monthly salary used for affordability.
    MonthlySalary,
}

impl Quantity {
    /// Sentence-case label used as the subject of error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::LoanAmount => "Loan amount",
            Self::LoanTerm => "Loan term",
            Self::TermMonths => "Term months",
            Self::TotalPayable => "Total payable",
            Self::MonthlySalary => "Monthly salary",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a loan amount falls outside the quotable range.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountViolation {
    /// Below [`MIN_LOAN_AMOUNT`].
    #[error("Loan amount must be at least N${}", MIN_LOAN_AMOUNT.whole_units())]
    BelowMinimum,

    /// Above [`MAX_LOAN_AMOUNT`].
    #[error("Loan amount cannot exceed N${}", MAX_LOAN_AMOUNT.whole_units())]
    AboveMaximum,
}

/// Why a loan term is not acceptable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermViolation {
    /// The term has a fractional part.
    #[error("Loan term must be a whole number")]
    NotWholeNumber,

    /// Below [`MIN_LOAN_TERM`].
    #[error("Loan term must be at least {} month", MIN_LOAN_TERM)]
    BelowMinimum,

    /// Above [`MAX_LOAN_TERM`].
    #[error("Loan term cannot exceed {} months", MAX_LOAN_TERM)]
    AboveMaximum,
}

/// Top-level error type for every loan calculation.
///
/// Strict operations return it through `Result`; lenient validators carry
/// it inside their result object instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanCalculationError {
    /// Loan amount outside the quotable range.
    #[error(transparent)]
    InvalidAmount(#[from] AmountViolation),

    /// Loan term not a whole number or outside the allowed range.
    #[error(transparent)]
    InvalidTerm(#[from] TermViolation),

    /// A quantity that must be zero or more was negative.
    #[error("{0} cannot be negative")]
    NegativeValue(Quantity),

    /// A quantity that must be strictly positive was zero or negative.
    #[error("{0} must be greater than 0")]
    NonPositiveValue(Quantity),

    /// NaN or infinite input at the numeric boundary.
    #[error("{0} must be a valid number")]
    NonFiniteValue(Quantity),

    /// Finite input too large to represent in cents.
    #[error("{0} is outside the representable range")]
    OutOfRange(Quantity),
}

impl LoanCalculationError {
    /// Machine-readable code for API error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::InvalidTerm(_) => "INVALID_TERM",
            Self::NegativeValue(_) => "NEGATIVE_VALUE",
            Self::NonPositiveValue(_) => "NON_POSITIVE_VALUE",
            Self::NonFiniteValue(_) => "NON_FINITE_VALUE",
            Self::OutOfRange(_) => "OUT_OF_RANGE",
        }
    }
}

/// Errors parsing a decimal string into [`crate::Money`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    /// Input was empty or only whitespace.
    #[error("amount must not be empty")]
    Empty,

    /// Input is not a decimal number.
    #[error("invalid amount: \"{0}\" (expected digits with an optional '.' and up to 2 decimals)")]
    Invalid(String),

    /// More than two fractional digits.
    #[error("invalid amount: \"{0}\" (at most 2 decimal places are allowed)")]
    TooPrecise(String),

    /// Value does not fit in 64-bit cents.
    #[error("amount overflows the supported range: \"{0}\"")]
    Overflow(String),
}
