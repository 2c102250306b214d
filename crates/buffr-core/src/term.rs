//! # Loan Term
//!
//! A validated whole number of months within the lending policy range.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LoanCalculationError, TermViolation};
use crate::policy::{MAX_LOAN_TERM, MIN_LOAN_TERM};

/// A loan term in months, guaranteed to lie in
/// [`MIN_LOAN_TERM`]..=[`MAX_LOAN_TERM`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct LoanTerm(u32);

impl LoanTerm {
    /// Validate a month count against the policy range.
    pub fn new(months: u32) -> Result<Self, LoanCalculationError> {
        if months < MIN_LOAN_TERM {
            return Err(TermViolation::BelowMinimum.into());
        }
        if months > MAX_LOAN_TERM {
            return Err(TermViolation::AboveMaximum.into());
        }
        Ok(Self(months))
    }

    /// Number of months.
    pub const fn months(self) -> u32 {
        self.0
    }

    /// Every term the policy allows, shortest first.
    pub fn all() -> impl Iterator<Item = LoanTerm> {
        (MIN_LOAN_TERM..=MAX_LOAN_TERM).map(LoanTerm)
    }
}

impl TryFrom<u32> for LoanTerm {
    type Error = LoanCalculationError;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        Self::new(months)
    }
}

impl From<LoanTerm> for u32 {
    fn from(term: LoanTerm) -> u32 {
        term.0
    }
}

impl fmt::Display for LoanTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 1 {
            write!(f, "1 month")
        } else {
            write!(f, "{} months", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_policy_range() {
        for months in 1..=5 {
            assert_eq!(LoanTerm::new(months).unwrap().months(), months);
        }
    }

    #[test]
    fn rejects_zero_and_six() {
        assert_eq!(
            LoanTerm::new(0),
            Err(LoanCalculationError::InvalidTerm(TermViolation::BelowMinimum))
        );
        assert_eq!(
            LoanTerm::new(6),
            Err(LoanCalculationError::InvalidTerm(TermViolation::AboveMaximum))
        );
    }

    #[test]
    fn all_lists_every_term() {
        let months: Vec<u32> = LoanTerm::all().map(LoanTerm::months).collect();
        assert_eq!(months, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn display_pluralizes() {
        assert_eq!(LoanTerm::new(1).unwrap().to_string(), "1 month");
        assert_eq!(LoanTerm::new(3).unwrap().to_string(), "3 months");
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let term: LoanTerm = serde_json::from_str("3").unwrap();
        assert_eq!(term.months(), 3);
        assert_eq!(serde_json::to_string(&term).unwrap(), "3");
        assert!(serde_json::from_str::<LoanTerm>("9").is_err());
    }
}
