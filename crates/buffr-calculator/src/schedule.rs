//! # Repayment Schedule
//!
//! Lays a quote out as dated monthly debit-order deductions.
//!
//! ## Rules
//!
//! - One installment per month of the term, each due one calendar month
//!   after the first. Dates are anchored to the first due date, so a
//!   schedule starting on the 31st returns to the 31st after a short month.
//! - Every installment is the rounded monthly payment except the last,
//!   which takes whatever remains. The installments sum to the total
//!   payable exactly.

use buffr_core::{LoanCalculationError, LoanTerm, Money, Quantity};
use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::quote::{calculate_monthly_payment, LoanDetails};
use crate::Result;

/// One scheduled deduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installment {
    /// 1-based position in the schedule.
    pub number: u32,
    /// Date the deduction is taken.
    pub due_date: NaiveDate,
    /// Amount deducted.
    pub amount: Money,
    /// Outstanding balance after this deduction.
    pub remaining_balance: Money,
}

/// All deductions for one loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepaymentSchedule {
    /// Deductions in due-date order.
    pub installments: Vec<Installment>,
    /// Sum of all installments; equals the quote's total payable.
    pub total: Money,
}

impl RepaymentSchedule {
    /// Due date of the final installment.
    pub fn final_due_date(&self) -> Option<NaiveDate> {
        self.installments.last().map(|i| i.due_date)
    }
}

/// Build the schedule for `details`, with the first deduction on `first_due_date`.
pub fn repayment_schedule(
    details: &LoanDetails,
    first_due_date: NaiveDate,
) -> Result<RepaymentSchedule> {
    let term = LoanTerm::new(details.loan_term_months)?;
    let regular = calculate_monthly_payment(details.total_payable, term.months())?;
    let overflow = LoanCalculationError::OutOfRange(Quantity::TotalPayable);

    let mut remaining = details.total_payable;
    let mut installments = Vec::with_capacity(term.months() as usize);
    for number in 1..=term.months() {
        let due_date = first_due_date
            .checked_add_months(Months::new(number - 1))
            .ok_or(LoanCalculationError::OutOfRange(Quantity::LoanTerm))?;
        let amount = if number == term.months() {
            remaining
        } else {
            regular.min(remaining)
        };
        remaining = remaining.checked_sub(amount).ok_or(overflow)?;
        installments.push(Installment {
            number,
            due_date,
            amount,
            remaining_balance: remaining,
        });
    }

    tracing::debug!(
        installments = installments.len(),
        first_due_date = %first_due_date,
        total = %details.total_payable,
        "repayment schedule built"
    );

    Ok(RepaymentSchedule {
        installments,
        total: details.total_payable,
    })
}

/// `day` in the given month, clamped to the month's last day.
fn clamped_day(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    (28..=day.max(28))
        .rev()
        .find_map(|d| NaiveDate::from_ymd_opt(year, month, d.min(day)))
}

/// First `payday` (day of month, 1–31) at least one calendar month after
/// `disbursed_on`. Paydays past a month's end fall on its last day.
///
/// Returns `None` for a payday outside 1–31.
pub fn first_due_date_for(disbursed_on: NaiveDate, payday: u32) -> Option<NaiveDate> {
    if !(1..=31).contains(&payday) {
        return None;
    }
    let earliest = disbursed_on.checked_add_months(Months::new(1))?;
    let candidate = clamped_day(earliest.year(), earliest.month(), payday)?;
    if candidate >= earliest {
        return Some(candidate);
    }
    let next = earliest.checked_add_months(Months::new(1))?;
    clamped_day(next.year(), next.month(), payday)
}
