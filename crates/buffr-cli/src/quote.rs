//! # Quote Subcommand
//!
//! Prices a loan and prints the cost breakdown. With `--first-due` (or
//! `--disbursed-on` plus `--payday`) the repayment schedule is printed too.

use std::io::Write;

use anyhow::{bail, Result};
use buffr_calculator::{
    first_due_date_for, quote, repayment_schedule, validate_loan_term, validate_money_amount,
    LoanDetails, RepaymentSchedule,
};
use buffr_core::{LoanCalculationError, Money};
use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;

use crate::output::{report_rejection, write_json};
use crate::EXIT_OK;

/// Arguments for the `buffr quote` subcommand.
#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Principal, e.g. 5000 or N$5,000.00.
    #[arg(long, allow_negative_numbers = true)]
    pub amount: Money,

    /// Term in whole months.
    #[arg(long, allow_negative_numbers = true)]
    pub term: f64,

    /// Date of the first deduction (YYYY-MM-DD).
    #[arg(long, value_name = "DATE", conflicts_with_all = ["disbursed_on", "payday"])]
    pub first_due: Option<NaiveDate>,

    /// Disbursement date (YYYY-MM-DD); used with --payday.
    #[arg(long, value_name = "DATE", requires = "payday")]
    pub disbursed_on: Option<NaiveDate>,

    /// Borrower's payday, day of month 1-31; used with --disbursed-on.
    #[arg(long, value_name = "DAY", requires = "disbursed_on",
          value_parser = clap::value_parser!(u32).range(1..=31))]
    pub payday: Option<u32>,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct QuoteOutput<'a> {
    #[serde(flatten)]
    details: &'a LoanDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    schedule: Option<&'a RepaymentSchedule>,
}

/// Execute the quote subcommand.
///
/// Returns exit code: 0 on success, 1 when the amount or term is rejected.
pub fn run_quote(args: &QuoteArgs, out: &mut dyn Write) -> Result<u8> {
    let details = match price(args.amount, args.term) {
        Ok(details) => details,
        Err(err) => return report_rejection(out, args.json, &err),
    };

    let first_due = match (args.first_due, args.disbursed_on, args.payday) {
        (Some(date), _, _) => Some(date),
        (None, Some(disbursed_on), Some(payday)) => match first_due_date_for(disbursed_on, payday) {
            Some(date) => Some(date),
            None => bail!("no payday {payday} after {disbursed_on}"),
        },
        _ => None,
    };
    let schedule = match first_due.map(|date| repayment_schedule(&details, date)).transpose() {
        Ok(schedule) => schedule,
        Err(err) => return report_rejection(out, args.json, &err),
    };

    if args.json {
        write_json(
            out,
            &QuoteOutput {
                details: &details,
                schedule: schedule.as_ref(),
            },
        )?;
    } else {
        write_table(out, &details, schedule.as_ref())?;
    }
    Ok(EXIT_OK)
}

fn price(amount: Money, term: f64) -> Result<LoanDetails, LoanCalculationError> {
    let amount = validate_money_amount(amount).into_result()?;
    let term = validate_loan_term(term).into_result()?;
    quote(amount, term)
}

fn write_table(
    out: &mut dyn Write,
    details: &LoanDetails,
    schedule: Option<&RepaymentSchedule>,
) -> Result<()> {
    for (label, value) in details.summary_lines() {
        writeln!(out, "{label:<16} {value:>14}")?;
    }
    if let Some(schedule) = schedule {
        writeln!(out)?;
        writeln!(out, "{:>3}  {:<10}  {:>12}  {:>12}", "#", "Due", "Amount", "Balance")?;
        for i in &schedule.installments {
            writeln!(
                out,
                "{:>3}  {:<10}  {:>12}  {:>12}",
                i.number,
                i.due_date,
                i.amount.to_string(),
                i.remaining_balance.to_string()
            )?;
        }
    }
    Ok(())
}
