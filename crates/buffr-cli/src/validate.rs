//! # Validate Subcommand
//!
//! Runs the lenient validators the way a loan form does: each field gets a
//! verdict and, when invalid, a suggested replacement.

use std::io::Write;

use anyhow::Result;
use buffr_calculator::{validate_loan_amount, validate_loan_term, AmountValidation, TermValidation};
use clap::{ArgGroup, Args};
use serde::Serialize;

use crate::output::write_json;
use crate::{EXIT_DOMAIN, EXIT_OK};

/// Arguments for the `buffr validate` subcommand.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("input").required(true).multiple(true).args(["amount", "term"])))]
pub struct ValidateArgs {
    /// Loan amount to check.
    #[arg(long, allow_negative_numbers = true)]
    pub amount: Option<f64>,

    /// Loan term, in months, to check.
    #[arg(long, allow_negative_numbers = true)]
    pub term: Option<f64>,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ValidateOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<AmountValidation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    term: Option<TermValidation>,
}

impl ValidateOutput {
    fn all_valid(&self) -> bool {
        self.amount.map_or(true, |a| a.is_valid) && self.term.map_or(true, |t| t.is_valid)
    }
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when every given field is valid, 1 otherwise.
pub fn run_validate(args: &ValidateArgs, out: &mut dyn Write) -> Result<u8> {
    let result = ValidateOutput {
        amount: args.amount.map(validate_loan_amount),
        term: args.term.map(validate_loan_term),
    };

    if args.json {
        write_json(out, &result)?;
    } else {
        if let Some(amount) = &result.amount {
            match amount.message() {
                None => writeln!(out, "amount: ok ({})", amount.corrected_amount)?,
                Some(msg) => writeln!(out, "amount: {msg} (try {})", amount.corrected_amount)?,
            }
        }
        if let Some(term) = &result.term {
            match term.message() {
                None => writeln!(out, "term:   ok ({} months)", term.corrected_term)?,
                Some(msg) => writeln!(out, "term:   {msg} (try {})", term.corrected_term)?,
            }
        }
    }

    Ok(if result.all_valid() { EXIT_OK } else { EXIT_DOMAIN })
}
