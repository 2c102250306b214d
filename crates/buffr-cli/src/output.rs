//! Shared rendering helpers.

use std::io::Write;

use anyhow::{Context, Result};
use buffr_core::LoanCalculationError;
use serde::Serialize;

use crate::EXIT_DOMAIN;

/// Write `value` as pretty JSON followed by a newline.
pub fn write_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    writeln!(out, "{text}")?;
    Ok(())
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: ErrorDetail<'a>,
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
    code: &'a str,
    message: String,
}

/// Report a calculator rejection and return the domain exit code.
///
/// JSON mode writes an error object to `out`; text mode writes the
/// message to stderr.
pub fn report_rejection(
    out: &mut dyn Write,
    json: bool,
    err: &LoanCalculationError,
) -> Result<u8> {
    tracing::debug!(code = err.code(), "input rejected");
    if json {
        write_json(
            out,
            &ErrorBody {
                error: ErrorDetail {
                    code: err.code(),
                    message: err.to_string(),
                },
            },
        )?;
    } else {
        eprintln!("error: {err}");
    }
    Ok(EXIT_DOMAIN)
}
