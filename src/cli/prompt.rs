// Interactive confirmation prompts for guarded transitions

use crate::cli::error::{validate_closing_value, validate_loss_reason};
use crate::cli::output::format_uf;
use crate::models::{ClosingDetails, LossReason};
use crate::pipeline::ConfirmationContext;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Read one trimmed line; `None` on end of input
fn read_answer<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<Option<String>> {
    write!(out, "{}", question)?;
    out.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn optional(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Collect closing data for the pending context.
/// Returns `None` when the user cancels (answer "n", invalid input or end of input).
pub fn prompt_closing<R: BufRead, W: Write>(
    context: &ConfirmationContext,
    input: &mut R,
    out: &mut W,
) -> Result<Option<ClosingDetails>> {
    let details = match context {
        ConfirmationContext::Won { suggested_value_uf, .. } => {
            let question = format!("Closing value (UF) [{}]: ", format_uf(*suggested_value_uf));
            let answer = match read_answer(input, out, &question)? {
                Some(answer) => answer,
                None => return Ok(None),
            };
            let closing_value_uf = if answer.is_empty() {
                *suggested_value_uf
            } else {
                match validate_closing_value(&answer) {
                    Ok(value) => value,
                    Err(msg) => {
                        writeln!(out, "{} Cancelled.", msg)?;
                        return Ok(None);
                    }
                }
            };
            let notes = match read_answer(input, out, "Notes (optional): ")? {
                Some(notes) => optional(notes),
                None => return Ok(None),
            };
            ClosingDetails::Won { closing_value_uf, notes }
        }
        ConfirmationContext::Lost { .. } => {
            for (idx, reason) in LossReason::ALL.iter().enumerate() {
                writeln!(out, "  {}) {:<11} {}", idx + 1, reason.as_str(), reason.label())?;
            }
            let answer = match read_answer(input, out, "Loss reason [1-6 or name]: ")? {
                Some(answer) => answer,
                None => return Ok(None),
            };
            let reason = match parse_reason_choice(&answer) {
                Ok(reason) => reason,
                Err(msg) => {
                    writeln!(out, "{} Cancelled.", msg)?;
                    return Ok(None);
                }
            };
            let notes = match read_answer(input, out, "Additional notes (optional): ")? {
                Some(notes) => optional(notes),
                None => return Ok(None),
            };
            ClosingDetails::Lost { reason, notes }
        }
    };

    let question = match context {
        ConfirmationContext::Won { .. } => "Confirm closing? [y/n] (default: y): ",
        ConfirmationContext::Lost { .. } => "Confirm loss? [y/n] (default: y): ",
    };
    match read_answer(input, out, question)?.as_deref().map(str::to_lowercase).as_deref() {
        Some("y") | Some("yes") | Some("") => Ok(Some(details)),
        Some("n") | Some("no") | None => Ok(None),
        Some(_) => {
            writeln!(out, "Invalid response. Cancelled.")?;
            Ok(None)
        }
    }
}

/// A menu number (1-based) or a reason name
fn parse_reason_choice(answer: &str) -> Result<LossReason, String> {
    if let Ok(n) = answer.parse::<usize>() {
        return LossReason::ALL
            .get(n.wrapping_sub(1))
            .copied()
            .ok_or_else(|| format!("Invalid loss reason: {}.", n));
    }
    validate_loss_reason(answer)
}
