// Error handling utilities for consistent error messages and exit codes

use crate::models::{ChannelGroup, LossReason, PipelineStage};
use crate::pipeline::PipelineError;
use crate::utils::fuzzy::find_near_lead_matches;
use std::process;

/// Exit with a user error (exit code 1)
/// User errors are for invalid input, unknown leads, forbidden moves, etc.
pub fn user_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Exit with an internal error (exit code 2)
/// Internal errors are for unreadable or corrupt lead data.
pub fn internal_error(message: &str) -> ! {
    eprintln!("Internal error: {}", message);
    process::exit(2);
}

/// Exit code for an error surfaced by the pipeline controller
pub fn exit_code_for(err: &PipelineError) -> i32 {
    if err.is_user_error() {
        1
    } else {
        2
    }
}

/// Validate a stage argument
pub fn validate_stage(value: &str) -> Result<PipelineStage, String> {
    PipelineStage::from_str(value).ok_or_else(|| {
        let names: Vec<&str> = PipelineStage::ALL.iter().map(|s| s.as_str()).collect();
        format!("Invalid stage: '{}'. Valid stages: {}.", value, names.join(", "))
    })
}

/// Validate a loss reason argument
pub fn validate_loss_reason(value: &str) -> Result<LossReason, String> {
    LossReason::from_str(value).ok_or_else(|| {
        let names: Vec<&str> = LossReason::ALL.iter().map(|r| r.as_str()).collect();
        format!("Invalid loss reason: '{}'. Valid reasons: {}.", value, names.join(", "))
    })
}

/// Validate a channel group argument
pub fn validate_channel_group(value: &str) -> Result<ChannelGroup, String> {
    ChannelGroup::from_str(value).ok_or_else(|| {
        format!("Invalid channel group: '{}'. Valid groups: paid, organic, referral.", value)
    })
}

/// Validate a closing value in UF (non-negative number)
pub fn validate_closing_value(value: &str) -> Result<f64, String> {
    let cleaned = value.trim().replace(',', "");
    cleaned
        .parse::<f64>()
        .map_err(|_| format!("Invalid closing value: '{}'. Closing value must be a number.", value))
        .and_then(|v| {
            if v.is_finite() && v >= 0.0 {
                Ok(v)
            } else {
                Err(format!("Invalid closing value: {}. Closing value must be non-negative.", value))
            }
        })
}

/// Build the "lead not found" message, with suggestions when something is close
pub fn lead_not_found_message(lead_id: &str, leads: &[(String, String)]) -> String {
    let matches = find_near_lead_matches(lead_id, leads, 2);
    if matches.is_empty() {
        return format!("Lead '{}' not found.", lead_id);
    }

    let suggestions: Vec<String> = matches
        .iter()
        .map(|(id, name)| format!("  {} ({})", id, name))
        .collect();
    format!("Lead '{}' not found. Did you mean:\n{}", lead_id, suggestions.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_stage() {
        assert_eq!(validate_stage("won"), Ok(PipelineStage::Won));
        assert_eq!(validate_stage("meeting-scheduled"), Ok(PipelineStage::MeetingScheduled));
        let err = validate_stage("closed").unwrap_err();
        assert!(err.contains("new, in_contact, meeting_scheduled, won, lost"));
    }

    #[test]
    fn test_validate_loss_reason() {
        assert_eq!(validate_loss_reason("financing"), Ok(LossReason::Financing));
        assert!(validate_loss_reason("").is_err());
    }

    #[test]
    fn test_validate_closing_value() {
        assert_eq!(validate_closing_value("4500"), Ok(4500.0));
        assert_eq!(validate_closing_value("4,500.5"), Ok(4500.5));
        assert_eq!(validate_closing_value(" 0 "), Ok(0.0));
        assert!(validate_closing_value("-1").is_err());
        assert!(validate_closing_value("abc").is_err());
        assert!(validate_closing_value("inf").is_err());
    }

    #[test]
    fn test_validate_channel_group() {
        assert_eq!(validate_channel_group("organic"), Ok(ChannelGroup::Organic));
        assert!(validate_channel_group("tv").is_err());
    }

    #[test]
    fn test_lead_not_found_message() {
        let leads = vec![("12".to_string(), "Camila Soto".to_string())];
        assert_eq!(lead_not_found_message("zzzzzzz", &leads), "Lead 'zzzzzzz' not found.");
        assert!(lead_not_found_message("13", &leads).contains("Did you mean:\n  12 (Camila Soto)"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code_for(&PipelineError::UnknownLead("1".to_string())), 1);
        assert_eq!(exit_code_for(&PipelineError::InvalidFitScore(9)), 2);
    }
}
