use crate::models::PipelineStage;
use thiserror::Error;

/// Errors raised by the pipeline controller and model validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error("Lead '{0}' not found")]
    UnknownLead(String),

    #[error("Lead '{lead_id}' has unknown status '{status}'")]
    UnknownStatus { lead_id: String, status: String },

    #[error("Lead '{lead_id}' is {from} (terminal) and cannot move to {to}")]
    TerminalStage {
        lead_id: String,
        from: PipelineStage,
        to: PipelineStage,
    },

    #[error("A confirmation for lead '{lead_id}' ({target}) is still pending")]
    ConfirmationPending {
        lead_id: String,
        target: PipelineStage,
    },

    #[error("No confirmation is pending")]
    NoPendingConfirmation,

    #[error("Pending confirmation is for {expected}, but {provided} details were given")]
    DetailsMismatch {
        expected: PipelineStage,
        provided: PipelineStage,
    },

    #[error("Invalid closing value: {0}. Closing value must be a non-negative number.")]
    InvalidClosingValue(f64),

    #[error("Invalid fit score: {0}. Fit score must be between 1 and 5.")]
    InvalidFitScore(u8),
}

impl PipelineError {
    /// Errors caused by the caller's request, as opposed to bad source data
    pub fn is_user_error(&self) -> bool {
        !matches!(
            self,
            PipelineError::UnknownStatus { .. } | PipelineError::InvalidFitScore(_)
        )
    }
}
