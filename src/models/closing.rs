use crate::models::PipelineStage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Why a lead was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossReason {
    Price,
    Financing,
    Location,
    Competitor,
    Timing,
    Other,
}

impl LossReason {
    pub const ALL: [LossReason; 6] = [
        LossReason::Price,
        LossReason::Financing,
        LossReason::Location,
        LossReason::Competitor,
        LossReason::Timing,
        LossReason::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LossReason::Price => "price",
            LossReason::Financing => "financing",
            LossReason::Location => "location",
            LossReason::Competitor => "competitor",
            LossReason::Timing => "timing",
            LossReason::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "price" => Some(LossReason::Price),
            "financing" => Some(LossReason::Financing),
            "location" => Some(LossReason::Location),
            "competitor" => Some(LossReason::Competitor),
            "timing" => Some(LossReason::Timing),
            "other" => Some(LossReason::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LossReason::Price => "Price out of range",
            LossReason::Financing => "Financing declined",
            LossReason::Location => "Location not convenient",
            LossReason::Competitor => "Chose a competitor",
            LossReason::Timing => "Bad timing",
            LossReason::Other => "Other",
        }
    }
}

/// Data captured when a guarded transition is confirmed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClosingDetails {
    Won {
        closing_value_uf: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },
    Lost {
        reason: LossReason,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },
}

impl ClosingDetails {
    /// Terminal stage these details confirm
    pub fn target(&self) -> PipelineStage {
        match self {
            ClosingDetails::Won { .. } => PipelineStage::Won,
            ClosingDetails::Lost { .. } => PipelineStage::Lost,
        }
    }

    pub fn notes(&self) -> Option<&str> {
        match self {
            ClosingDetails::Won { notes, .. } | ClosingDetails::Lost { notes, .. } => notes.as_deref(),
        }
    }
}

/// Closing log entry: one confirmed guarded transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosingRecord {
    pub lead_id: String,
    pub from: PipelineStage,
    pub to: PipelineStage,
    pub details: ClosingDetails,
    pub confirmed_at: DateTime<Utc>,
}
