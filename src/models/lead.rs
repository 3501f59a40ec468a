use crate::models::PipelineStage;
use crate::pipeline::PipelineError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fit score between a lead and its project, 1 (no match) to 5 (excellent match)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FitScore(u8);

impl FitScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(score: u8) -> Result<Self, PipelineError> {
        if (Self::MIN..=Self::MAX).contains(&score) {
            Ok(Self(score))
        } else {
            Err(PipelineError::InvalidFitScore(score))
        }
    }

    pub const fn lowest() -> Self {
        Self(Self::MIN)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "No match",
            2 => "Low match",
            3 => "Moderate match",
            4 => "Very good match",
            _ => "Excellent match",
        }
    }
}

impl TryFrom<u8> for FitScore {
    type Error = PipelineError;

    fn try_from(score: u8) -> Result<Self, Self::Error> {
        FitScore::new(score)
    }
}

impl From<FitScore> for u8 {
    fn from(score: FitScore) -> u8 {
        score.0
    }
}

/// Acquisition channel family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelGroup {
    Paid,
    Organic,
    Referral,
}

impl ChannelGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelGroup::Paid => "paid",
            ChannelGroup::Organic => "organic",
            ChannelGroup::Referral => "referral",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "paid" => Some(ChannelGroup::Paid),
            "organic" => Some(ChannelGroup::Organic),
            "referral" => Some(ChannelGroup::Referral),
            _ => None,
        }
    }
}

/// Status of the external document-collection assistant.
/// Descriptive only; never gates pipeline transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalStatus {
    Inactive,
    Active,
    DocumentsPending,
    DocumentsInReview,
    DocumentsApproved,
    PreEvaluationReady,
}

impl ExternalStatus {
    /// Badge label; inactive renders as nothing
    pub fn label(&self) -> &'static str {
        match self {
            ExternalStatus::Inactive => "",
            ExternalStatus::Active => "Assistant active",
            ExternalStatus::DocumentsPending => "Docs pending",
            ExternalStatus::DocumentsInReview => "Docs in review",
            ExternalStatus::DocumentsApproved => "Docs approved",
            ExternalStatus::PreEvaluationReady => "Pre-eval ready",
        }
    }
}

/// Financial pre-evaluation status. Descriptive only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreEvaluationStatus {
    Pending,
    InProgress,
    Approved,
    Conditional,
    Rejected,
}

impl PreEvaluationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PreEvaluationStatus::Pending => "Pending",
            PreEvaluationStatus::InProgress => "In progress",
            PreEvaluationStatus::Approved => "Approved",
            PreEvaluationStatus::Conditional => "Conditional",
            PreEvaluationStatus::Rejected => "Rejected",
        }
    }
}

/// Lead model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub project_id: String,
    pub project_name: String,
    #[serde(default)]
    pub district: String,
    pub status: PipelineStage,
    pub fit_score: FitScore,
    pub ticket_uf: f64,
    #[serde(default)]
    pub channel: String,
    pub channel_group: ChannelGroup,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    pub external_status: ExternalStatus,
    pub pre_evaluation_status: PreEvaluationStatus,
    #[serde(default)]
    pub documents_complete: u32,
    #[serde(default)]
    pub documents_total: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

impl Lead {
    /// Create a lead as intake does: fresh id, stage `new`
    pub fn new(name: String, project_id: String, project_name: String) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            email: String::new(),
            phone: String::new(),
            project_id,
            project_name,
            district: String::new(),
            status: PipelineStage::New,
            fit_score: FitScore(3),
            ticket_uf: 0.0,
            channel: String::new(),
            channel_group: ChannelGroup::Organic,
            utm_source: None,
            utm_medium: None,
            utm_campaign: None,
            created_at: now,
            last_activity: now,
            external_status: ExternalStatus::Inactive,
            pre_evaluation_status: PreEvaluationStatus::Pending,
            documents_complete: 0,
            documents_total: 0,
            assigned_to: None,
        }
    }

    /// Document completion as "complete/total"
    pub fn documents_progress(&self) -> String {
        format!("{}/{}", self.documents_complete, self.documents_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_score_bounds() {
        assert!(FitScore::new(0).is_err());
        assert_eq!(FitScore::new(1).unwrap().value(), 1);
        assert_eq!(FitScore::new(5).unwrap().label(), "Excellent match");
        assert!(matches!(FitScore::new(6), Err(PipelineError::InvalidFitScore(6))));
    }

    #[test]
    fn test_fit_score_rejected_on_deserialize() {
        assert!(serde_json::from_str::<FitScore>("4").is_ok());
        assert!(serde_json::from_str::<FitScore>("9").is_err());
    }

    #[test]
    fn test_lead_creation() {
        let lead = Lead::new("Ana Rojas".to_string(), "p1".to_string(), "Parque Norte".to_string());
        assert_eq!(lead.status, PipelineStage::New);
        assert!(!lead.id.is_empty());
        assert_eq!(lead.created_at, lead.last_activity);
        assert_eq!(lead.documents_progress(), "0/0");
    }

    #[test]
    fn test_channel_group_conversion() {
        assert_eq!(ChannelGroup::from_str("Paid"), Some(ChannelGroup::Paid));
        assert_eq!(ChannelGroup::Referral.as_str(), "referral");
        assert_eq!(ChannelGroup::from_str("tv"), None);
    }

    #[test]
    fn test_inactive_external_status_has_no_label() {
        assert_eq!(ExternalStatus::Inactive.label(), "");
        assert_eq!(ExternalStatus::DocumentsPending.label(), "Docs pending");
    }
}
