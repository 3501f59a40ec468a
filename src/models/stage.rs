use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline stage (lead lifecycle state)
///
/// Board order:
/// - New: lead just arrived from intake
/// - InContact: a salesperson reached the lead
/// - MeetingScheduled: showroom/visit/call booked
/// - Won: closing confirmed (terminal)
/// - Lost: loss confirmed (terminal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    New,
    InContact,
    MeetingScheduled,
    Won,
    Lost,
}

impl PipelineStage {
    /// All stages in board (column) order
    pub const ALL: [PipelineStage; 5] = [
        PipelineStage::New,
        PipelineStage::InContact,
        PipelineStage::MeetingScheduled,
        PipelineStage::Won,
        PipelineStage::Lost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::New => "new",
            PipelineStage::InContact => "in_contact",
            PipelineStage::MeetingScheduled => "meeting_scheduled",
            PipelineStage::Won => "won",
            PipelineStage::Lost => "lost",
        }
    }

    /// Parse a wire name. Case-insensitive; `-` is accepted in place of `_`.
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "new" => Some(PipelineStage::New),
            "in_contact" => Some(PipelineStage::InContact),
            "meeting_scheduled" => Some(PipelineStage::MeetingScheduled),
            "won" => Some(PipelineStage::Won),
            "lost" => Some(PipelineStage::Lost),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PipelineStage::New => "New",
            PipelineStage::InContact => "In contact",
            PipelineStage::MeetingScheduled => "Meeting scheduled",
            PipelineStage::Won => "Won",
            PipelineStage::Lost => "Lost",
        }
    }

    /// 1-based column position
    pub fn order(&self) -> usize {
        match self {
            PipelineStage::New => 1,
            PipelineStage::InContact => 2,
            PipelineStage::MeetingScheduled => 3,
            PipelineStage::Won => 4,
            PipelineStage::Lost => 5,
        }
    }

    /// Color name used by the terminal renderer
    pub fn color(&self) -> &'static str {
        match self {
            PipelineStage::New => "blue",
            PipelineStage::InContact => "yellow",
            PipelineStage::MeetingScheduled => "magenta",
            PipelineStage::Won => "green",
            PipelineStage::Lost => "red",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Whether entering this stage needs a confirmation step
    pub fn requires_confirmation(&self) -> bool {
        self.is_terminal()
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
