use crate::models::{ClosingDetails, ClosingRecord, Lead, PipelineStage};
use crate::pipeline::board::{group_by_stage, Board};
use crate::pipeline::PipelineError;
use serde::Serialize;

/// A lead proposed to move to a terminal stage, awaiting the user's decision
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum ConfirmationContext {
    /// Confirm closing; prefilled with the lead's current ticket amount
    Won {
        lead_id: String,
        suggested_value_uf: f64,
    },
    /// Confirm loss; a loss reason must be chosen
    Lost { lead_id: String },
}

impl ConfirmationContext {
    pub fn lead_id(&self) -> &str {
        match self {
            ConfirmationContext::Won { lead_id, .. } | ConfirmationContext::Lost { lead_id } => lead_id,
        }
    }

    pub fn target(&self) -> PipelineStage {
        match self {
            ConfirmationContext::Won { .. } => PipelineStage::Won,
            ConfirmationContext::Lost { .. } => PipelineStage::Lost,
        }
    }
}

/// Result of a move request
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Source and destination are the same stage
    Unchanged,
    /// Status replaced immediately
    Applied {
        lead_id: String,
        from: PipelineStage,
        to: PipelineStage,
    },
    /// Nothing mutated yet; resolve with confirm or cancel
    PendingConfirmation(ConfirmationContext),
}

/// Owned pipeline state: the lead collection, the open confirmation (if any)
/// and the log of confirmed closings.
#[derive(Debug, Clone, Default)]
pub struct PipelineState {
    leads: Vec<Lead>,
    pending: Option<ConfirmationContext>,
    closings: Vec<ClosingRecord>,
}

impl PipelineState {
    pub fn new(leads: Vec<Lead>) -> Self {
        Self {
            leads,
            pending: None,
            closings: Vec::new(),
        }
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn get(&self, lead_id: &str) -> Option<&Lead> {
        self.leads.iter().find(|l| l.id == lead_id)
    }

    pub fn pending(&self) -> Option<&ConfirmationContext> {
        self.pending.as_ref()
    }

    pub fn is_awaiting_confirmation(&self) -> bool {
        self.pending.is_some()
    }

    pub fn closings(&self) -> &[ClosingRecord] {
        &self.closings
    }

    /// Board view, recomputed from the current collection
    pub fn board(&self) -> Board {
        group_by_stage(&self.leads)
    }

    fn lead_mut(&mut self, lead_id: &str) -> Option<&mut Lead> {
        self.leads.iter_mut().find(|l| l.id == lead_id)
    }
}

/// Request moving a lead to `destination`.
///
/// Open stages are applied immediately. `won`/`lost` only open a confirmation
/// context; the status stays untouched until [`confirm_transition`].
pub fn request_transition(
    state: &mut PipelineState,
    lead_id: &str,
    destination: PipelineStage,
) -> Result<Transition, PipelineError> {
    if let Some(pending) = &state.pending {
        log::warn!(
            "move of lead {} rejected: confirmation for lead {} is pending",
            lead_id,
            pending.lead_id()
        );
        return Err(PipelineError::ConfirmationPending {
            lead_id: pending.lead_id().to_string(),
            target: pending.target(),
        });
    }

    let (from, ticket_uf) = match state.get(lead_id) {
        Some(lead) => (lead.status, lead.ticket_uf),
        None => {
            log::warn!("move rejected: lead {} not found", lead_id);
            return Err(PipelineError::UnknownLead(lead_id.to_string()));
        }
    };

    if from == destination {
        return Ok(Transition::Unchanged);
    }
    if from.is_terminal() {
        log::warn!("move rejected: lead {} is already {}", lead_id, from);
        return Err(PipelineError::TerminalStage {
            lead_id: lead_id.to_string(),
            from,
            to: destination,
        });
    }

    let context = match destination {
        PipelineStage::New | PipelineStage::InContact | PipelineStage::MeetingScheduled => {
            if let Some(lead) = state.lead_mut(lead_id) {
                lead.status = destination;
            }
            log::debug!("lead {} moved {} -> {}", lead_id, from, destination);
            return Ok(Transition::Applied {
                lead_id: lead_id.to_string(),
                from,
                to: destination,
            });
        }
        PipelineStage::Won => ConfirmationContext::Won {
            lead_id: lead_id.to_string(),
            suggested_value_uf: ticket_uf,
        },
        PipelineStage::Lost => ConfirmationContext::Lost {
            lead_id: lead_id.to_string(),
        },
    };

    log::info!("lead {} awaiting confirmation to {}", lead_id, destination);
    state.pending = Some(context.clone());
    Ok(Transition::PendingConfirmation(context))
}

/// Confirm the pending guarded transition with the captured closing data
pub fn confirm_transition(
    state: &mut PipelineState,
    details: ClosingDetails,
) -> Result<ClosingRecord, PipelineError> {
    let pending = state.pending.as_ref().ok_or(PipelineError::NoPendingConfirmation)?;
    let target = pending.target();

    if details.target() != target {
        return Err(PipelineError::DetailsMismatch {
            expected: target,
            provided: details.target(),
        });
    }
    if let ClosingDetails::Won { closing_value_uf, .. } = &details {
        if !closing_value_uf.is_finite() || *closing_value_uf < 0.0 {
            return Err(PipelineError::InvalidClosingValue(*closing_value_uf));
        }
    }

    let lead_id = pending.lead_id().to_string();
    let lead = state
        .lead_mut(&lead_id)
        .ok_or_else(|| PipelineError::UnknownLead(lead_id.clone()))?;
    let from = lead.status;
    lead.status = target;
    state.pending = None;

    let record = ClosingRecord {
        lead_id,
        from,
        to: target,
        details,
        confirmed_at: chrono::Utc::now(),
    };
    log::info!("lead {} confirmed {} -> {}", record.lead_id, from, target);
    state.closings.push(record.clone());
    Ok(record)
}

/// Dismiss the pending confirmation. The lead keeps its original stage.
pub fn cancel_transition(state: &mut PipelineState) -> Option<ConfirmationContext> {
    let cancelled = state.pending.take();
    if let Some(context) = &cancelled {
        log::info!("confirmation to {} for lead {} cancelled", context.target(), context.lead_id());
    }
    cancelled
}
