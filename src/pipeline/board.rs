use crate::models::{Lead, PipelineStage};
use serde::Serialize;

/// Per-column aggregate shown in the column header
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub stage: PipelineStage,
    pub count: usize,
    pub total_ticket_uf: f64,
}

/// Leads partitioned into the five pipeline columns.
///
/// Each column keeps the relative order of the source collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    columns: [Vec<Lead>; 5],
}

/// Project a lead collection onto the board. Pure; recompute after every change.
pub fn group_by_stage(leads: &[Lead]) -> Board {
    let mut columns: [Vec<Lead>; 5] = Default::default();
    for lead in leads {
        columns[column_index(lead.status)].push(lead.clone());
    }
    Board { columns }
}

fn column_index(stage: PipelineStage) -> usize {
    stage.order() - 1
}

impl Board {
    pub fn column(&self, stage: PipelineStage) -> &[Lead] {
        &self.columns[column_index(stage)]
    }

    /// Columns in board order
    pub fn columns(&self) -> impl Iterator<Item = (PipelineStage, &[Lead])> + '_ {
        PipelineStage::ALL
            .into_iter()
            .map(move |stage| (stage, self.column(stage)))
    }

    pub fn summary(&self, stage: PipelineStage) -> ColumnSummary {
        let leads = self.column(stage);
        ColumnSummary {
            stage,
            count: leads.len(),
            total_ticket_uf: leads.iter().map(|l| l.ticket_uf).sum(),
        }
    }

    pub fn summaries(&self) -> Vec<ColumnSummary> {
        PipelineStage::ALL.iter().map(|s| self.summary(*s)).collect()
    }

    /// Total number of leads on the board
    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
