use crate::models::{Lead, PipelineStage};
use crate::pipeline::PipelineError;
use serde_json::Value;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading a lead collection
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Failed to read lead file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lead data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Lead data must be a JSON array of lead records")]
    NotAnArray,

    #[error("Lead record #{index} is invalid: {message}")]
    InvalidRecord { index: usize, message: String },

    #[error("Duplicate lead id '{0}'")]
    DuplicateId(String),

    #[error("{} lead(s) have an unknown status: {}", .0.len(), join_errors(.0))]
    InvalidRecords(Vec<PipelineError>),
}

fn join_errors(errors: &[PipelineError]) -> String {
    errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; ")
}

/// Parse a JSON array of lead records.
///
/// Every record's `status` is checked before decoding; all records with a status
/// outside the pipeline stages are reported together rather than dropped.
pub fn parse_leads(json: &str) -> Result<Vec<Lead>, IngestError> {
    let value: Value = serde_json::from_str(json)?;
    let records = match value {
        Value::Array(records) => records,
        _ => return Err(IngestError::NotAnArray),
    };

    let mut bad_status = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let lead_id = record
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{}", index));
        match record.get("status") {
            Some(Value::String(status)) if is_wire_stage(status) => {}
            Some(Value::String(status)) => bad_status.push(PipelineError::UnknownStatus {
                lead_id,
                status: status.clone(),
            }),
            Some(other) => bad_status.push(PipelineError::UnknownStatus {
                lead_id,
                status: other.to_string(),
            }),
            None => {
                return Err(IngestError::InvalidRecord {
                    index,
                    message: "missing field `status`".to_string(),
                })
            }
        }
    }
    if !bad_status.is_empty() {
        return Err(IngestError::InvalidRecords(bad_status));
    }

    let mut seen = HashSet::new();
    let mut leads = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let lead: Lead = serde_json::from_value(record).map_err(|e| IngestError::InvalidRecord {
            index,
            message: e.to_string(),
        })?;
        if !seen.insert(lead.id.clone()) {
            return Err(IngestError::DuplicateId(lead.id));
        }
        leads.push(lead);
    }

    log::debug!("parsed {} lead(s)", leads.len());
    Ok(leads)
}

/// Stored statuses use exact wire names; the lenient CLI parser does not apply here
fn is_wire_stage(status: &str) -> bool {
    PipelineStage::ALL.iter().any(|s| s.as_str() == status)
}

/// Read and parse a lead file
pub fn load_leads(path: &Path) -> Result<Vec<Lead>, IngestError> {
    let json = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_leads(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, status: &str) -> String {
        format!(
            r#"{{
                "id": "{id}", "name": "Lead {id}", "project_id": "p1", "project_name": "Parque Norte",
                "status": "{status}", "fit_score": 4, "ticket_uf": 3500, "channel_group": "paid",
                "created_at": "2026-09-01T10:00:00Z", "last_activity": "2026-10-01T10:00:00Z",
                "external_status": "active", "pre_evaluation_status": "pending"
            }}"#
        )
    }

    #[test]
    fn test_parse_valid_records() {
        let json = format!("[{}, {}]", record("1", "new"), record("2", "won"));
        let leads = parse_leads(&json).unwrap();
        assert_eq!(leads.len(), 2);
        assert_eq!(leads[0].status, PipelineStage::New);
        assert_eq!(leads[1].status, PipelineStage::Won);
        assert_eq!(leads[0].documents_total, 0);
        assert!(leads[0].utm_source.is_none());
    }

    #[test]
    fn test_unknown_status_reported_per_record() {
        let json = format!(
            "[{}, {}, {}]",
            record("1", "new"),
            record("2", "negotiation"),
            record("3", "Won")
        );
        match parse_leads(&json) {
            Err(IngestError::InvalidRecords(errors)) => {
                assert_eq!(
                    errors,
                    vec![
                        PipelineError::UnknownStatus { lead_id: "2".to_string(), status: "negotiation".to_string() },
                        PipelineError::UnknownStatus { lead_id: "3".to_string(), status: "Won".to_string() },
                    ]
                );
            }
            other => panic!("expected InvalidRecords, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = format!("[{}, {}]", record("1", "new"), record("1", "lost"));
        assert!(matches!(parse_leads(&json), Err(IngestError::DuplicateId(id)) if id == "1"));
    }

    #[test]
    fn test_not_an_array() {
        assert!(matches!(parse_leads("{}"), Err(IngestError::NotAnArray)));
        assert!(matches!(parse_leads("not json"), Err(IngestError::Json(_))));
    }

    #[test]
    fn test_invalid_fit_score_is_record_error() {
        let json = format!("[{}]", record("1", "new").replace("\"fit_score\": 4", "\"fit_score\": 7"));
        assert!(matches!(parse_leads(&json), Err(IngestError::InvalidRecord { index: 0, .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_leads(Path::new("/nonexistent/leads.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read lead file"));
    }
}
