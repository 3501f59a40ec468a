//! Leadboard - lead pipeline board for a real-estate sales team
//!
//! This library provides the core functionality for Leadboard, including:
//! - Data models for leads, pipeline stages and closing details
//! - The pipeline controller: board grouping, move requests and
//!   confirmation of guarded transitions into `won`/`lost`
//! - Lead search and filtering
//! - Lead data ingestion (JSON files or built-in samples)
//! - CLI command parsing and execution
//!
//! # Example
//!
//! ```
//! use leadboard::data::sample_leads;
//! use leadboard::models::{ClosingDetails, LossReason, PipelineStage};
//! use leadboard::pipeline::{confirm_transition, request_transition, PipelineState, Transition};
//!
//! let mut state = PipelineState::new(sample_leads());
//! let transition = request_transition(&mut state, "1", PipelineStage::Lost).unwrap();
//! assert!(matches!(transition, Transition::PendingConfirmation(_)));
//! assert_eq!(state.get("1").unwrap().status, PipelineStage::New);
//!
//! confirm_transition(&mut state, ClosingDetails::Lost { reason: LossReason::Price, notes: None }).unwrap();
//! assert_eq!(state.get("1").unwrap().status, PipelineStage::Lost);
//! ```

pub mod models;
pub mod pipeline;
pub mod filter;
pub mod data;
pub mod cli;
pub mod utils;
