// Lead data: source resolution, JSON ingestion and the built-in sample pipeline

pub mod ingest;
pub mod sample;
pub mod source;

pub use ingest::{load_leads, parse_leads, IngestError};
pub use sample::sample_leads;
pub use source::DataSource;
