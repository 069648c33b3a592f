//! Error types for the deadline-resolution engine.
//!
//! Nothing in the engine is fatal: per-record arithmetic failures are
//! caught inside the cascade pass and leave that record pending, and a
//! malformed extraction payload degrades to an empty record list at the
//! ingestion boundary.

/// Errors produced by deadline resolution and ingestion.
#[derive(Debug, thiserror::Error)]
pub enum DocketError {
    #[error("unparseable base date: {input:?}")]
    DateParse { input: String },

    #[error("offset of {offset_days} days exceeds the {max}-day limit")]
    DateRange { offset_days: i64, max: i64 },

    #[error("malformed extraction payload: {reason}")]
    MalformedInput { reason: String },
}

pub type DocketResult<T> = Result<T, DocketError>;
