//! # docket-engine
//!
//! The deadline resolution engine. Turns a flat list of candidate legal
//! event records, each possibly carrying a relative deadline rule, into a
//! fully dated, classified, ordered docket:
//!
//! - Dates: business-day-aware deadline arithmetic
//! - Triggers: the mutable event-name → date anchor table
//! - Cascade: fixed-point resolution of relative rules against the table
//! - Classify: resolved/pending status and two priority policies
//! - Order / Project: stable date ordering and the external schema
//! - Ingest: defensive coercion of the untrusted extraction payload
//!
//! The engine is a pure, synchronous, in-memory transformation: it owns no
//! shared state, performs no I/O, and is safe to run concurrently over
//! different documents.

pub mod cascade;
pub mod classify;
pub mod dates;
pub mod engine;
pub mod ingest;
pub mod order;
pub mod project;
pub mod triggers;

// Re-exports for convenience
pub use cascade::{resolve, resolve_pass, CascadeContext, UnknownTriggerPolicy};
pub use dates::{compute_deadline, is_iso_date, parse_date};
pub use engine::DocketEngine;
pub use triggers::TriggerTable;
