//! # docket-core
//!
//! Foundation crate for the docket deadline-resolution system.
//! Defines the data model, errors, configuration, and constants.
//! The engine crate depends on this; it holds no resolution logic itself.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::EngineConfig;
pub use errors::{DocketError, DocketResult};
pub use models::{Docket, DocketEntry, EventRecord, Priority, RecordStatus};
