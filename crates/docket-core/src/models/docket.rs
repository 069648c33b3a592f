//! External-facing projection of a processed document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Priority;

/// One projected docket line. `priority` carries the due-date-relative
/// label; the chronological rank computed during resolution is not exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocketEntry {
    pub event: Option<String>,
    pub event_date: Option<String>,
    pub obligation: Option<String>,
    pub obligation_date: Option<String>,
    pub priority: Priority,
}

/// The final docket for one document: ordered entries, the opaque
/// upstream summary, and the resolved trigger map for transparency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Docket {
    pub summary: Option<String>,
    pub entries: Vec<DocketEntry>,
    /// Event name to ISO date, every value strict `YYYY-MM-DD`.
    pub triggers: BTreeMap<String, String>,
}

impl Docket {
    /// Empty docket, the degraded output for a malformed extraction payload.
    pub fn empty(summary: Option<String>) -> Self {
        Self {
            summary,
            ..Default::default()
        }
    }
}
