//! Record classification: resolved/pending status and the two priority
//! policies (chronological rank and due-date-relative). The policies are
//! deliberately separate operations; see `priority` for which applies where.

pub mod priority;
pub mod status;
