//! Resolved/pending status, a pure function of each record after the
//! cascade pass. Never touches the trigger table.

use docket_core::models::{is_iso_date, EventRecord, RecordStatus};

/// A record is resolved when its status date (`event_date`, falling back
/// to `obligation_date`) is present and valid ISO.
pub fn assign(records: &mut [EventRecord]) {
    for record in records.iter_mut() {
        record.status = classify(record);
    }
}

pub fn classify(record: &EventRecord) -> RecordStatus {
    match record.status_date() {
        Some(date) if is_iso_date(date) => RecordStatus::Resolved,
        _ => RecordStatus::Pending,
    }
}
