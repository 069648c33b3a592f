//! Final docket ordering.

use docket_core::constants::FAR_FUTURE_SENTINEL;
use docket_core::models::EventRecord;

/// Stable ascending sort by effective date. Records without a valid ISO
/// date take the far-future sentinel as their key, keeping the comparison
/// total: they sort last, in their original relative order. ISO strings
/// compare correctly lexicographically, so keys stay as text.
pub fn sort_by_effective_date(records: &mut [EventRecord]) {
    records.sort_by(|a, b| sort_key(a).cmp(sort_key(b)));
}

fn sort_key(record: &EventRecord) -> &str {
    record.valid_effective_date().unwrap_or(FAR_FUTURE_SENTINEL)
}
