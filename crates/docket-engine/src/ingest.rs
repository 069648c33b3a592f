//! Defensive ingestion of the structured-extraction payload.
//!
//! The extraction collaborator is an untrusted producer: its output may be
//! fenced in Markdown, may not be JSON, may not be an array, and individual
//! elements may be junk. Nothing here is fatal; the boundary degrades to an
//! empty record list.

use docket_core::errors::{DocketError, DocketResult};
use docket_core::models::EventRecord;
use serde_json::Value;
use tracing::{debug, warn};

use crate::dates;
use crate::triggers::TriggerTable;

/// Parse the raw extraction payload into records. Markdown code fences
/// are stripped first. A non-JSON or non-array payload is
/// `MalformedInput`; an element that cannot be coerced into a record is
/// dropped with a warning rather than failing the batch.
pub fn parse_records(raw: &str) -> DocketResult<Vec<EventRecord>> {
    let cleaned = strip_code_fences(raw);
    let value: Value = serde_json::from_str(cleaned).map_err(|err| DocketError::MalformedInput {
        reason: err.to_string(),
    })?;

    let Value::Array(items) = value else {
        return Err(DocketError::MalformedInput {
            reason: format!("expected a JSON array, got {}", json_kind(&value)),
        });
    };

    let records = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<EventRecord>(item) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(%err, "dropping malformed candidate record");
                None
            }
        })
        .collect();
    Ok(records)
}

/// Boundary behavior: a malformed payload degrades to an empty record
/// list, so the engine produces an empty docket instead of an error.
pub fn parse_records_lossy(raw: &str) -> Vec<EventRecord> {
    match parse_records(raw) {
        Ok(records) => records,
        Err(err) => {
            warn!(%err, "extraction payload malformed; degrading to empty record list");
            Vec::new()
        }
    }
}

/// Pre-bind every record that already carries an explicit event name and
/// a parseable event date, so the cascade can depend on them immediately.
pub fn seed_triggers(records: &[EventRecord], table: &mut TriggerTable) {
    for record in records {
        if let (Some(event), Some(event_date)) = (record.event.as_deref(), record.event_date.as_deref()) {
            match dates::parse_date(event_date) {
                Ok(date) => {
                    table.bind(event, date);
                }
                Err(_) => debug!(event, %event_date, "skipping trigger seed with unparseable date"),
            }
        }
    }
}

/// Fill `evidence_start`/`evidence_end` with the byte offsets of each
/// record's evidence text within the source document.
pub fn locate_evidence(records: &mut [EventRecord], document_text: &str) {
    for record in records.iter_mut() {
        let evidence = record.evidence_text.as_deref().map(str::trim).unwrap_or("");
        match (!evidence.is_empty())
            .then(|| document_text.find(evidence))
            .flatten()
        {
            Some(start) => {
                record.evidence_start = Some(start);
                record.evidence_end = Some(start + evidence.len());
            }
            None => {
                record.evidence_start = None;
                record.evidence_end = None;
            }
        }
    }
}

fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```") {
        text = rest.trim_start();
        // The language marker arrives in whatever casing the producer chose.
        if text.get(..4).is_some_and(|m| m.eq_ignore_ascii_case("json")) {
            text = text[4..].trim_start();
        }
        if let Some(rest) = text.strip_suffix("```") {
            text = rest.trim_end();
        }
    }
    text
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
