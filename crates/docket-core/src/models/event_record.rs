//! Candidate event/obligation records from the structured-extraction
//! collaborator.
//!
//! The collaborator is an untrusted producer: every field is optional,
//! absent fields deserialize as empty rather than erroring, and flag-like
//! fields accept whatever JSON shape the producer happened to emit.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::constants::ISO_DATE_FORMAT;

/// Whether a record's effective date has been resolved to valid ISO text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Resolved,
    #[default]
    Pending,
}

/// Urgency rank. Two classification policies produce these labels: the
/// chronological-rank policy (never emits `Overdue`) and the due-date
/// policy used at the projection boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "overdue")]
    Overdue,
    High,
    Medium,
    Low,
}

/// One candidate docket item, mutated in place through the resolution
/// stages and discarded after projection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRecord {
    /// Name of an occurrence; resolved records become triggers under this name.
    pub event: Option<String>,
    /// ISO `YYYY-MM-DD` once resolved.
    pub event_date: Option<String>,
    /// A duty or filing description.
    pub obligation: Option<String>,
    pub obligation_date: Option<String>,
    /// Truthy when the record's date must be derived from a trigger.
    pub relative_rule: Option<Value>,
    /// Name of the anchor event the offset is relative to.
    pub trigger_event: Option<String>,
    /// Signed day offset: positive = after the trigger, negative = before.
    #[serde(deserialize_with = "deserialize_offset_days")]
    pub offset_days: Option<i64>,
    pub rule_type: Option<String>,
    /// When set, offset stepping counts Monday-Friday only.
    #[serde(deserialize_with = "deserialize_truthy")]
    pub business_days: bool,
    pub evidence_text: Option<String>,
    /// Byte offset of `evidence_text` within the source document.
    pub evidence_start: Option<usize>,
    pub evidence_end: Option<usize>,
    #[serde(skip_deserializing)]
    pub status: RecordStatus,
    #[serde(skip_deserializing)]
    pub priority: Option<Priority>,
}

impl EventRecord {
    /// The date the record is sorted and prioritized by:
    /// `obligation_date`, falling back to `event_date`.
    /// Empty strings from the producer count as absent.
    pub fn effective_date(&self) -> Option<&str> {
        non_empty(self.obligation_date.as_deref()).or_else(|| non_empty(self.event_date.as_deref()))
    }

    /// Effective date only when it is strict ISO.
    pub fn valid_effective_date(&self) -> Option<&str> {
        self.effective_date().filter(|d| is_iso_date(d))
    }

    /// The date status classification inspects: `event_date`, falling
    /// back to `obligation_date`. Empty strings count as absent.
    pub fn status_date(&self) -> Option<&str> {
        non_empty(self.event_date.as_deref()).or_else(|| non_empty(self.obligation_date.as_deref()))
    }

    /// Whether the record asks for its date to be derived.
    pub fn has_relative_rule(&self) -> bool {
        self.relative_rule.as_ref().is_some_and(value_is_truthy)
    }
}

fn non_empty(date: Option<&str>) -> Option<&str> {
    date.filter(|s| !s.is_empty())
}

/// Strict `YYYY-MM-DD` check. The permissive parser lives in the engine
/// crate; this is the invariant every externally visible date must meet.
/// Canonical form only: the value must round-trip through formatting, so
/// non-zero-padded variants like `2024-1-5` are rejected (they would also
/// break the lexicographic sort key).
pub fn is_iso_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT)
        .is_ok_and(|date| date.format(ISO_DATE_FORMAT).to_string() == value)
}

/// Truthiness of an arbitrary JSON value from the untrusted producer.
/// Empty strings and the literal strings "false"/"no"/"0" count as false,
/// so a producer that stringifies its booleans still coerces sensibly.
pub fn value_is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => {
            let s = s.trim();
            !s.is_empty() && !s.eq_ignore_ascii_case("false") && !s.eq_ignore_ascii_case("no") && s != "0"
        }
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Accepts a JSON number or a numeric string; anything else coerces to
/// `None` rather than rejecting the whole record.
fn deserialize_offset_days<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_i64))
}

fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().is_some_and(value_is_truthy))
}
