//! Two independent priority policies. Do not conflate them:
//!
//! - Chronological rank runs right after resolution over the resolved
//!   subset: earliest dated record is High, second Medium, the rest Low.
//! - Due-date-relative runs at the projection boundary and replaces any
//!   rank label: overdue / due within the window / later / undated.

use chrono::{Duration, NaiveDate};
use docket_core::models::{EventRecord, Priority};

use crate::dates;

/// Chronological-rank policy. Records with a valid ISO effective date are
/// ranked ascending by that date: earliest High, second Medium, all others
/// Low. Records without a valid date are always Low.
pub fn assign_chronological_rank(records: &mut [EventRecord]) {
    let mut dated: Vec<(usize, String)> = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            record
                .valid_effective_date()
                .map(|date| (index, date.to_string()))
        })
        .collect();
    dated.sort_by(|a, b| a.1.cmp(&b.1));

    for (rank, (index, _)) in dated.iter().enumerate() {
        records[*index].priority = Some(match rank {
            0 => Priority::High,
            1 => Priority::Medium,
            _ => Priority::Low,
        });
    }
    for record in records.iter_mut() {
        if record.priority.is_none() {
            record.priority = Some(Priority::Low);
        }
    }
}

/// Due-date-relative policy: the label the outward-facing projection uses.
/// Dates are parsed permissively; anything unparseable is Low.
pub fn classify_due_date(
    effective_date: Option<&str>,
    today: NaiveDate,
    window_days: i64,
) -> Priority {
    let Some(due) = effective_date.and_then(|d| dates::parse_date(d).ok()) else {
        return Priority::Low;
    };

    if due < today {
        Priority::Overdue
    } else if due <= today + Duration::days(window_days) {
        Priority::High
    } else {
        Priority::Medium
    }
}
