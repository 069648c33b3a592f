//! Projection to the external docket schema.

use docket_core::config::EngineConfig;
use docket_core::models::{is_iso_date, Docket, DocketEntry, EventRecord};

use crate::cascade::CascadeContext;
use crate::classify::priority;
use crate::triggers::TriggerTable;

/// Project resolved records to the external schema. Each entry gets the
/// due-date-relative priority, replacing whatever chronological rank the
/// resolution stage assigned; the summary is passed through opaque, and
/// the final trigger map is exposed for transparency.
pub fn to_docket(
    records: &[EventRecord],
    summary: Option<String>,
    table: &TriggerTable,
    ctx: &CascadeContext,
    config: &EngineConfig,
) -> Docket {
    let entries = records
        .iter()
        .map(|record| DocketEntry {
            event: record.event.clone(),
            event_date: iso_or_none(record.event_date.as_deref()),
            obligation: record.obligation.clone(),
            obligation_date: iso_or_none(record.obligation_date.as_deref()),
            priority: priority::classify_due_date(
                record.effective_date(),
                ctx.today,
                config.due_soon_window_days,
            ),
        })
        .collect();

    Docket {
        summary,
        entries,
        triggers: table.to_iso_map(),
    }
}

/// Dates that never resolved to strict ISO do not cross the boundary.
fn iso_or_none(date: Option<&str>) -> Option<String> {
    date.filter(|d| is_iso_date(d)).map(str::to_string)
}
