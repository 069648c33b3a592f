//! Cascade resolution of relative deadline rules.
//!
//! A single forward pass resolves each record's relative rule against the
//! trigger table and feeds newly resolved dates back into it, so later
//! records can depend on earlier ones. The `resolve` driver repeats passes
//! to a fixed point, bounded by the record count, so a record whose trigger
//! is defined later in the input still resolves. Unknown triggers fall back
//! to the last known date (or today) only after the fixed point is reached,
//! so a real definition always wins over the fallback.

use chrono::{Local, NaiveDate};
use docket_core::config::EngineConfig;
use docket_core::constants::SERVICE_ANCHOR_PHRASE;
use docket_core::models::{is_iso_date, EventRecord};
use tracing::{debug, warn};

use crate::dates;
use crate::triggers::TriggerTable;

/// Injected clock for one document's resolution. Production callers use
/// the local date; tests pin a fixed one.
#[derive(Debug, Clone, Copy)]
pub struct CascadeContext {
    pub today: NaiveDate,
}

impl CascadeContext {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Default for CascadeContext {
    fn default() -> Self {
        Self {
            today: Local::now().date_naive(),
        }
    }
}

/// What a pass does with a trigger name absent from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownTriggerPolicy {
    /// Leave it unbound; a later pass may find its definition.
    Defer,
    /// Bind it to the last successfully computed date of the pass, or to
    /// today if none exists yet.
    BindLastKnown,
}

/// One forward pass over the records. Returns the number of observable
/// mutations (record dates written plus trigger bindings changed).
///
/// Per record, in input order:
/// 1. a trigger naming service of the order binds to today;
/// 2. an unknown trigger is handled per `policy`;
/// 3. a truthy relative rule with a known trigger and an offset computes
///    the deadline, overwriting `obligation_date` (and `event_date` when
///    the record names an event) if missing or not valid ISO, and binds
///    the record's event name to the new date;
/// 4. an explicit valid ISO date binds the record's event name directly.
///
/// Arithmetic failures are logged and leave the record pending; one bad
/// record never aborts the batch.
pub fn resolve_pass(
    records: &mut [EventRecord],
    table: &mut TriggerTable,
    ctx: &CascadeContext,
    config: &EngineConfig,
    policy: UnknownTriggerPolicy,
) -> usize {
    let mut changes = 0usize;
    let mut last_known: Option<NaiveDate> = None;

    for record in records.iter_mut() {
        let trigger = record.trigger_event.clone();

        if let Some(trigger) = trigger.as_deref() {
            if trigger.to_lowercase().contains(SERVICE_ANCHOR_PHRASE) {
                if table.bind(trigger, ctx.today) {
                    changes += 1;
                }
            } else if policy == UnknownTriggerPolicy::BindLastKnown && !table.contains(trigger) {
                let fallback = last_known.unwrap_or(ctx.today);
                debug!(%trigger, date = %dates::format_iso(fallback), "binding unknown trigger to fallback");
                if table.bind(trigger, fallback) {
                    changes += 1;
                }
            }
        }

        if record.has_relative_rule() {
            if let (Some(trigger), Some(offset_days)) = (trigger.as_deref(), record.offset_days) {
                if let Some(base) = table.get(trigger) {
                    match dates::add_offset(
                        base,
                        offset_days,
                        record.business_days,
                        config.max_offset_days,
                    ) {
                        Ok(computed) => {
                            changes += apply_computed_date(record, computed);
                            if let (Some(event), Some(event_date)) =
                                (record.event.as_deref(), record.event_date.as_deref())
                            {
                                if let Ok(date) = dates::parse_date(event_date) {
                                    if table.bind(event, date) {
                                        changes += 1;
                                    }
                                }
                            }
                            last_known = Some(computed);
                        }
                        Err(err) => {
                            warn!(
                                %err,
                                event = record.event.as_deref().unwrap_or("<unnamed>"),
                                %trigger,
                                offset_days,
                                "deadline arithmetic failed; record left pending"
                            );
                        }
                    }
                }
            }
        }

        // An explicit valid date makes the record a trigger for later ones.
        if let Some(date_str) = record.status_date() {
            if is_iso_date(date_str) {
                if let Ok(date) = dates::parse_date(date_str) {
                    if let Some(event) = record.event.as_deref() {
                        if table.bind(event, date) {
                            changes += 1;
                        }
                    }
                    last_known = Some(date);
                }
            }
        }
    }

    changes
}

/// Resolve to a fixed point: forward passes repeat until one makes no
/// change, bounded by the record count since each pass can only add
/// triggers, never remove them. Triggers that no record ever defines then
/// get the last-known/today fallback, followed by a final round of passes
/// so the fallback can cascade. Returns total observable mutations.
pub fn resolve(
    records: &mut [EventRecord],
    table: &mut TriggerTable,
    ctx: &CascadeContext,
    config: &EngineConfig,
) -> usize {
    let mut total = run_to_fixed_point(records, table, ctx, config);

    let fallback_changes = resolve_pass(
        records,
        table,
        ctx,
        config,
        UnknownTriggerPolicy::BindLastKnown,
    );
    if fallback_changes > 0 {
        total += fallback_changes;
        total += run_to_fixed_point(records, table, ctx, config);
    }

    debug!(changes = total, triggers = table.len(), "cascade resolution complete");
    total
}

fn run_to_fixed_point(
    records: &mut [EventRecord],
    table: &mut TriggerTable,
    ctx: &CascadeContext,
    config: &EngineConfig,
) -> usize {
    let max_passes = records.len() + 1;
    let mut total = 0usize;
    for pass in 0..max_passes {
        let changes = resolve_pass(records, table, ctx, config, UnknownTriggerPolicy::Defer);
        total += changes;
        if changes == 0 {
            debug!(passes = pass + 1, "cascade reached fixed point");
            break;
        }
    }
    total
}

/// Write a computed deadline into the record wherever the existing value
/// is missing or not valid ISO. Returns the number of fields written.
fn apply_computed_date(record: &mut EventRecord, computed: NaiveDate) -> usize {
    let iso = dates::format_iso(computed);
    let mut written = 0usize;

    let obligation_invalid = record
        .obligation_date
        .as_deref()
        .map_or(true, |d| !is_iso_date(d));
    if obligation_invalid {
        record.obligation_date = Some(iso.clone());
        written += 1;
    }

    let event_invalid = record
        .event_date
        .as_deref()
        .map_or(true, |d| !is_iso_date(d));
    if event_invalid && record.event.is_some() {
        record.event_date = Some(iso);
        written += 1;
    }

    written
}
