use chrono::NaiveDate;
use docket_core::config::EngineConfig;
use docket_core::models::EventRecord;
use docket_engine::cascade::{resolve, resolve_pass, CascadeContext, UnknownTriggerPolicy};
use docket_engine::triggers::TriggerTable;
use serde_json::json;

fn ctx() -> CascadeContext {
    // A Monday.
    CascadeContext::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
}

fn dated_event(name: &str, date: &str) -> EventRecord {
    EventRecord {
        event: Some(name.to_string()),
        event_date: Some(date.to_string()),
        ..Default::default()
    }
}

fn relative(obligation: &str, trigger: &str, offset_days: i64) -> EventRecord {
    EventRecord {
        obligation: Some(obligation.to_string()),
        relative_rule: Some(json!(true)),
        trigger_event: Some(trigger.to_string()),
        offset_days: Some(offset_days),
        ..Default::default()
    }
}

// ── Single-pass ordering dependency ──────────────────────────────────────

#[test]
fn one_pass_cannot_resolve_a_trigger_defined_later() {
    let mut records = vec![
        relative("file answer", "complaint filed", 10),
        dated_event("complaint filed", "2024-02-01"),
    ];
    let mut table = TriggerTable::new();

    resolve_pass(&mut records, &mut table, &ctx(), &EngineConfig::default(), UnknownTriggerPolicy::Defer);

    assert_eq!(records[0].obligation_date, None);
    assert_eq!(table.get("complaint filed"), NaiveDate::from_ymd_opt(2024, 2, 1));
}

#[test]
fn one_pass_resolves_a_trigger_defined_earlier() {
    let mut records = vec![
        dated_event("complaint filed", "2024-02-01"),
        relative("file answer", "complaint filed", 10),
    ];
    let mut table = TriggerTable::new();

    resolve_pass(&mut records, &mut table, &ctx(), &EngineConfig::default(), UnknownTriggerPolicy::Defer);

    assert_eq!(records[1].obligation_date.as_deref(), Some("2024-02-11"));
}

// ── Fixed-point driver ───────────────────────────────────────────────────

#[test]
fn fixed_point_resolves_regardless_of_input_order() {
    let mut records = vec![
        relative("file answer", "complaint filed", 10),
        dated_event("complaint filed", "2024-02-01"),
    ];
    let mut table = TriggerTable::new();

    resolve(&mut records, &mut table, &ctx(), &EngineConfig::default());

    assert_eq!(records[0].obligation_date.as_deref(), Some("2024-02-11"));
}

#[test]
fn resolved_records_cascade_as_triggers_for_later_rules() {
    // C depends on B which depends on A, listed worst-case backwards.
    let mut record_b = relative("respond", "petition filed", 7);
    record_b.event = Some("response due".to_string());
    let mut records = vec![
        relative("reply", "response due", 7),
        record_b,
        dated_event("petition filed", "2024-03-01"),
    ];
    let mut table = TriggerTable::new();

    resolve(&mut records, &mut table, &ctx(), &EngineConfig::default());

    assert_eq!(records[1].obligation_date.as_deref(), Some("2024-03-08"));
    assert_eq!(records[0].obligation_date.as_deref(), Some("2024-03-15"));
    assert_eq!(table.get("response due"), NaiveDate::from_ymd_opt(2024, 3, 8));
}

#[test]
fn idempotent_on_a_fully_resolved_set() {
    let mut records = vec![
        dated_event("complaint filed", "2024-02-01"),
        relative("file answer", "complaint filed", 10),
    ];
    let mut table = TriggerTable::new();
    resolve(&mut records, &mut table, &ctx(), &EngineConfig::default());

    let records_before = records.clone();
    let table_before = table.clone();
    let changes = resolve(&mut records, &mut table, &ctx(), &EngineConfig::default());

    assert_eq!(changes, 0);
    assert_eq!(records, records_before);
    assert_eq!(table, table_before);
}

// ── Anchors and fallbacks ────────────────────────────────────────────────

#[test]
fn service_of_order_phrase_binds_to_today() {
    let mut records = vec![relative("file objection", "Service of this Order", 30)];
    let mut table = TriggerTable::new();

    resolve_pass(&mut records, &mut table, &ctx(), &EngineConfig::default(), UnknownTriggerPolicy::Defer);

    assert_eq!(records[0].obligation_date.as_deref(), Some("2024-01-31"));
    assert_eq!(table.get("Service of this Order"), NaiveDate::from_ymd_opt(2024, 1, 1));
}

#[test]
fn trigger_no_record_defines_falls_back_to_today() {
    let mut records = vec![relative("file motion", "some unheard-of event", 5)];
    let mut table = TriggerTable::new();

    resolve(&mut records, &mut table, &ctx(), &EngineConfig::default());

    // Bound to today (2024-01-01) after the fixed point, then resolved.
    assert_eq!(records[0].obligation_date.as_deref(), Some("2024-01-06"));
}

#[test]
fn fallback_prefers_the_last_computed_date_over_today() {
    let mut records = vec![
        dated_event("judgment entered", "2024-04-01"),
        relative("file notice", "some unheard-of event", 5),
    ];
    let mut table = TriggerTable::new();

    resolve(&mut records, &mut table, &ctx(), &EngineConfig::default());

    // The explicit 2024-04-01 is the last known date when the fallback runs.
    assert_eq!(records[1].obligation_date.as_deref(), Some("2024-04-06"));
}

#[test]
fn a_real_definition_beats_the_fallback_even_when_listed_later() {
    let mut records = vec![
        relative("file answer", "complaint filed", 10),
        dated_event("complaint filed", "2024-02-01"),
    ];
    let mut table = TriggerTable::new();

    resolve(&mut records, &mut table, &ctx(), &EngineConfig::default());

    // Resolved against the definition, not against today.
    assert_eq!(records[0].obligation_date.as_deref(), Some("2024-02-11"));
    assert_eq!(table.get("complaint filed"), NaiveDate::from_ymd_opt(2024, 2, 1));
}

// ── Per-record behavior ──────────────────────────────────────────────────

#[test]
fn business_day_rules_step_over_weekends() {
    let mut record = relative("serve discovery", "hearing", 5);
    record.business_days = true;
    // 2024-01-05 is a Friday.
    let mut records = vec![dated_event("hearing", "2024-01-05"), record];
    let mut table = TriggerTable::new();

    resolve(&mut records, &mut table, &ctx(), &EngineConfig::default());

    assert_eq!(records[1].obligation_date.as_deref(), Some("2024-01-12"));
}

#[test]
fn non_iso_dates_are_overwritten_by_the_computed_one() {
    let mut record = relative("file answer", "complaint filed", 10);
    record.obligation_date = Some("within ten days".to_string());
    let mut records = vec![dated_event("complaint filed", "2024-02-01"), record];
    let mut table = TriggerTable::new();

    resolve(&mut records, &mut table, &ctx(), &EngineConfig::default());

    assert_eq!(records[1].obligation_date.as_deref(), Some("2024-02-11"));
}

#[test]
fn existing_valid_dates_are_never_overwritten() {
    let mut record = relative("file answer", "complaint filed", 10);
    record.obligation_date = Some("2024-05-05".to_string());
    let mut records = vec![dated_event("complaint filed", "2024-02-01"), record];
    let mut table = TriggerTable::new();

    resolve(&mut records, &mut table, &ctx(), &EngineConfig::default());

    assert_eq!(records[1].obligation_date.as_deref(), Some("2024-05-05"));
}

#[test]
fn one_bad_record_never_aborts_the_batch() {
    let mut bad = relative("impossible deadline", "complaint filed", 999_999);
    bad.event = Some("impossible".to_string());
    let mut records = vec![
        dated_event("complaint filed", "2024-02-01"),
        bad,
        relative("file answer", "complaint filed", 10),
    ];
    let mut table = TriggerTable::new();

    resolve(&mut records, &mut table, &ctx(), &EngineConfig::default());

    // The out-of-range offset leaves its record unresolved; the rest proceed.
    assert_eq!(records[1].obligation_date, None);
    assert_eq!(records[2].obligation_date.as_deref(), Some("2024-02-11"));
}

#[test]
fn record_missing_offset_days_stays_pending() {
    let mut record = relative("file answer", "complaint filed", 0);
    record.offset_days = None;
    let mut records = vec![dated_event("complaint filed", "2024-02-01"), record];
    let mut table = TriggerTable::new();

    resolve(&mut records, &mut table, &ctx(), &EngineConfig::default());

    assert_eq!(records[1].obligation_date, None);
}

#[test]
fn a_resolved_rule_also_fills_the_event_date_when_named() {
    let mut record = relative("file answer", "complaint filed", 10);
    record.event = Some("answer due".to_string());
    let mut records = vec![dated_event("complaint filed", "2024-02-01"), record];
    let mut table = TriggerTable::new();

    resolve(&mut records, &mut table, &ctx(), &EngineConfig::default());

    assert_eq!(records[1].event_date.as_deref(), Some("2024-02-11"));
    assert_eq!(table.get("answer due"), NaiveDate::from_ymd_opt(2024, 2, 11));
}
