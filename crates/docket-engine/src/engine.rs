//! DocketEngine: orchestrates the full resolution pipeline.
//!
//! seed triggers → fixed-point cascade → status → chronological rank →
//! stable ordering → due-date projection.

use docket_core::config::EngineConfig;
use docket_core::constants::TODAY_ANCHOR;
use docket_core::models::{Docket, EventRecord};
use tracing::{debug, info, warn};

use crate::cascade::{self, CascadeContext};
use crate::classify::{priority, status};
use crate::ingest;
use crate::order;
use crate::project;
use crate::triggers::TriggerTable;

/// The deadline resolution engine. Owns nothing but its configuration,
/// so one engine can serve concurrent documents safely.
pub struct DocketEngine {
    config: EngineConfig,
}

impl DocketEngine {
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The pure core: `(records, seed triggers) -> (records, final triggers)`.
    ///
    /// Seeds the well-known "today" anchor when absent, pre-binds explicit
    /// event dates, resolves the cascade to a fixed point, then classifies
    /// and orders. Records come back dated, statused, rank-prioritized,
    /// and sorted; the table holds every trigger resolved along the way.
    pub fn resolve_records(
        &self,
        mut records: Vec<EventRecord>,
        mut table: TriggerTable,
        ctx: &CascadeContext,
    ) -> (Vec<EventRecord>, TriggerTable) {
        table.bind_if_absent(TODAY_ANCHOR, ctx.today);
        ingest::seed_triggers(&records, &mut table);
        debug!(records = records.len(), seeds = table.len(), "starting cascade");

        let changes = cascade::resolve(&mut records, &mut table, ctx, &self.config);

        status::assign(&mut records);
        priority::assign_chronological_rank(&mut records);
        order::sort_by_effective_date(&mut records);

        debug!(changes, triggers = table.len(), "records resolved");
        (records, table)
    }

    /// Resolve and project to the external docket schema. The summary is
    /// opaque pass-through from the upstream summarization collaborator.
    pub fn process(
        &self,
        records: Vec<EventRecord>,
        seed_triggers: TriggerTable,
        summary: Option<String>,
        ctx: &CascadeContext,
    ) -> Docket {
        let (records, table) = self.resolve_records(records, seed_triggers, ctx);
        let docket = project::to_docket(&records, summary, &table, ctx, &self.config);
        info!(
            entries = docket.entries.len(),
            triggers = docket.triggers.len(),
            "docket resolution complete"
        );
        docket
    }

    /// Full boundary entry: ingest the raw extraction payload (degrading
    /// to an empty docket when malformed), locate evidence offsets in the
    /// document text, then resolve and project.
    pub fn process_raw(
        &self,
        raw_payload: &str,
        document_text: &str,
        summary: Option<String>,
        ctx: &CascadeContext,
    ) -> Docket {
        let mut records = match ingest::parse_records(raw_payload) {
            Ok(records) => records,
            Err(err) => {
                warn!(%err, "extraction payload malformed; returning empty docket");
                return Docket::empty(summary);
            }
        };
        ingest::locate_evidence(&mut records, document_text);
        self.process(records, TriggerTable::new(), summary, ctx)
    }
}

impl Default for DocketEngine {
    fn default() -> Self {
        Self::new()
    }
}
