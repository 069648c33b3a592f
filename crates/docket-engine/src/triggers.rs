//! The trigger table: event name → resolved absolute date.
//!
//! One table lives for one document's resolution pass. Keys are unique
//! and a same-key write overwrites (last write wins); the table only ever
//! grows during a cascade. Ordered so the externally visible `triggers`
//! projection is deterministic.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::dates;

/// Mutable mapping from event name to an absolute date, threaded by
/// reference through the resolution pass. Not shared across documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerTable {
    entries: BTreeMap<String, NaiveDate>,
}

impl TriggerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from externally known (name, ISO date) anchors. Entries whose
    /// date does not parse are skipped rather than failing the batch.
    pub fn from_iso_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (name, date) in pairs {
            let name = name.into();
            let date = date.into();
            match dates::parse_date(&date) {
                Ok(parsed) => {
                    table.bind(&name, parsed);
                }
                Err(_) => debug!(trigger = %name, %date, "skipping unparseable seed trigger"),
            }
        }
        table
    }

    /// Bind a name to a date, overwriting any prior value. Returns true
    /// when the table observably changed.
    pub fn bind(&mut self, name: &str, date: NaiveDate) -> bool {
        self.entries.insert(name.to_string(), date) != Some(date)
    }

    /// Bind only when the name is not already present.
    pub fn bind_if_absent(&mut self, name: &str, date: NaiveDate) -> bool {
        if self.entries.contains_key(name) {
            return false;
        }
        self.entries.insert(name.to_string(), date);
        true
    }

    pub fn get(&self, name: &str) -> Option<NaiveDate> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, NaiveDate)> {
        self.entries.iter().map(|(name, date)| (name.as_str(), *date))
    }

    /// Project to the external (name → ISO string) map.
    pub fn to_iso_map(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(name, date)| (name.clone(), dates::format_iso(*date)))
            .collect()
    }
}
