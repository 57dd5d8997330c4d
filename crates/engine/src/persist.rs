//! Serializing named sets of setting cells to flat records.
//!
//! A record is a `BTreeMap<String, String>` of per-setting serialized
//! values — the shape the session snapshot service stores and replays. The
//! adapter never decides whether a restored value is acceptable; it stages
//! values into cells and leaves acceptance to each cell's own validity and
//! fixup logic.

use std::collections::BTreeMap;

use crate::cell::SettingCell;
use crate::policy::SettingPolicy;

/// Object-safe persistence surface of a cell, so heterogeneous named sets
/// can cross the adapter boundary together.
pub trait PersistableCell {
    /// Serialized form of the current effective value.
    fn serialize_value(&self) -> Result<String, serde_json::Error>;
    /// Stage a serialized value; malformed input is ignored.
    fn deserialize_value(&mut self, raw: &str);
}

impl<P: SettingPolicy> PersistableCell for SettingCell<P> {
    fn serialize_value(&self) -> Result<String, serde_json::Error> {
        SettingCell::serialize_value(self)
    }

    fn deserialize_value(&mut self, raw: &str) {
        SettingCell::deserialize_value(self, raw);
    }
}

/// Serialize a named set of cells to a flat record.
///
/// A pure function of current effective values: no query access, no cell
/// mutation. Values that fail to serialize are skipped rather than aborting
/// the snapshot (the remaining settings still restore).
pub fn serialize<'a>(
    cells: impl IntoIterator<Item = (&'a str, &'a (dyn PersistableCell + 'a))>,
) -> BTreeMap<String, String> {
    let mut record = BTreeMap::new();
    for (name, cell) in cells {
        if let Ok(raw) = cell.serialize_value() {
            record.insert(name.to_string(), raw);
        }
    }
    record
}

/// Restore cells from a flat record.
///
/// Only keys present in the record touch a cell; cells whose key is absent
/// keep their defaults (older snapshots must not corrupt newer settings),
/// and record keys matching no cell are ignored. Idempotent: restoring the
/// same record twice yields the same final state once fixup has run.
pub fn deserialize<'a>(
    record: &BTreeMap<String, String>,
    cells: impl IntoIterator<Item = (&'a str, &'a mut (dyn PersistableCell + 'a))>,
) {
    for (name, cell) in cells {
        if let Some(raw) = record.get(name) {
            cell.deserialize_value(raw);
        }
    }
}
