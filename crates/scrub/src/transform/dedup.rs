//! Exact-duplicate row removal.

use std::collections::HashSet;

use crate::data::Table;
use crate::error::Result;
use crate::sink::StatusSink;

use super::Transform;

/// Keeps the first occurrence of every distinct row.
///
/// Rows are compared across all columns; nulls equal nulls. Surviving rows
/// keep their original relative order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deduplicator;

impl Deduplicator {
    /// Flags marking the first occurrence of each distinct row.
    pub fn first_occurrences(table: &Table) -> Vec<bool> {
        let mut seen = HashSet::with_capacity(table.row_count());
        (0..table.row_count())
            .map(|row| seen.insert(table.row_key(row)))
            .collect()
    }
}

impl Transform for Deduplicator {
    fn name(&self) -> &'static str {
        "deduplicate"
    }

    fn apply(&self, mut table: Table, sink: &mut dyn StatusSink) -> Result<Table> {
        let keep = Self::first_occurrences(&table);
        let removed = keep.iter().filter(|k| !**k).count();

        if removed > 0 {
            table.retain_rows(&keep);
        }

        tracing::debug!(removed, remaining = table.row_count(), "deduplicated rows");
        sink.success(&format!("Removed {} duplicate rows.", removed));
        Ok(table)
    }
}
