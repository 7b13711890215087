//! Structural summary of a table.

use serde::{Deserialize, Serialize};

use crate::data::{ColumnType, Table};
use crate::error::Result;

/// Per-column counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub column_type: ColumnType,
    pub non_null_count: usize,
    pub null_count: usize,
}

/// Summary produced by the [`Validator`](super::Validator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Number of data rows.
    pub row_count: usize,
    /// One entry per column, in table order.
    pub columns: Vec<ColumnSummary>,
}

impl ValidationReport {
    /// Summarize a table.
    pub fn from_table(table: &Table) -> Self {
        let columns = table
            .columns()
            .iter()
            .map(|c| ColumnSummary {
                name: c.name.clone(),
                column_type: c.column_type,
                non_null_count: c.non_null_count(),
                null_count: c.null_count(),
            })
            .collect();

        Self {
            row_count: table.row_count(),
            columns,
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Total nulls across all columns.
    pub fn total_nulls(&self) -> usize {
        self.columns.iter().map(|c| c.null_count).sum()
    }

    /// Names of columns that still hold nulls.
    pub fn columns_with_nulls(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.null_count > 0)
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Get a column summary by name.
    pub fn column(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
