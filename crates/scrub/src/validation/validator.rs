//! Diagnostic pass over the cleaned table.

use crate::data::Table;
use crate::sink::StatusSink;

use super::report::ValidationReport;

/// Reports structure and remaining nulls. Never mutates, never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    /// Summarize `table` and write the summary to `sink`.
    pub fn validate(&self, table: &Table, sink: &mut dyn StatusSink) -> ValidationReport {
        let report = ValidationReport::from_table(table);

        sink.info("--- Data Validation ---");
        sink.info(&format!(
            "{} rows x {} columns",
            report.row_count,
            report.column_count()
        ));

        let name_width = report
            .columns
            .iter()
            .map(|c| c.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("Column".len());

        sink.info(&format!(
            " #  {:<width$}  Non-Null Count  Dtype",
            "Column",
            width = name_width
        ));
        for (index, column) in report.columns.iter().enumerate() {
            sink.info(&format!(
                "{:>2}  {:<width$}  {:>8} non-null  {}",
                index,
                column.name,
                column.non_null_count,
                column.column_type,
                width = name_width
            ));
        }

        sink.info("Null values after cleaning:");
        for column in &report.columns {
            sink.info(&format!("{:<width$}  {}", column.name, column.null_count, width = name_width));
        }
        sink.info("-------------------------");

        tracing::debug!(
            rows = report.row_count,
            nulls = report.total_nulls(),
            "validated table"
        );
        report
    }
}
