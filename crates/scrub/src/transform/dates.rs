//! Date coercion for date-named columns.
//!
//! Coercion runs after imputation, so a value that fails to parse turns back
//! into a null. After the full pipeline only date-named columns may hold
//! nulls.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::PipelineConfig;
use crate::data::{Column, ColumnType, Table, Value};
use crate::error::Result;
use crate::sink::StatusSink;

use super::Transform;

/// Ordinal day suffixes ("15th", "1st").
static ORDINAL_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d{1,2})(st|nd|rd|th)\b").expect("valid ordinal regex"));

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%b %d %Y",
    "%B %d %Y",
    "%d %b %Y",
    "%d %B %Y",
    "%d-%b-%Y",
    "%d-%B-%Y",
    "%Y %b %d",
    "%Y %B %d",
    "%m/%d/%y",
    "%d-%b-%y",
];

/// Why a date-named column is left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Already holds datetimes.
    AlreadyDateTime,
    /// Float or boolean values cannot be calendar dates.
    NonDateType(ColumnType),
    /// Not a single value parses.
    NoParsableValues,
}

impl SkipReason {
    fn describe(&self) -> String {
        match self {
            SkipReason::AlreadyDateTime => "already datetime".to_string(),
            SkipReason::NonDateType(t) => format!("{} values are not dates", t),
            SkipReason::NoParsableValues => "no value parses as a date".to_string(),
        }
    }
}

/// Converts date-named columns to datetimes.
#[derive(Debug, Clone)]
pub struct DateCoercer {
    pattern: String,
}

impl DateCoercer {
    /// Create a coercer matching column names containing "date".
    pub fn new() -> Self {
        Self::from_config(&PipelineConfig::default())
    }

    /// Create a coercer from pipeline settings.
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            pattern: config.date_column_pattern.to_lowercase(),
        }
    }

    /// Whether a column name marks a date column (case-insensitive substring).
    pub fn is_date_column(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.pattern)
    }

    /// Type-level decision: `Some` when the column's values cannot be dates.
    ///
    /// A float or boolean column with no values at all is only missing data
    /// and is coerced to an all-null datetime column.
    fn skip_reason(column: &Column) -> Option<SkipReason> {
        match column.column_type {
            ColumnType::DateTime => Some(SkipReason::AlreadyDateTime),
            t @ (ColumnType::Float | ColumnType::Boolean) if column.non_null_count() > 0 => {
                Some(SkipReason::NonDateType(t))
            }
            _ => None,
        }
    }

    /// Coerce one column in place. Returns the number of values that failed
    /// to parse, or why the column was skipped.
    fn coerce_column(column: &mut Column) -> std::result::Result<usize, SkipReason> {
        if let Some(reason) = Self::skip_reason(column) {
            return Err(reason);
        }

        let parsed: Vec<Option<NaiveDateTime>> = column
            .values
            .iter()
            .map(|v| match v {
                Value::Null => None,
                other => parse_datetime(&other.to_string()),
            })
            .collect();

        let failed = column
            .values
            .iter()
            .zip(&parsed)
            .filter(|(v, p)| !v.is_null() && p.is_none())
            .count();

        if failed > 0 && failed == column.non_null_count() {
            return Err(SkipReason::NoParsableValues);
        }

        column.values = parsed
            .into_iter()
            .map(|p| p.map_or(Value::Null, Value::DateTime))
            .collect();
        column.column_type = ColumnType::DateTime;

        Ok(failed)
    }
}

impl Default for DateCoercer {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for DateCoercer {
    fn name(&self) -> &'static str {
        "coerce_dates"
    }

    fn apply(&self, mut table: Table, sink: &mut dyn StatusSink) -> Result<Table> {
        for column in table.columns_mut() {
            if !self.is_date_column(&column.name) {
                continue;
            }

            match Self::coerce_column(column) {
                Ok(failed) => {
                    tracing::debug!(column = %column.name, failed, "coerced date column");
                    if failed > 0 {
                        sink.info(&format!(
                            "Column '{}': {} values could not be parsed as dates and were set to null.",
                            column.name, failed
                        ));
                    }
                }
                Err(reason) => {
                    tracing::debug!(column = %column.name, ?reason, "skipped date column");
                    sink.info(&format!(
                        "Column '{}' left unchanged: {}.",
                        column.name,
                        reason.describe()
                    ));
                }
            }
        }

        sink.success("Date columns converted to datetime where possible.");
        Ok(table)
    }
}

/// Best-effort parse of a date or date-time string.
///
/// Accepts RFC 3339, ISO dates and date-times, slash/dash/dot separated
/// day-month-year orders, compact `YYYYMMDD` and month-name forms. Returns
/// `None` for anything else.
pub fn parse_datetime(input: &str) -> Option<NaiveDateTime> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(&trimmed.to_ascii_uppercase()) {
        return Some(dt.naive_utc());
    }

    if trimmed.len() == 8 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return parse_compact(trimmed);
    }

    let cleaned = clean_for_parsing(trimmed);

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&cleaned, format) {
            if plausible_year(dt.date()) {
                return Some(dt);
            }
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&cleaned, format) {
            if plausible_year(date) {
                return date.and_hms_opt(0, 0, 0);
            }
        }
    }

    None
}

/// Drop commas and ordinal suffixes, collapse runs of whitespace.
fn clean_for_parsing(s: &str) -> String {
    let without_ordinals = ORDINAL_SUFFIX.replace_all(s, "$1");
    without_ordinals
        .replace(',', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_compact(s: &str) -> Option<NaiveDateTime> {
    let year = s.get(0..4)?.parse().ok()?;
    let month = s.get(4..6)?.parse().ok()?;
    let day = s.get(6..8)?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)
}

// Keeps two-digit years from matching four-digit patterns as year 0024.
fn plausible_year(date: NaiveDate) -> bool {
    use chrono::Datelike;
    (1000..=9999).contains(&date.year())
}
