//! Missing-value imputation.
//!
//! Numeric columns are filled with the median of their values, everything
//! else with its most frequent value. Right after this stage no column holds
//! a null, unless [`AllNullPolicy::LeaveNull`] kept one or the column is an
//! empty date-named column left for date coercion.

use indexmap::IndexMap;

use crate::config::{AllNullPolicy, PipelineConfig};
use crate::data::{Column, ColumnType, Table, Value};
use crate::error::{Result, ScrubError};
use crate::sink::StatusSink;

use super::Transform;
use super::dates::DateCoercer;
use super::stats;

/// Fills nulls column by column.
#[derive(Debug, Clone)]
pub struct MissingValueImputer {
    categorical_fallback: String,
    all_null_policy: AllNullPolicy,
    dates: DateCoercer,
}

impl MissingValueImputer {
    /// Create an imputer with the default fallback and policy.
    pub fn new() -> Self {
        Self::from_config(&PipelineConfig::default())
    }

    /// Create an imputer from pipeline settings.
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            categorical_fallback: config.categorical_fallback.clone(),
            all_null_policy: config.all_null_policy,
            dates: DateCoercer::from_config(config),
        }
    }

    fn impute_numeric(&self, column: &mut Column, sink: &mut dyn StatusSink) -> Result<()> {
        let nulls = column.null_count();

        let fill = match stats::median(&column.numeric_values()) {
            Some(median) => numeric_value(column.column_type, median),
            // An empty date-named column belongs to the date stage, which
            // turns it into a datetime column of nulls.
            None if self.dates.is_date_column(&column.name) => {
                tracing::debug!(column = %column.name, "left empty date column for coercion");
                return Ok(());
            }
            None => match self.all_null_policy {
                AllNullPolicy::FillZero => {
                    sink.warn(&format!(
                        "Column '{}' has no numeric values; filled {} nulls with 0.",
                        column.name, nulls
                    ));
                    tracing::warn!(column = %column.name, "all-null numeric column filled with zero");
                    numeric_value(column.column_type, 0.0)
                }
                AllNullPolicy::LeaveNull => {
                    sink.warn(&format!(
                        "Column '{}' has no numeric values; left {} nulls in place.",
                        column.name, nulls
                    ));
                    tracing::warn!(column = %column.name, "all-null numeric column left as null");
                    return Ok(());
                }
                AllNullPolicy::Error => {
                    return Err(ScrubError::AllNullColumn {
                        column: column.name.clone(),
                    });
                }
            },
        };

        tracing::debug!(column = %column.name, nulls, fill = %fill, "imputed median");
        fill_nulls(column, &fill);
        column.normalize_numeric_type();
        Ok(())
    }

    fn impute_categorical(&self, column: &mut Column) {
        let fill = most_frequent(&column.values)
            .unwrap_or_else(|| Value::Text(self.categorical_fallback.clone()));

        tracing::debug!(column = %column.name, fill = %fill, "imputed mode");
        fill_nulls(column, &fill);
    }
}

impl Default for MissingValueImputer {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for MissingValueImputer {
    fn name(&self) -> &'static str {
        "impute"
    }

    fn apply(&self, mut table: Table, sink: &mut dyn StatusSink) -> Result<Table> {
        for column in table.columns_mut() {
            if column.null_count() == 0 {
                continue;
            }

            if column.is_numeric() {
                self.impute_numeric(column, sink)?;
            } else {
                self.impute_categorical(column);
            }
        }

        sink.success("Missing values handled (numeric -> median, categorical -> mode).");
        Ok(table)
    }
}

/// Fill value for a numeric column, keeping integers integral when possible.
fn numeric_value(column_type: ColumnType, value: f64) -> Value {
    let integral = value.fract() == 0.0 && value.abs() < i64::MAX as f64;
    if column_type == ColumnType::Integer && integral {
        Value::Integer(value as i64)
    } else {
        Value::Float(value)
    }
}

/// Most frequent non-null value; ties go to the value seen first.
pub fn most_frequent(values: &[Value]) -> Option<Value> {
    let mut counts: IndexMap<_, (usize, &Value)> = IndexMap::new();
    for value in values.iter().filter(|v| !v.is_null()) {
        counts.entry(value.key()).or_insert((0, value)).0 += 1;
    }

    let mut best: Option<(usize, &Value)> = None;
    for &(count, value) in counts.values() {
        if best.is_none_or(|(best_count, _)| count > best_count) {
            best = Some((count, value));
        }
    }
    best.map(|(_, value)| value.clone())
}

fn fill_nulls(column: &mut Column, fill: &Value) {
    for value in column.values.iter_mut().filter(|v| v.is_null()) {
        *value = fill.clone();
    }
}
