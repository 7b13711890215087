//! Column storage and type inference.

use chrono::Timelike;

use super::types::ColumnType;
use super::value::Value;

/// A named column of values sharing one inferred type.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name, unique within its table.
    pub name: String,
    /// Inferred data type.
    pub column_type: ColumnType,
    /// Cell values in row order.
    pub values: Vec<Value>,
}

impl Column {
    /// Create a column with an explicit type.
    pub fn new(name: impl Into<String>, column_type: ColumnType, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            column_type,
            values,
        }
    }

    /// Build a column from raw cells, inferring its type.
    ///
    /// `None` cells and NaN floats are nulls. Integer wins over float, float over boolean,
    /// anything else is kept as text. A column with rows but no non-null
    /// cells is a float column of missing numbers; a column with no rows
    /// is text.
    pub fn from_raw(name: impl Into<String>, raw: Vec<Option<String>>) -> Self {
        let column_type = infer_type(&raw);

        let values = raw
            .into_iter()
            .map(|cell| match cell {
                None => Value::Null,
                Some(s) => parse_cell(s, column_type),
            })
            .collect();

        Self::new(name, column_type, values)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of null cells.
    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }

    /// Number of non-null cells.
    pub fn non_null_count(&self) -> usize {
        self.len() - self.null_count()
    }

    /// Whether the column's type is numeric.
    pub fn is_numeric(&self) -> bool {
        self.column_type.is_numeric()
    }

    /// Non-null numeric values in row order.
    pub fn numeric_values(&self) -> Vec<f64> {
        self.values.iter().filter_map(Value::as_f64).collect()
    }

    /// Promote an integer column to float once any float value is present.
    pub fn normalize_numeric_type(&mut self) {
        if self.column_type != ColumnType::Integer {
            return;
        }
        if !self.values.iter().any(|v| matches!(v, Value::Float(_))) {
            return;
        }

        for value in &mut self.values {
            if let Value::Integer(i) = value {
                *value = Value::Float(*i as f64);
            }
        }
        self.column_type = ColumnType::Float;
    }

    /// Whether every datetime in the column falls on midnight.
    pub fn is_date_only(&self) -> bool {
        self.values.iter().all(|v| match v {
            Value::DateTime(dt) => dt.num_seconds_from_midnight() == 0 && dt.nanosecond() == 0,
            _ => true,
        })
    }

    /// Render a cell for output.
    pub fn render(&self, row: usize, date_only: bool) -> String {
        match self.values.get(row) {
            Some(Value::DateTime(dt)) if date_only => dt.format("%Y-%m-%d").to_string(),
            Some(value) => value.to_string(),
            None => String::new(),
        }
    }
}

fn infer_type(raw: &[Option<String>]) -> ColumnType {
    if raw.is_empty() {
        return ColumnType::String;
    }

    let present: Vec<&str> = raw.iter().filter_map(|c| c.as_deref()).collect();
    if present.is_empty() {
        return ColumnType::Float;
    }

    if present.iter().all(|s| s.trim().parse::<i64>().is_ok()) {
        ColumnType::Integer
    } else if present.iter().all(|s| s.trim().parse::<f64>().is_ok()) {
        ColumnType::Float
    } else if present.iter().all(|s| parse_bool(s).is_some()) {
        ColumnType::Boolean
    } else {
        ColumnType::String
    }
}

fn parse_cell(cell: String, column_type: ColumnType) -> Value {
    let parsed = match column_type {
        ColumnType::Integer => cell.trim().parse::<i64>().ok().map(Value::Integer),
        // NaN spellings that slipped past the null tokens (" NaN") are missing.
        ColumnType::Float => match cell.trim().parse::<f64>() {
            Ok(v) if v.is_nan() => Some(Value::Null),
            Ok(v) => Some(Value::Float(v)),
            Err(_) => None,
        },
        ColumnType::Boolean => parse_bool(&cell).map(Value::Boolean),
        ColumnType::String | ColumnType::DateTime => None,
    };
    parsed.unwrap_or(Value::Text(cell))
}

fn parse_bool(s: &str) -> Option<bool> {
    let trimmed = s.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Some(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
