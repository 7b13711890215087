//! IQR-based outlier clipping.

use crate::config::PipelineConfig;
use crate::data::{Column, ColumnType, Table, Value};
use crate::error::Result;
use crate::sink::StatusSink;

use super::Transform;
use super::stats;

/// Clipping bounds derived from a column's quartiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IqrBounds {
    pub q1: f64,
    pub q3: f64,
    pub lower: f64,
    pub upper: f64,
}

impl IqrBounds {
    /// Bounds `[q1 - k*iqr, q3 + k*iqr]` over the finite values.
    pub fn from_values(values: &[f64], multiplier: f64) -> Option<Self> {
        let (q1, q3) = stats::quartiles(values)?;
        let iqr = q3 - q1;
        Some(Self {
            q1,
            q3,
            lower: q1 - multiplier * iqr,
            upper: q3 + multiplier * iqr,
        })
    }

    /// Interquartile range.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Clamp a value into the bounds. NaN passes through.
    pub fn clip(&self, value: f64) -> f64 {
        if value < self.lower {
            self.lower
        } else if value > self.upper {
            self.upper
        } else {
            value
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Clips every numeric column to its IQR bounds.
#[derive(Debug, Clone)]
pub struct OutlierClipper {
    multiplier: f64,
}

impl OutlierClipper {
    /// Create a clipper with the conventional 1.5 multiplier.
    pub fn new() -> Self {
        Self::from_config(&PipelineConfig::default())
    }

    /// Create a clipper from pipeline settings.
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            multiplier: config.iqr_multiplier,
        }
    }

    fn clip_column(&self, column: &mut Column) -> Option<(IqrBounds, usize)> {
        let bounds = IqrBounds::from_values(&column.numeric_values(), self.multiplier)?;
        let integer_column = column.column_type == ColumnType::Integer;
        let mut clipped = 0;

        for value in column.values.iter_mut() {
            let Some(original) = value.as_f64() else {
                continue;
            };
            if bounds.contains(original) || original.is_nan() {
                continue;
            }

            let bound = bounds.clip(original);
            *value = if integer_column && bound.fract() == 0.0 {
                Value::Integer(bound as i64)
            } else {
                Value::Float(bound)
            };
            clipped += 1;
        }

        column.normalize_numeric_type();
        Some((bounds, clipped))
    }
}

impl Default for OutlierClipper {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for OutlierClipper {
    fn name(&self) -> &'static str {
        "clip_outliers"
    }

    fn apply(&self, mut table: Table, sink: &mut dyn StatusSink) -> Result<Table> {
        for column in table.columns_mut() {
            if !column.is_numeric() {
                continue;
            }

            let Some((bounds, clipped)) = self.clip_column(column) else {
                continue;
            };

            tracing::debug!(
                column = %column.name,
                lower = bounds.lower,
                upper = bounds.upper,
                clipped,
                "clipped outliers"
            );
            if clipped > 0 {
                sink.info(&format!(
                    "Column '{}': clipped {} values to [{}, {}].",
                    column.name, clipped, bounds.lower, bounds.upper
                ));
            }
        }

        sink.success("Outliers clipped using IQR method.");
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Parser;
    use crate::sink::MemorySink;

    fn clip(csv: &str) -> Table {
        let table = Parser::new().parse_bytes(csv.as_bytes()).unwrap();
        OutlierClipper::new()
            .apply(table, &mut MemorySink::new())
            .unwrap()
    }

    #[test]
    fn test_bounds() {
        let bounds = IqrBounds::from_values(&[1.0, 2.0, 3.0, 4.0], 1.5).unwrap();
        assert_eq!(bounds.q1, 1.75);
        assert_eq!(bounds.q3, 3.25);
        assert_eq!(bounds.iqr(), 1.5);
        assert_eq!(bounds.lower, -0.5);
        assert_eq!(bounds.upper, 5.5);
    }

    #[test]
    fn test_clips_high_outlier_to_upper_bound() {
        let output = clip("score\n10.0\n11.0\n12.0\n13.0\n1000.0\n");
        let score = output.column("score").unwrap();
        // q1 = 11, q3 = 13, iqr = 2, upper = 16
        assert_eq!(score.values[4], Value::Float(16.0));
        assert_eq!(score.values[0], Value::Float(10.0));
    }

    #[test]
    fn test_clips_low_outlier() {
        let output = clip("score\n-1000.0\n10.0\n11.0\n12.0\n13.0\n");
        let score = output.column("score").unwrap();
        // q1 = 10, q3 = 12, iqr = 2, lower = 7
        assert_eq!(score.values[0], Value::Float(7.0));
    }

    #[test]
    fn test_integer_column_stays_integer_on_integral_bounds() {
        let output = clip("n\n10\n11\n12\n13\n1000\n");
        let n = output.column("n").unwrap();
        assert_eq!(n.column_type, ColumnType::Integer);
        assert_eq!(n.values[4], Value::Integer(16));
    }

    #[test]
    fn test_integer_column_promoted_on_fractional_bound() {
        let output = clip("n\n1\n2\n3\n4\n100\n");
        let n = output.column("n").unwrap();
        // q1 = 2, q3 = 4, iqr = 2, upper = 7
        assert_eq!(n.values[4], Value::Integer(7));

        let output = clip("n\n1\n2\n3\n4\n");
        assert_eq!(output.column("n").unwrap().column_type, ColumnType::Integer);

        let output = clip("n\n0\n1\n1\n2\n50\n");
        let n = output.column("n").unwrap();
        // q1 = 1, q3 = 2, iqr = 1, upper = 3.5
        assert_eq!(n.column_type, ColumnType::Float);
        assert_eq!(n.values[4], Value::Float(3.5));
    }

    #[test]
    fn test_zero_variance_collapses() {
        let output = clip("n\n5.0\n");
        assert_eq!(output.column("n").unwrap().values, vec![Value::Float(5.0)]);
    }

    #[test]
    fn test_text_columns_untouched() {
        let output = clip("name,n\nx,1\ny,2\n");
        assert_eq!(output.column("name").unwrap().values[0], Value::Text("x".to_string()));
    }
}
