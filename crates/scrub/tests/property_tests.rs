//! Property-based tests for the cleaning stages.
//!
//! These check structural guarantees over arbitrary tables rather than
//! exact outputs.

use proptest::prelude::*;

use scrub::transform::{
    Deduplicator, IqrBounds, MissingValueImputer, OutlierClipper, Transform, normalize_text,
    parse_datetime,
};
use scrub::{Column, ColumnType, NullSink, Parser, Pipeline, Table, Value};

// =============================================================================
// Strategies
// =============================================================================

/// Small integer cells with frequent nulls so duplicates are common.
fn int_cell() -> impl Strategy<Value = Value> {
    prop_oneof![
        1 => Just(Value::Null),
        4 => (0i64..4).prop_map(Value::Integer),
    ]
}

fn text_cell() -> impl Strategy<Value = Value> {
    prop_oneof![
        1 => Just(Value::Null),
        4 => prop::sample::select(vec!["a", "b", " c ", "D"]).prop_map(|s| Value::Text(s.to_string())),
    ]
}

/// Two-column table of integers and text.
fn small_table() -> impl Strategy<Value = Table> {
    (0usize..30).prop_flat_map(|rows| {
        (
            prop::collection::vec(int_cell(), rows),
            prop::collection::vec(text_cell(), rows),
        )
            .prop_map(|(ints, texts)| {
                Table::new(vec![
                    Column::new("n", ColumnType::Integer, ints),
                    Column::new("label", ColumnType::String, texts),
                ])
                .unwrap()
            })
    })
}

/// Float column with at least one value.
fn float_column() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6f64..1.0e6, 1..50)
}

/// Words with mixed case, accents and surrounding whitespace.
fn messy_text() -> impl Strategy<Value = String> {
    "[ \\ta-zA-Z0-9éÉßñÑ'.-]{0,30}"
}

fn date_like() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{4}-[0-9]{2}-[0-9]{2}",
        "[0-9]{2}/[0-9]{2}/[0-9]{4}",
        "[0-9]{8}",
        "[A-Za-z]{3} [0-9]{1,2}(st|nd|rd|th)?,? [0-9]{4}",
        "[0-9]{4}-[0-9]{2}-[0-9]{2}[Tt ][0-9]{2}:[0-9]{2}(:[0-9]{2})?([Zz]|[+-][0-9]{2}:[0-9]{2})?",
        ".{0,40}",
    ]
}

fn rendered_rows(table: &Table) -> Vec<Vec<String>> {
    (0..table.row_count())
        .map(|row| {
            table
                .columns()
                .iter()
                .map(|c| c.render(row, false))
                .collect()
        })
        .collect()
}

// =============================================================================
// Deduplication
// =============================================================================

mod dedup_tests {
    use super::*;

    proptest! {
        #[test]
        fn output_rows_are_distinct(table in small_table()) {
            let output = Deduplicator.apply(table, &mut NullSink).unwrap();
            let rows = rendered_rows(&output);
            let mut unique = rows.clone();
            unique.sort();
            unique.dedup();
            prop_assert_eq!(unique.len(), rows.len());
        }

        #[test]
        fn keeps_first_occurrences_in_order(table in small_table()) {
            let input_rows = rendered_rows(&table);
            let output = Deduplicator.apply(table, &mut NullSink).unwrap();

            let mut expected: Vec<Vec<String>> = Vec::new();
            for row in input_rows {
                if !expected.contains(&row) {
                    expected.push(row);
                }
            }
            prop_assert_eq!(rendered_rows(&output), expected);
        }

        #[test]
        fn deduplication_is_idempotent(table in small_table()) {
            let once = Deduplicator.apply(table, &mut NullSink).unwrap();
            let twice = Deduplicator.apply(once.clone(), &mut NullSink).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}

// =============================================================================
// Imputation
// =============================================================================

mod impute_tests {
    use super::*;

    proptest! {
        #[test]
        fn no_nulls_after_imputation(table in small_table()) {
            let output = MissingValueImputer::new().apply(table, &mut NullSink).unwrap();
            for column in output.columns() {
                prop_assert_eq!(column.null_count(), 0, "column {}", column.name);
            }
        }

        #[test]
        fn non_null_values_untouched(table in small_table()) {
            let output = MissingValueImputer::new().apply(table.clone(), &mut NullSink).unwrap();
            for (before, after) in table.columns().iter().zip(output.columns()) {
                for (b, a) in before.values.iter().zip(&after.values) {
                    if !b.is_null() {
                        prop_assert_eq!(b.as_f64(), a.as_f64());
                        prop_assert_eq!(b.as_str(), a.as_str());
                    }
                }
            }
        }
    }
}

// =============================================================================
// Text Normalization
// =============================================================================

mod text_tests {
    use super::*;

    proptest! {
        #[test]
        fn normalize_text_is_idempotent(s in messy_text()) {
            let once = normalize_text(&s);
            prop_assert_eq!(normalize_text(&once), once);
        }

        #[test]
        fn normalized_text_is_trimmed(s in messy_text()) {
            let normalized = normalize_text(&s);
            prop_assert_eq!(normalized.trim(), normalized.as_str());
        }
    }
}

// =============================================================================
// Outlier Clipping
// =============================================================================

mod outlier_tests {
    use super::*;

    proptest! {
        #[test]
        fn clipped_values_within_pre_clip_bounds(values in float_column()) {
            let bounds = IqrBounds::from_values(&values, 1.5).unwrap();
            let column = Column::new(
                "x",
                ColumnType::Float,
                values.iter().copied().map(Value::Float).collect(),
            );
            let table = Table::new(vec![column]).unwrap();

            let output = OutlierClipper::new().apply(table, &mut NullSink).unwrap();
            for value in output.columns()[0].numeric_values() {
                prop_assert!(value >= bounds.lower && value <= bounds.upper);
            }
        }

        #[test]
        fn inliers_unchanged(values in float_column()) {
            let bounds = IqrBounds::from_values(&values, 1.5).unwrap();
            let column = Column::new(
                "x",
                ColumnType::Float,
                values.iter().copied().map(Value::Float).collect(),
            );
            let table = Table::new(vec![column]).unwrap();

            let output = OutlierClipper::new().apply(table, &mut NullSink).unwrap();
            for (before, after) in values.iter().zip(output.columns()[0].numeric_values()) {
                if bounds.contains(*before) {
                    prop_assert_eq!(*before, after);
                }
            }
        }
    }
}

// =============================================================================
// Robustness
// =============================================================================

mod robustness_tests {
    use super::*;

    proptest! {
        #[test]
        fn parse_datetime_never_panics(s in date_like()) {
            let _ = parse_datetime(&s);
        }

        #[test]
        fn parser_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
            let _ = Parser::new().parse_bytes(&bytes);
        }

        #[test]
        fn pipeline_handles_arbitrary_csv(
            rows in prop::collection::vec(
                ("[0-9]{0,3}", "[ a-zA-Z]{0,8}", date_like()),
                0..20,
            )
        ) {
            let mut csv = String::from("id,name,signup_date\n");
            for (id, name, date) in &rows {
                let date = date.replace(['"', ',', '\n', '\r'], "");
                csv.push_str(&format!("{},{},{}\n", id, name, date));
            }

            let table = Parser::new().parse_bytes(csv.as_bytes()).unwrap();
            let outcome = Pipeline::new().clean(table, &mut NullSink).unwrap();

            // Only the date column may hold nulls once every stage has run.
            for column in outcome.table.columns() {
                if column.name != "signup_date" {
                    prop_assert_eq!(column.null_count(), 0, "column {}", column.name);
                }
            }
            prop_assert!(outcome.table.row_count() <= outcome.rows_in);
        }
    }
}
