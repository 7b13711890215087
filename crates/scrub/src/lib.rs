//! scrub: batch cleaning pipeline for tabular CSV datasets.
//!
//! A table is loaded from a CSV file and passed through a fixed sequence of
//! stages, each taking the table by value and returning the cleaned table:
//!
//! 1. **Deduplicate**: drop exact-duplicate rows, keeping first occurrences
//! 2. **Impute**: numeric nulls take the column median, others the mode
//! 3. **Normalize text**: trim and title-case text columns
//! 4. **Coerce dates**: parse columns whose name contains "date"
//! 5. **Clip outliers**: bound numeric columns with the 1.5 x IQR rule
//!
//! A read-only validation pass then summarizes the result, and the table is
//! written back out as CSV.
//!
//! Right after imputation no column holds a null. Date coercion runs later
//! and turns unparsable values back into nulls, so after the whole pipeline
//! only date-named columns may contain nulls.
//!
//! # Example
//!
//! ```no_run
//! use scrub::{MemorySink, Pipeline};
//!
//! let mut sink = MemorySink::new();
//! let report = Pipeline::new()
//!     .run("data/raw/raw_data.csv", "data/clean/clean_data.csv", &mut sink)
//!     .unwrap();
//!
//! println!("Rows: {} -> {}", report.rows_in, report.rows_out);
//! for line in sink.messages() {
//!     println!("{}", line);
//! }
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod input;
pub mod output;
pub mod sink;
pub mod transform;
pub mod validation;

mod pipeline;

pub use crate::pipeline::{CleanOutcome, Pipeline, PipelineReport};
pub use config::{AllNullPolicy, PipelineConfig};
pub use data::{Column, ColumnType, Table, Value};
pub use error::{Result, ScrubError};
pub use input::{Parser, ParserConfig, SourceMetadata};
pub use output::Writer;
pub use sink::{MemorySink, NullSink, StatusLevel, StatusSink, TracingSink};
pub use transform::Transform;
pub use validation::{ColumnSummary, ValidationReport, Validator};
