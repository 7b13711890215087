//! The cleaning stages.
//!
//! Each stage takes ownership of a [`Table`] and returns the cleaned table.
//! The pipeline hands the table from one stage to the next, so no stage ever
//! sees a table another stage still holds.

mod dates;
mod dedup;
mod impute;
mod outliers;
mod stats;
mod text;

pub use dates::{DateCoercer, SkipReason, parse_datetime};
pub use dedup::Deduplicator;
pub use impute::{MissingValueImputer, most_frequent};
pub use outliers::{IqrBounds, OutlierClipper};
pub use stats::{median, quantile, quartiles};
pub use text::{TextNormalizer, normalize_text, title_case};

use crate::data::Table;
use crate::error::Result;
use crate::sink::StatusSink;

/// A table-to-table cleaning step.
pub trait Transform {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Run the stage, reporting what it did to `sink`.
    fn apply(&self, table: Table, sink: &mut dyn StatusSink) -> Result<Table>;
}
