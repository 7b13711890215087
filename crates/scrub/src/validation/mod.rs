//! Read-only validation of a cleaned table.

mod report;
mod validator;

pub use report::{ColumnSummary, ValidationReport};
pub use validator::Validator;
