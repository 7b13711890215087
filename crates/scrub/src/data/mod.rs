//! In-memory table representation.

mod column;
mod table;
mod types;
mod value;

pub use column::Column;
pub use table::Table;
pub use types::ColumnType;
pub use value::{Value, ValueKey};
