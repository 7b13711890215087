//! Writing cleaned tables.

mod writer;

pub use writer::Writer;
