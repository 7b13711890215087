//! Pipeline orchestration: load, clean, validate, persist.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::PipelineConfig;
use crate::data::Table;
use crate::error::Result;
use crate::input::{Parser, SourceMetadata};
use crate::output::Writer;
use crate::sink::StatusSink;
use crate::transform::{
    DateCoercer, Deduplicator, MissingValueImputer, OutlierClipper, TextNormalizer, Transform,
};
use crate::validation::{ValidationReport, Validator};

/// Result of cleaning an in-memory table.
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    /// The cleaned table.
    pub table: Table,
    /// Row count before deduplication.
    pub rows_in: usize,
    /// Validation summary of the cleaned table.
    pub validation: ValidationReport,
}

/// Result of a file-to-file run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineReport {
    /// Metadata about the input file.
    pub source: SourceMetadata,
    /// Rows read from the input.
    pub rows_in: usize,
    /// Rows written to the output.
    pub rows_out: usize,
    /// Validation summary of the written table.
    pub validation: ValidationReport,
    /// Where the cleaned table was written.
    pub output: PathBuf,
}

/// The cleaning pipeline.
///
/// Stages always run in the same order: deduplicate, impute, normalize text,
/// coerce dates, clip outliers, then validate.
pub struct Pipeline {
    config: PipelineConfig,
    parser: Parser,
    writer: Writer,
    imputer: MissingValueImputer,
    dates: DateCoercer,
    clipper: OutlierClipper,
}

impl Pipeline {
    /// Create a pipeline with default configuration.
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::default())
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: PipelineConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        let writer = Writer::with_delimiter(config.parser.delimiter);
        let imputer = MissingValueImputer::from_config(&config);
        let dates = DateCoercer::from_config(&config);
        let clipper = OutlierClipper::from_config(&config);

        Self {
            config,
            parser,
            writer,
            imputer,
            dates,
            clipper,
        }
    }

    /// Run every stage on an in-memory table.
    pub fn clean(&self, table: Table, sink: &mut dyn StatusSink) -> Result<CleanOutcome> {
        self.config.validate()?;

        let rows_in = table.row_count();
        let stages: [&dyn Transform; 5] = [
            &Deduplicator,
            &self.imputer,
            &TextNormalizer,
            &self.dates,
            &self.clipper,
        ];

        let mut table = table;
        for stage in stages {
            tracing::debug!(stage = stage.name(), rows = table.row_count(), "running stage");
            table = stage.apply(table, sink)?;
        }

        let validation = Validator.validate(&table, sink);

        Ok(CleanOutcome {
            table,
            rows_in,
            validation,
        })
    }

    /// Load `input`, clean it, and write the result to `output`.
    ///
    /// Missing parent directories of `output` are created. Load failures
    /// abort before any stage runs.
    pub fn run(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        sink: &mut dyn StatusSink,
    ) -> Result<PipelineReport> {
        let input = input.as_ref();
        let output = output.as_ref();

        sink.info(&format!("Loading dataset: {}", input.display()));
        let (table, source) = self.parser.parse_file(input)?;
        tracing::info!(
            path = %input.display(),
            rows = source.row_count,
            columns = source.column_count,
            hash = %source.hash,
            "loaded dataset"
        );

        let outcome = self.clean(table, sink)?;

        self.writer.write_file(&outcome.table, output)?;
        tracing::info!(path = %output.display(), rows = outcome.table.row_count(), "wrote dataset");
        sink.success(&format!("Cleaned dataset saved to: {}", output.display()));

        Ok(PipelineReport {
            source,
            rows_in: outcome.rows_in,
            rows_out: outcome.table.row_count(),
            validation: outcome.validation,
            output: output.to_path_buf(),
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
