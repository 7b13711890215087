//! CSV parser producing typed tables.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::data::{Column, Table};
use crate::error::{Result, ScrubError};
use super::source::SourceMetadata;

/// Cell contents read as missing values (the common pandas defaults).
const DEFAULT_NULL_TOKENS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NULL", "null", "NaN", "nan", "-NaN", "-nan", "None", "<NA>",
    "#N/A", "#NA", "#N/A N/A", "-1.#IND", "1.#IND", "-1.#QNAN", "1.#QNAN",
];

/// Parser configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Quote character.
    pub quote: u8,
    /// Exact cell contents treated as null.
    pub null_tokens: Vec<String>,
    /// Trim surrounding whitespace before matching null tokens.
    pub trim_null_tokens: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            null_tokens: DEFAULT_NULL_TOKENS.iter().map(|s| s.to_string()).collect(),
            trim_null_tokens: false,
        }
    }
}

/// Parses delimited files into [`Table`]s.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the table and metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(Table, SourceMetadata)> {
        let path = path.as_ref();

        let contents = std::fs::read(path).map_err(|e| ScrubError::io(path, e))?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let table = self.parse_bytes(&contents)?;

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            table.row_count(),
            table.column_count(),
        );

        Ok((table, metadata))
    }

    /// Parse bytes directly.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .quote(self.config.quote)
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
        if headers.is_empty() {
            return Err(ScrubError::EmptyData("No header row found".to_string()));
        }
        let headers = unique_headers(headers);

        let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];

        for result in reader.records() {
            let record = result?;

            // Short rows are padded with nulls; extra fields are dropped.
            for (index, column) in cells.iter_mut().enumerate() {
                let cell = record
                    .get(index)
                    .filter(|s| !self.is_null_token(s))
                    .map(|s| s.to_string());
                column.push(cell);
            }
        }

        let columns = headers
            .into_iter()
            .zip(cells)
            .map(|(name, raw)| Column::from_raw(name, raw))
            .collect();

        Table::new(columns)
    }

    /// Check whether a cell is one of the configured null tokens.
    pub fn is_null_token(&self, cell: &str) -> bool {
        let probe = if self.config.trim_null_tokens {
            cell.trim()
        } else {
            cell
        };
        self.config.null_tokens.iter().any(|t| t == probe)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Make repeated header names unique by suffixing `.1`, `.2`, ...
fn unique_headers(headers: Vec<String>) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(headers.len());
    for header in headers {
        let mut candidate = header.clone();
        let mut suffix = 1;
        while result.contains(&candidate) {
            candidate = format!("{}.{}", header, suffix);
            suffix += 1;
        }
        result.push(candidate);
    }
    result
}
