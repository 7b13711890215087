//! Pipeline configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrubError};
use crate::input::ParserConfig;

/// What the imputer does with a numeric column that has no values at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllNullPolicy {
    /// Fill every cell with zero.
    #[default]
    FillZero,
    /// Leave the nulls in place.
    LeaveNull,
    /// Abort the pipeline with [`ScrubError::AllNullColumn`].
    Error,
}

/// Configuration for a cleaning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// How the input file is read.
    pub parser: ParserConfig,
    /// Fill value for non-numeric columns with no values to take a mode from.
    pub categorical_fallback: String,
    /// Policy for numeric columns with no values to take a median from.
    pub all_null_policy: AllNullPolicy,
    /// IQR multiplier for outlier bounds.
    pub iqr_multiplier: f64,
    /// Case-insensitive substring marking a column as a date column.
    pub date_column_pattern: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            categorical_fallback: "Unknown".to_string(),
            all_null_policy: AllNullPolicy::default(),
            iqr_multiplier: 1.5,
            date_column_pattern: "date".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ScrubError::io(path, e))?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the stages cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !self.iqr_multiplier.is_finite() || self.iqr_multiplier < 0.0 {
            return Err(ScrubError::Config(format!(
                "iqr_multiplier must be a non-negative number, got {}",
                self.iqr_multiplier
            )));
        }
        if self.date_column_pattern.is_empty() {
            return Err(ScrubError::Config(
                "date_column_pattern must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
