//! Status reporting for pipeline stages.
//!
//! Stages never print. They hand human-readable lines to a [`StatusSink`]
//! supplied by the caller; the CLI prints them, tests collect them.

use serde::{Deserialize, Serialize};

/// Kind of status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLevel {
    /// Progress or diagnostic detail.
    Info,
    /// A stage finished.
    Success,
    /// A fallback policy was applied.
    Warning,
}

/// Receiver for status lines.
pub trait StatusSink {
    /// Receive one line.
    fn emit(&mut self, level: StatusLevel, message: &str);

    fn info(&mut self, message: &str) {
        self.emit(StatusLevel::Info, message);
    }

    fn success(&mut self, message: &str) {
        self.emit(StatusLevel::Success, message);
    }

    fn warn(&mut self, message: &str) {
        self.emit(StatusLevel::Warning, message);
    }
}

impl<S: StatusSink + ?Sized> StatusSink for &mut S {
    fn emit(&mut self, level: StatusLevel, message: &str) {
        (**self).emit(level, message);
    }
}

/// Collects status lines in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub lines: Vec<(StatusLevel, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in arrival order.
    pub fn messages(&self) -> Vec<&str> {
        self.lines.iter().map(|(_, m)| m.as_str()).collect()
    }

    /// Whether any message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|(_, m)| m.contains(needle))
    }

    /// Messages emitted at a given level.
    pub fn at_level(&self, level: StatusLevel) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.as_str())
            .collect()
    }
}

impl StatusSink for MemorySink {
    fn emit(&mut self, level: StatusLevel, message: &str) {
        self.lines.push((level, message.to_string()));
    }
}

/// Forwards status lines to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl StatusSink for TracingSink {
    fn emit(&mut self, level: StatusLevel, message: &str) {
        match level {
            StatusLevel::Warning => tracing::warn!(target: "scrub::status", "{}", message),
            StatusLevel::Info | StatusLevel::Success => {
                tracing::info!(target: "scrub::status", "{}", message)
            }
        }
    }
}

/// Discards status lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl StatusSink for NullSink {
    fn emit(&mut self, _level: StatusLevel, _message: &str) {}
}
