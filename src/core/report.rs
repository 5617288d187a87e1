#![allow(clippy::result_large_err)]

use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use serde_json::Value;
use std::fs;
use std::path::Path;
use stepgraph_types::Report;

/// Reads cucumber JSON reports from disk.
pub struct ReportLoader;

impl ReportLoader {
    /// Read and parse one report.
    ///
    /// Only unreadable files and invalid JSON are errors. A document whose top level
    /// is not an array is logged and read as an empty report.
    pub fn load(path: &Path) -> Result<Report, AppError> {
        let bytes = fs::read(path).map_err(|e| {
            AppError::with_source(
                ErrorCategory::IoError,
                format!("Failed to read report {}", path.display()),
                e,
            )
            .with_suggestion("Pass the cucumber JSON report path or set report.input")
        })?;

        Self::parse(&bytes).map_err(|e| e.with_context("path", path.display().to_string()))
    }

    /// Parse report bytes.
    pub fn parse(bytes: &[u8]) -> Result<Report, AppError> {
        let value: Value = serde_json::from_slice(bytes).map_err(|e| {
            AppError::with_source(ErrorCategory::ParseError, "Report is not valid JSON", e)
        })?;

        if !value.is_array() {
            tracing::warn!("report top level is not an array of features; nothing to aggregate");
        }

        let report = Report::from_value(value);
        tracing::debug!(
            features = report.features.len(),
            scenarios = report.scenario_count(),
            "parsed report"
        );
        Ok(report)
    }
}
