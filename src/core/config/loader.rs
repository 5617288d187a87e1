#![allow(clippy::result_large_err)]

use super::{ConfigValidator, StepgraphConfig};
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use std::env;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "stepgraph.toml";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from `explicit` or, when absent, from ./stepgraph.toml.
    /// Environment variables override config file values.
    /// A missing default file means defaults; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<StepgraphConfig, AppError> {
        let config_file = match explicit {
            Some(path) => Some(Self::load_from_file(path)?.ok_or_else(|| {
                AppError::new(
                    ErrorCategory::IoError,
                    format!("Config file {} does not exist", path.display()),
                )
            })?),
            None => Self::load_from_file(Path::new(DEFAULT_CONFIG_FILE))?,
        };

        let mut config = config_file.unwrap_or_default();

        Self::apply_env_overrides(&mut config);
        ConfigValidator::validate(&config)?;

        Ok(config)
    }

    /// Load config from specific file path
    /// Returns Ok(None) if file doesn't exist
    pub fn load_from_file(path: &Path) -> Result<Option<StepgraphConfig>, AppError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::new(
                ErrorCategory::IoError,
                format!("Failed to read config file {}: {}", path.display(), e),
            )
        })?;

        let config: StepgraphConfig = toml::from_str(&content).map_err(|e| {
            AppError::new(
                ErrorCategory::ParseError,
                format!("Failed to parse config file {}: {}", path.display(), e),
            )
        })?;

        Ok(Some(config))
    }

    /// Apply environment variable overrides to the configuration
    fn apply_env_overrides(config: &mut StepgraphConfig) {
        if let Ok(input) = env::var("STEPGRAPH_INPUT") {
            config.report.input = PathBuf::from(input);
        }

        if let Ok(output) = env::var("STEPGRAPH_OUTPUT") {
            config.report.output = PathBuf::from(output);
        }

        if let Ok(placeholder) = env::var("STEPGRAPH_QUOTE_PLACEHOLDER") {
            config.normalize.quote_placeholder = placeholder;
        }

        if let Ok(placeholder) = env::var("STEPGRAPH_NUMBER_PLACEHOLDER") {
            config.normalize.number_placeholder = placeholder;
        }

        if let Ok(title) = env::var("STEPGRAPH_PAGE_TITLE") {
            config.page.title = title;
        }
    }
}
