#![allow(clippy::result_large_err)]

use super::StepgraphConfig;
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;

pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration rules
    pub fn validate(config: &StepgraphConfig) -> Result<(), AppError> {
        if config.normalize.quote_placeholder.is_empty() {
            return Err(AppError::new(
                ErrorCategory::ValidationError,
                "normalize.quote_placeholder cannot be empty",
            ));
        }

        if config.normalize.number_placeholder.is_empty() {
            return Err(AppError::new(
                ErrorCategory::ValidationError,
                "normalize.number_placeholder cannot be empty",
            ));
        }

        if config.page.width == 0 || config.page.height == 0 {
            return Err(AppError::new(
                ErrorCategory::ValidationError,
                "page.width and page.height must be greater than zero",
            ));
        }

        Ok(())
    }
}
