#![allow(clippy::result_large_err)]

use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Write `content` to `path`, creating missing parent directories.
pub fn write_file(path: &Path, content: &[u8]) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            AppError::with_source(
                ErrorCategory::IoError,
                format!("Failed to create directory {}", parent.display()),
                e,
            )
        })?;
    }

    fs::write(path, content).map_err(|e| {
        AppError::with_source(
            ErrorCategory::IoError,
            format!("Failed to write {}", path.display()),
            e,
        )
        .with_suggestion("Check that the output location is writable")
    })
}

/// Write to `path` when given, otherwise to stdout followed by a newline.
pub fn write_output(path: Option<&Path>, content: &[u8]) -> Result<(), AppError> {
    match path {
        Some(path) => write_file(path, content),
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(content)?;
            handle.write_all(b"\n")?;
            handle.flush()?;
            Ok(())
        }
    }
}
