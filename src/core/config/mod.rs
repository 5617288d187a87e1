pub mod loader;
pub mod validation;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_FILE};
pub use validation::ConfigValidator;

use crate::core::normalizer::{Normalizer, DEFAULT_NUMBER_PLACEHOLDER, DEFAULT_QUOTE_PLACEHOLDER};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main stepgraph configuration loaded from stepgraph.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StepgraphConfig {
    /// Input and output locations
    #[serde(default)]
    pub report: ReportConfig,

    /// Step text normalization
    #[serde(default)]
    pub normalize: NormalizeConfig,

    /// HTML page settings
    #[serde(default)]
    pub page: PageConfig,
}

/// Report configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Cucumber JSON report read when no input is given on the command line
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Page written by `render` when no output is given
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

/// Normalization configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeConfig {
    /// Token replacing double-quoted literals
    #[serde(default = "default_quote_placeholder")]
    pub quote_placeholder: String,

    /// Token replacing digit runs
    #[serde(default = "default_number_placeholder")]
    pub number_placeholder: String,
}

/// Page configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub title: String,

    /// Canvas width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
}

impl NormalizeConfig {
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(&self.quote_placeholder, &self.number_placeholder)
    }
}

// Default functions
fn default_input() -> PathBuf {
    PathBuf::from("data").join("cucumber.json")
}

fn default_output() -> PathBuf {
    PathBuf::from("output.html")
}

fn default_quote_placeholder() -> String {
    DEFAULT_QUOTE_PLACEHOLDER.to_string()
}

fn default_number_placeholder() -> String {
    DEFAULT_NUMBER_PLACEHOLDER.to_string()
}

fn default_title() -> String {
    "Step relationships".to_string()
}

fn default_width() -> u32 {
    960
}

fn default_height() -> u32 {
    600
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            input: default_input(),
            output: default_output(),
        }
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        NormalizeConfig {
            quote_placeholder: default_quote_placeholder(),
            number_placeholder: default_number_placeholder(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            title: default_title(),
            width: default_width(),
            height: default_height(),
        }
    }
}
