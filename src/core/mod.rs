pub mod aggregator;
pub mod config;
pub mod dot;
pub mod error;
pub mod normalizer;
pub mod payload;
pub mod render;
pub mod report;
pub mod types;

pub use aggregator::{ingest, Aggregation, Aggregator, Edge, StepRecord};
pub use config::{ConfigLoader, ConfigValidator, StepgraphConfig};
pub use error::AppError;
pub use normalizer::{normalize, Normalization, Normalizer};
pub use report::ReportLoader;
pub use types::*;
