//! Utility helpers: JSON serializers and output writers.
pub mod files;
pub mod serialization;

pub use files::{write_file, write_output};
pub use serialization::{to_json_bytes, JsonSerializer, PrettyJsonSerializer, Serializer};
