use anyhow::Result;
use serde::Serialize;

/// Turns command results into the bytes written to their destination.
pub trait Serializer {
    fn serialize<T: Serialize>(&self, data: &T) -> Result<Vec<u8>>;
}

/// Compact single-line JSON.
pub struct JsonSerializer;

impl Serializer for JsonSerializer {
    fn serialize<T: Serialize>(&self, data: &T) -> Result<Vec<u8>> {
        serde_json::to_vec(data).map_err(Into::into)
    }
}

/// Two-space indented JSON.
pub struct PrettyJsonSerializer;

impl Serializer for PrettyJsonSerializer {
    fn serialize<T: Serialize>(&self, data: &T) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(data).map_err(Into::into)
    }
}

/// Serialize with the pretty or compact serializer.
pub fn to_json_bytes<T: Serialize>(data: &T, pretty: bool) -> Result<Vec<u8>> {
    if pretty {
        PrettyJsonSerializer.serialize(data)
    } else {
        JsonSerializer.serialize(data)
    }
}
