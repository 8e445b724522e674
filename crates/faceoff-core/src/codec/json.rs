//! serde_json with its default configuration

use tracing::debug;

use super::JsonCodec;
use crate::{Error, Result, record::Record};

/// Permissive codec: `null` in a non-nullable field decodes to an absent value
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeJsonCodec;

impl SerdeJsonCodec {
    /// Library name
    pub const NAME: &'static str = "serde_json";

    /// Create a new codec
    pub fn new() -> Self {
        Self
    }
}

impl JsonCodec for SerdeJsonCodec {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn encode<T: Record>(&self, value: &T) -> Result<String> {
        serde_json::to_string(value).map_err(|e| Error::encode(Self::NAME, e))
    }

    fn decode<T: Record>(&self, input: &str) -> Result<T> {
        serde_json::from_str(input).map_err(|e| {
            debug!(record = T::NAME, error = %e, "serde_json decode failed");
            Error::decode(Self::NAME, e)
        })
    }
}
