//! simd-json structural decoding into strict record shapes

use tracing::debug;

use super::JsonCodec;
use crate::{Error, Result, record::Record};

/// Strict codec: decodes into [`Record::Strict`], so `null` never reaches the record
#[derive(Debug, Clone, Copy, Default)]
pub struct SimdJsonCodec;

impl SimdJsonCodec {
    /// Library name
    pub const NAME: &'static str = "simd-json";

    /// Create a new codec
    pub fn new() -> Self {
        Self
    }
}

impl JsonCodec for SimdJsonCodec {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn encode<T: Record>(&self, value: &T) -> Result<String> {
        simd_json::serde::to_string(value).map_err(|e| Error::encode(Self::NAME, e))
    }

    fn decode<T: Record>(&self, input: &str) -> Result<T> {
        // simd-json parses in place and needs a mutable buffer
        let mut buffer = input.as_bytes().to_vec();
        let strict: T::Strict = simd_json::serde::from_slice(&mut buffer).map_err(|e| {
            debug!(record = T::NAME, error = %e, "simd-json decode failed");
            Error::decode(Self::NAME, e)
        })?;
        Ok(strict.into())
    }
}
