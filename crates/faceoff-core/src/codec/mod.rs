//! JSON codecs backed by the three compared libraries
//!
//! Every codec exposes the same encode/decode pair over [`Record`] types but
//! keeps its library's own stance on `null` in non-nullable fields:
//!
//! - [`SerdeJsonCodec`] accepts it; the record carries an absent value.
//! - [`SonicCodec`] decodes into the record's strict shape and reports the
//!   mismatch as [`Error::DataValidation`].
//! - [`SimdJsonCodec`] decodes into the record's strict shape and fails
//!   with [`Error::Decode`].
//!
//! [`Error::DataValidation`]: crate::Error::DataValidation
//! [`Error::Decode`]: crate::Error::Decode

pub mod json;
pub mod simd;
pub mod sonic;

pub use json::SerdeJsonCodec;
pub use simd::SimdJsonCodec;
pub use sonic::SonicCodec;

use crate::{Result, record::Record};

/// Encode/decode interface shared by the compared libraries
pub trait JsonCodec {
    /// Library name as printed in reports
    fn name(&self) -> &'static str;

    /// Serialize a record to JSON text
    fn encode<T: Record>(&self, value: &T) -> Result<String>;

    /// Deserialize a record from JSON text
    fn decode<T: Record>(&self, input: &str) -> Result<T>;
}
