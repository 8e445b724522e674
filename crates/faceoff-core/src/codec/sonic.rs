//! sonic-rs decoding with its type checks reported as data validation

use tracing::debug;

use super::JsonCodec;
use crate::{Error, Result, record::Record};

/// Validating codec: decodes into [`Record::Strict`] and reports values of the
/// wrong type, `null` included, as [`Error::DataValidation`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SonicCodec;

impl SonicCodec {
    /// Library name
    pub const NAME: &'static str = "sonic-rs";

    /// Create a new codec
    pub fn new() -> Self {
        Self
    }

    fn map_decode_error(err: sonic_rs::Error) -> Error {
        if err.is_unmatched_type() {
            Error::data_validation(err.to_string())
        } else {
            Error::decode(Self::NAME, err)
        }
    }
}

impl JsonCodec for SonicCodec {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn encode<T: Record>(&self, value: &T) -> Result<String> {
        sonic_rs::to_string(value).map_err(|e| Error::encode(Self::NAME, e))
    }

    fn decode<T: Record>(&self, input: &str) -> Result<T> {
        let strict: T::Strict = sonic_rs::from_str(input).map_err(|e| {
            debug!(record = T::NAME, error = %e, "sonic-rs decode failed");
            Self::map_decode_error(e)
        })?;
        Ok(strict.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fixtures::{JSON_INPUT, JSON_WITH_NULL},
        record::{A, B},
    };

    #[test]
    fn test_encode_a() {
        let json = SonicCodec::new().encode(&A::new(1)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["id"], 1);
    }

    #[test]
    fn test_decode_input() {
        let b: B = SonicCodec::new().decode(JSON_INPUT).unwrap();
        assert_eq!(b.id(), 3);
        assert_eq!(b.text().unwrap(), "string3");
    }

    #[test]
    fn test_null_text_fails_validation() {
        let err = SonicCodec::new().decode::<B>(JSON_WITH_NULL).unwrap_err();
        assert!(err.is_data_validation(), "unexpected error: {err:?}");

        let raw = sonic_rs::from_str::<crate::record::StrictB>(JSON_WITH_NULL).unwrap_err();
        assert!(raw.is_unmatched_type());
        assert_eq!(err, Error::DataValidation(raw.to_string()));
    }

    #[test]
    fn test_wrong_type_fails_validation() {
        let err = SonicCodec::new()
            .decode::<B>(r#"{ "id": 3, "str": 5 }"#)
            .unwrap_err();
        assert!(err.is_data_validation(), "unexpected error: {err:?}");
    }

    #[test]
    fn test_missing_text_fails_validation() {
        let err = SonicCodec::new().decode::<B>(r#"{"id": 9}"#).unwrap_err();
        assert!(err.is_data_validation());
    }

    #[test]
    fn test_malformed_input_is_decode_error() {
        let err = SonicCodec::new().decode::<A>(r#"{ "id": 1,, }"#).unwrap_err();
        assert!(matches!(err, Error::Decode { library: "sonic-rs", .. }));
    }
}
