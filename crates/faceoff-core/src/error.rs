//! Error types for faceoff operations

/// Result type alias for faceoff operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for faceoff operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An absent value was read through the checked accessor
    #[error("NullField: {record}.{field} holds no value")]
    NullField {
        /// Record the field belongs to
        record: &'static str,
        /// Field name as it appears in JSON
        field: &'static str,
    },

    /// Decoded data violates the record's nullability contract
    #[error("DataValidation: {0}")]
    DataValidation(String),

    /// Library failed to decode the input
    #[error("Decode error in {library}: {message}")]
    Decode {
        /// Library that reported the failure
        library: &'static str,
        /// Library's own description
        message: String,
    },

    /// Library failed to encode the value
    #[error("Encode error in {library}: {message}")]
    Encode {
        /// Library that reported the failure
        library: &'static str,
        /// Library's own description
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),
}

impl Error {
    /// Create a null field error
    pub fn null_field(record: &'static str, field: &'static str) -> Self {
        Self::NullField { record, field }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation(message.into())
    }

    /// Create a decode error
    pub fn decode(library: &'static str, message: impl ToString) -> Self {
        Self::Decode {
            library,
            message: message.to_string(),
        }
    }

    /// Create an encode error
    pub fn encode(library: &'static str, message: impl ToString) -> Self {
        Self::Encode {
            library,
            message: message.to_string(),
        }
    }

    /// Whether this is a [`Error::NullField`]
    pub fn is_null_field(&self) -> bool {
        matches!(self, Self::NullField { .. })
    }

    /// Whether this is a [`Error::DataValidation`]
    pub fn is_data_validation(&self) -> bool {
        matches!(self, Self::DataValidation(_))
    }

    /// Whether this is a [`Error::Decode`]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
