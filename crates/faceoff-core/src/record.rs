//! Records used as serialization subjects
//!
//! Each record type describes its own decoding contract through [`Record`]:
//! the shape strict codecs decode into. Encode/decode functions themselves
//! come from serde derive.

use std::fmt;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::{Error, Result};

/// Per-type schema consulted by the codecs
pub trait Record: Serialize + DeserializeOwned + fmt::Debug + fmt::Display {
    /// Record name used in diagnostics
    const NAME: &'static str;

    /// Non-nullable shape decoded by strict codecs
    type Strict: DeserializeOwned + Into<Self>;
}

/// Record with a single identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct A {
    id: i32,
}

impl A {
    /// Create a new record
    pub const fn new(id: i32) -> Self {
        Self { id }
    }

    /// Identifier
    pub const fn id(&self) -> i32 {
        self.id
    }
}

impl fmt::Display for A {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A(id={})", self.id)
    }
}

impl Record for A {
    const NAME: &'static str = "A";
    type Strict = A;
}

/// Record with an identifier and a non-nullable text.
///
/// The text is stored as an `Option` because permissive decoders accept a
/// JSON `null` for it. Reading it through [`B::text`] surfaces that case as
/// [`Error::NullField`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct B {
    id: i32,
    #[serde(rename = "str")]
    text: Option<String>,
}

impl B {
    /// JSON key of the text field
    pub const TEXT_FIELD: &'static str = "str";

    /// Create a new record
    pub fn new(id: i32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: Some(text.into()),
        }
    }

    /// Identifier
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Text, failing with [`Error::NullField`] when absent
    pub fn text(&self) -> Result<&str> {
        self.text
            .as_deref()
            .ok_or_else(|| Error::null_field(Self::NAME, Self::TEXT_FIELD))
    }

    /// Text, if present
    pub fn text_opt(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl fmt::Display for B {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => write!(f, "B(id={}, str={})", self.id, text),
            None => write!(f, "B(id={}, str=null)", self.id),
        }
    }
}

impl Record for B {
    const NAME: &'static str = "B";
    type Strict = StrictB;
}

/// Decode shape of [`B`] in which the text cannot be `null`
#[derive(Debug, Deserialize)]
pub struct StrictB {
    id: i32,
    #[serde(rename = "str")]
    text: String,
}

impl From<StrictB> for B {
    fn from(strict: StrictB) -> Self {
        B::new(strict.id, strict.text)
    }
}
