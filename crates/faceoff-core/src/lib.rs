//! # faceoff
//!
//! Side-by-side demonstration of three JSON libraries, `serde_json`,
//! `sonic-rs` and `simd-json`, on two small records.
//!
//! Each library gets a narrated demo of how it treats a `null` in a
//! non-nullable field, followed by crude wall-clock timings of repeated
//! encoding and decoding. [`run`] prints all sections in a fixed order.

#![warn(rust_2018_idioms)]
#![warn(missing_docs)]

pub mod codec;
pub mod config;
pub mod demo;
pub mod driver;
pub mod error;
pub mod fixtures;
pub mod record;
pub mod timing;

pub use codec::{JsonCodec, SerdeJsonCodec, SimdJsonCodec, SonicCodec};
pub use config::{DEFAULT_ITERATIONS, DIVIDER, HarnessConfig};
pub use driver::{RunReport, print_divider, run};
pub use error::{Error, Result};
pub use fixtures::{JSON_INPUT, JSON_WITH_NULL};
pub use record::{A, B, Record};
pub use timing::{Timing, compare_from_json, compare_to_json, measure_millis};

/// Re-export commonly used types
pub mod prelude {
    pub use super::{
        A, B, Error, HarnessConfig, JsonCodec, Record, Result, SerdeJsonCodec, SimdJsonCodec,
        SonicCodec,
    };
}
