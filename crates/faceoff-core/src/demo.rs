//! Narrated demonstrations of each library's handling of a `null` text
//!
//! Every demo expects exactly one failure kind and reports it as text.
//! Anything else is returned to the caller.

use std::io::Write;

use tracing::{debug, info};

use crate::{
    Error, Result,
    codec::{JsonCodec, SerdeJsonCodec, SimdJsonCodec, SonicCodec},
    fixtures::JSON_WITH_NULL,
    record::{A, B},
};

/// Encode both records with serde_json, then read an absent text back.
///
/// Decoding `JSON_WITH_NULL` succeeds; the failure only shows up when the
/// text is accessed.
pub fn try_serde_json<W: Write>(out: &mut W) -> Result<()> {
    info!(library = SerdeJsonCodec::NAME, "demo");
    writeln!(out, "Re-use {} for various records", SerdeJsonCodec::NAME)?;

    let codec = SerdeJsonCodec::new();
    writeln!(out, "{}", codec.encode(&A::new(1))?)?;
    writeln!(out, "{}", codec.encode(&B::new(1, "string1"))?)?;
    writeln!(out, "{}", codec.encode(&A::new(2))?)?;

    let b: B = codec.decode(JSON_WITH_NULL)?;
    writeln!(out, "{b}")?;

    match b.text() {
        Ok(text) => writeln!(out, "{}", text.len())?,
        Err(e) if e.is_null_field() => writeln!(
            out,
            "Parsing will go through but trying to access it will throw an {e}"
        )?,
        Err(e) => return Err(e),
    }
    Ok(())
}

/// Encode A with sonic-rs and watch validation reject the `null` text
pub fn try_sonic<W: Write>(out: &mut W) -> Result<()> {
    info!(library = SonicCodec::NAME, "demo");
    writeln!(out, "Try {}", SonicCodec::NAME)?;
    try_rejecting(&SonicCodec::new(), Error::is_data_validation, out)
}

/// Encode A with simd-json and watch the strict decode fail
pub fn try_simd_json<W: Write>(out: &mut W) -> Result<()> {
    info!(library = SimdJsonCodec::NAME, "demo");
    writeln!(out, "Structural decoding with {}", SimdJsonCodec::NAME)?;
    try_rejecting(&SimdJsonCodec::new(), Error::is_decode, out)
}

fn try_rejecting<C, W>(codec: &C, expected: fn(&Error) -> bool, out: &mut W) -> Result<()>
where
    C: JsonCodec,
    W: Write,
{
    writeln!(out, "{}", codec.encode(&A::new(1))?)?;

    match codec.decode::<B>(JSON_WITH_NULL) {
        Ok(b) => writeln!(out, "{b}")?,
        Err(e) if expected(&e) => {
            debug!(library = codec.name(), error = %e, "rejected null text");
            writeln!(out, "Parsing \"{JSON_WITH_NULL}\" errors with {e}")?;
        }
        Err(e) => return Err(e),
    }
    Ok(())
}
