//! Wall-clock timing of repeated encode/decode calls
//!
//! Crude by intent: no warm-up, one pass, millisecond resolution. Library
//! failures inside a loop are not caught here and abort the comparison.

use std::hint::black_box;
use std::io::Write;
use std::time::Instant;

use tracing::info;

use crate::{
    Result,
    codec::{JsonCodec, SerdeJsonCodec, SimdJsonCodec, SonicCodec},
    config::HarnessConfig,
    fixtures::JSON_INPUT,
    record::{A, B},
};

/// Elapsed time of one library's loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Library name
    pub library: &'static str,
    /// Elapsed wall-clock milliseconds
    pub millis: u128,
}

/// Run `op` over the inclusive range `0..=iterations` and return elapsed milliseconds
pub fn measure_millis<F>(iterations: usize, mut op: F) -> Result<u128>
where
    F: FnMut() -> Result<()>,
{
    let start = Instant::now();
    for _ in 0..=iterations {
        op()?;
    }
    Ok(start.elapsed().as_millis())
}

fn time_encode<C: JsonCodec>(codec: &C, value: &A, iterations: usize) -> Result<Timing> {
    let millis = measure_millis(iterations, || {
        black_box(codec.encode(black_box(value))?);
        Ok(())
    })?;
    Ok(Timing {
        library: codec.name(),
        millis,
    })
}

fn time_decode<C: JsonCodec>(codec: &C, input: &str, iterations: usize) -> Result<Timing> {
    let millis = measure_millis(iterations, || {
        black_box(codec.decode::<B>(black_box(input))?);
        Ok(())
    })?;
    Ok(Timing {
        library: codec.name(),
        millis,
    })
}

fn report<W: Write>(out: &mut W, timing: Timing, operation: &'static str) -> Result<Timing> {
    info!(
        library = timing.library,
        millis = %timing.millis,
        operation,
        "timing"
    );
    writeln!(out, "{}: {}ms", timing.library, timing.millis)?;
    Ok(timing)
}

/// Time serialization of a fixed `A(1)` with each library, in report order
pub fn compare_to_json<W: Write>(config: &HarnessConfig, out: &mut W) -> Result<Vec<Timing>> {
    let times = config.iterations;
    writeln!(out, "Running serialization {times} times.")?;

    let a = A::new(1);
    Ok(vec![
        report(out, time_encode(&SerdeJsonCodec::new(), &a, times)?, "encode")?,
        report(out, time_encode(&SonicCodec::new(), &a, times)?, "encode")?,
        report(out, time_encode(&SimdJsonCodec::new(), &a, times)?, "encode")?,
    ])
}

/// Time deserialization of the well-formed B fixture with each library, in report order
pub fn compare_from_json<W: Write>(config: &HarnessConfig, out: &mut W) -> Result<Vec<Timing>> {
    let times = config.iterations;
    writeln!(out, "Running deserialization {times} times.")?;

    Ok(vec![
        report(out, time_decode(&SerdeJsonCodec::new(), JSON_INPUT, times)?, "decode")?,
        report(out, time_decode(&SonicCodec::new(), JSON_INPUT, times)?, "decode")?,
        report(out, time_decode(&SimdJsonCodec::new(), JSON_INPUT, times)?, "decode")?,
    ])
}
