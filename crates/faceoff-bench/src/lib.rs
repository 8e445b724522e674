//! Criterion benchmarks for the faceoff codecs.
//!
//! Run with `cargo bench -p faceoff-bench`. The benches measure the same
//! operations as the harness timing step, with warm-up and statistics.

pub use faceoff::{A, B, JSON_INPUT, JsonCodec, SerdeJsonCodec, SimdJsonCodec, SonicCodec};
