//! Prints the JSON library comparison to stdout.
//!
//! Takes no arguments. Diagnostics go to stderr and are controlled through
//! `RUST_LOG` (default `warn`), so stdout is identical on every run.

use std::io;

use faceoff::{HarnessConfig, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = HarnessConfig::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let report = faceoff::run(&config, &mut out)?;
    tracing::debug!(?report, "done");
    Ok(())
}
