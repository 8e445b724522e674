//! Sequential driver running every section between divider lines

use std::io::Write;

use tracing::info;

use crate::{
    Result,
    config::HarnessConfig,
    demo::{try_serde_json, try_simd_json, try_sonic},
    timing::{Timing, compare_from_json, compare_to_json},
};

/// Timings collected during a run
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Serialization timings in report order
    pub to_json: Vec<Timing>,
    /// Deserialization timings in report order
    pub from_json: Vec<Timing>,
}

/// Print a divider line
pub fn print_divider<W: Write>(config: &HarnessConfig, out: &mut W) -> Result<()> {
    writeln!(out, "{}", config.divider)?;
    Ok(())
}

/// Run the three demos and both timing comparisons, each framed by dividers.
///
/// The demos catch their expected failure. A failure inside a timing loop
/// is returned as is and ends the run.
pub fn run<W: Write>(config: &HarnessConfig, out: &mut W) -> Result<RunReport> {
    info!(iterations = config.iterations, "starting comparison run");

    print_divider(config, out)?;
    try_serde_json(out)?;
    print_divider(config, out)?;
    try_sonic(out)?;
    print_divider(config, out)?;
    try_simd_json(out)?;
    print_divider(config, out)?;
    let to_json = compare_to_json(config, out)?;
    print_divider(config, out)?;
    let from_json = compare_from_json(config, out)?;
    print_divider(config, out)?;

    out.flush()?;
    info!("comparison run finished");
    Ok(RunReport { to_json, from_json })
}
