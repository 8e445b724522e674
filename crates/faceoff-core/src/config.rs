//! Harness configuration
//!
//! The binary always runs with [`HarnessConfig::default`], so every
//! invocation produces the same sections. Tests shrink the iteration count.

/// Number of timed iterations when nothing else is configured.
///
/// Loops run over the inclusive range `0..=iterations`, so the default
/// performs 10,001 operations per library.
pub const DEFAULT_ITERATIONS: usize = 10_000;

/// Line printed between sections.
pub const DIVIDER: &str = "-------------------------------------------";

/// Configuration for a harness run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Upper bound of the inclusive timing range
    pub iterations: usize,
    /// Section separator
    pub divider: &'static str,
}

impl HarnessConfig {
    /// Create configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the timing iteration count
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            divider: DIVIDER,
        }
    }
}
