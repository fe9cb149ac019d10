use anyhow::{ensure, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use eca_core::sim::Boundary;

#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent runs per rule.
    pub repeats: usize,
    /// Number of states in each trajectory, including the initial state.
    pub steps: usize,
    /// Number of cells in each state.
    pub width: usize,
    /// Seed for the first run; run `r` uses `seed + r`.
    pub seed: u64,
    pub boundary: Boundary,
}
impl Default for SimConfig {
    fn default() -> Self {
        Self {
            repeats: 10,
            steps: 100,
            width: 60,
            seed: 0,
            boundary: Boundary::Wrap,
        }
    }
}
impl SimConfig {
    /// Returns an error if any count is zero.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.repeats > 0, "Number of repeats must be positive");
        ensure!(self.steps > 0, "Number of steps must be positive");
        ensure!(self.width > 0, "State width must be positive");
        Ok(())
    }

    /// Returns the random number generator for the initial state of the given
    /// run.
    pub fn rng_for_repeat(&self, repeat: usize) -> StdRng {
        StdRng::seed_from_u64(self.seed.wrapping_add(repeat as u64))
    }
}
