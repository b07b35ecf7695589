//! Planner configuration.

use std::time::Duration;

/// Default artificial latency before a plan is produced.
const DEFAULT_SIMULATED_DELAY_MS: u64 = 1500;

/// Configuration for serving plans.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// How long to wait before generating a plan (milliseconds).
    /// Simulates a remote planning service; zero disables it.
    pub simulated_delay_ms: u64,
}

impl PlannerConfig {
    /// Create a configuration with the given delay.
    pub fn new(simulated_delay_ms: u64) -> Self {
        Self { simulated_delay_ms }
    }

    /// Returns the simulated delay as a Duration.
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: DEFAULT_SIMULATED_DELAY_MS,
        }
    }
}
