//! Configuration of per-edge defaults for places.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default values materialized on the first read of an edge scalar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Pheromone trail strength stored when an edge is first read
    pub default_pheromone: f64,
    /// Heuristic indicator stored when an edge is first read
    pub default_indicator: f64,
    /// Write the indicator default into the pheromone map instead of the
    /// indicator map. Reproduces the behaviour older reference runs were
    /// produced with.
    pub legacy_indicator_write: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_pheromone: 1.0,
            default_indicator: 0.0,
            legacy_indicator_write: false,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the default pheromone trail strength.
    pub fn with_default_pheromone(mut self, value: f64) -> Self {
        self.default_pheromone = value;
        self
    }

    /// Set the default heuristic indicator.
    pub fn with_default_indicator(mut self, value: f64) -> Self {
        self.default_indicator = value;
        self
    }

    /// Enable or disable the legacy indicator cross-write.
    pub fn with_legacy_indicator_write(mut self, enabled: bool) -> Self {
        self.legacy_indicator_write = enabled;
        self
    }

    /// Check that both defaults are finite numbers.
    pub fn validate(&self) -> Result<()> {
        if !self.default_pheromone.is_finite() {
            return Err(Error::invalid_argument(format!(
                "default pheromone must be finite, got {}",
                self.default_pheromone
            )));
        }
        if !self.default_indicator.is_finite() {
            return Err(Error::invalid_argument(format!(
                "default indicator must be finite, got {}",
                self.default_indicator
            )));
        }
        Ok(())
    }
}
