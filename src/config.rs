//! Construction parameters for a simulation.

use crate::error::{IsingError, Result};
use serde::{Deserialize, Serialize};

/// Parameters accepted when building a [`crate::Simulation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Lattice side length N (the grid is N x N)
    pub size: usize,
    /// Coupling constant J; positive is ferromagnetic, negative antiferromagnetic
    pub coupling: f64,
    /// Temperature in units of J/k_B, strictly positive
    pub temperature: f64,
    /// Sweep budget the driver runs to; the engine itself does not enforce it
    pub max_sweeps: u64,
    /// Seed for reproducible runs; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            size: 100,
            coupling: 1.0,
            temperature: 1.0,
            max_sweeps: 1000,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_coupling(mut self, coupling: f64) -> Self {
        self.coupling = coupling;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_sweeps(mut self, max_sweeps: u64) -> Self {
        self.max_sweeps = max_sweeps;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the parameters the update rule depends on.
    ///
    /// T = 0 is rejected: exp(-dE/T) has no meaning there and a dE = 0 move
    /// would always be taken.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(IsingError::config("lattice size must be positive"));
        }
        validate_coupling(self.coupling)?;
        validate_temperature(self.temperature)?;
        Ok(())
    }
}

pub(crate) fn validate_temperature(temperature: f64) -> Result<()> {
    if !temperature.is_finite() || temperature <= 0.0 {
        return Err(IsingError::config(format!(
            "temperature must be a finite positive number, got {temperature}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_coupling(coupling: f64) -> Result<()> {
    if !coupling.is_finite() {
        return Err(IsingError::config(format!(
            "coupling must be finite, got {coupling}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.size, 100);
        assert_eq!(config.coupling, 1.0);
        assert_eq!(config.temperature, 1.0);
        assert_eq!(config.max_sweeps, 1000);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_parameters() {
        let base = SimulationConfig::default();
        for config in [
            base.clone().with_size(0),
            base.clone().with_temperature(0.0),
            base.clone().with_temperature(-1.5),
            base.clone().with_temperature(f64::NAN),
            base.clone().with_temperature(f64::INFINITY),
            base.clone().with_coupling(f64::NAN),
        ] {
            assert!(
                matches!(config.validate(), Err(IsingError::InvalidConfiguration(_))),
                "{config:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_antiferromagnetic_coupling_allowed() {
        let config = SimulationConfig::default().with_coupling(-1.0);
        assert!(config.validate().is_ok());
    }
}
