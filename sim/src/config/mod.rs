//! Configuration management for Ising runs
//!
//! This module handles the YAML configuration structures and their defaults.
//! Physical parameters come straight from [`ising::SimulationConfig`]; the
//! driver adds the output and plotting sections.

mod args;

pub use args::Args;

use ising::SimulationConfig;
use serde::{Deserialize, Serialize};

/// Main configuration structure for a simulation run
#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    pub output: Option<OutputParams>,
    pub plot: Option<PlotParams>,
}

/// Snapshot and time-series output
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputParams {
    pub directory: Option<String>,
    pub file_prefix: Option<String>,
    pub save_frequency: Option<u64>,
    pub save_csv: Option<bool>,
    pub save_compressed: Option<bool>,
    pub observables_file: Option<String>,
}

impl Default for OutputParams {
    fn default() -> Self {
        OutputParams {
            directory: Some(".".to_string()),
            file_prefix: Some("step_".to_string()),
            save_frequency: Some(10),
            save_csv: Some(false),
            save_compressed: Some(true),
            observables_file: None,
        }
    }
}

impl OutputParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.directory.is_none() {
            self.directory = defaults.directory;
        }
        if self.file_prefix.is_none() {
            self.file_prefix = defaults.file_prefix;
        }
        if self.save_frequency.is_none() {
            self.save_frequency = defaults.save_frequency;
        }
        if self.save_csv.is_none() {
            self.save_csv = defaults.save_csv;
        }
        if self.save_compressed.is_none() {
            self.save_compressed = defaults.save_compressed;
        }
        self
    }
}

/// Terminal rendering of the lattice
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PlotParams {
    pub enabled: Option<bool>,
    pub frequency: Option<u64>,
}

impl Default for PlotParams {
    fn default() -> Self {
        PlotParams {
            enabled: Some(false),
            frequency: Some(100),
        }
    }
}

impl PlotParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.enabled.is_none() {
            self.enabled = defaults.enabled;
        }
        if self.frequency.is_none() {
            self.frequency = defaults.frequency;
        }
        self
    }
}

impl Config {
    /// Apply defaults to all configuration sections
    pub fn with_defaults(mut self) -> Self {
        self.output = Some(self.output.take().unwrap_or_default().with_defaults());
        self.plot = Some(self.plot.take().unwrap_or_default().with_defaults());
        self
    }

    /// Output settings, defaulted
    pub fn output(&self) -> OutputParams {
        self.output.clone().unwrap_or_default().with_defaults()
    }

    /// Plot settings, defaulted
    pub fn plot(&self) -> PlotParams {
        self.plot.clone().unwrap_or_default().with_defaults()
    }

    /// Fold command-line overrides into the file configuration.
    /// Command-line values win.
    pub fn apply_args(mut self, args: &Args) -> Self {
        let sim = &mut self.simulation;
        if let Some(size) = args.size {
            sim.size = size;
        }
        if let Some(temperature) = args.temperature {
            sim.temperature = temperature;
        }
        if let Some(coupling) = args.coupling {
            sim.coupling = coupling;
        }
        if let Some(max_sweeps) = args.max_sweeps {
            sim.max_sweeps = max_sweeps;
        }
        if let Some(seed) = args.seed {
            sim.seed = Some(seed);
        }

        let mut output = self.output();
        if let Some(ref dir) = args.output_dir {
            output.directory = Some(dir.clone());
        }
        if let Some(frequency) = args.save_frequency {
            output.save_frequency = Some(frequency);
        }
        if args.save_csv {
            output.save_csv = Some(true);
        }
        self.output = Some(output);

        let mut plot = self.plot();
        if args.plot {
            plot.enabled = Some(true);
        }
        self.plot = Some(plot);
        self
    }
}
