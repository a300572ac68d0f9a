//! Command-line argument parsing for Ising runs

use clap::Parser;

/// 2D Ising model Metropolis simulation with YAML configuration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the YAML configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    pub config_file: Option<String>,

    /// Override lattice side length
    #[arg(long)]
    pub size: Option<usize>,

    /// Override temperature (J/k_B)
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Override coupling constant J
    #[arg(long, allow_hyphen_values = true)]
    pub coupling: Option<f64>,

    /// Override number of sweeps to run
    #[arg(long)]
    pub max_sweeps: Option<u64>,

    /// Random seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override snapshot directory
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Override snapshot frequency (in sweeps)
    #[arg(long)]
    pub save_frequency: Option<u64>,

    /// Also write CSV snapshots
    #[arg(long)]
    pub save_csv: bool,

    /// Log file (default stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Render the lattice to the log at the plot frequency
    #[arg(long)]
    pub plot: bool,
}
