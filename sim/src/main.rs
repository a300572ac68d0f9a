//! Ising simulation command-line interface
//!
//! Runs a Metropolis simulation described by a YAML configuration file.

use color_eyre::eyre::Result;
use ising_sim::app::SimApplication;

fn main() -> Result<()> {
    color_eyre::install()?;
    SimApplication::from_cli()?.run()
}
