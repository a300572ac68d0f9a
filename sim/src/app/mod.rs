mod report;
mod runner;

pub use report::{render_lattice, report_summary};
pub use runner::{run_simulation, RunSummary};

use crate::config::{Args, Config};
use crate::io::setup_output;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use std::fs;
use tracing::info;

pub struct SimApplication {
    args: Args,
    config: Config,
}

impl SimApplication {
    pub fn from_cli() -> Result<Self> {
        let args = Args::parse();
        let config = load_config(&args)?;
        Ok(Self { args, config })
    }

    pub fn run(self) -> Result<()> {
        setup_output(self.args.output.as_deref())?;
        info!("Configuration loaded:\n{:?}", self.config);

        let summary = run_simulation(&self.config)?;
        report_summary(&summary);
        Ok(())
    }
}

/// Read the YAML file (if any), fill defaults, then apply CLI overrides.
pub fn load_config(args: &Args) -> Result<Config> {
    let config = match args.config_file {
        Some(ref path) => {
            let content = fs::read_to_string(path)
                .wrap_err_with(|| format!("Unable to read configuration file: {}", path))?;
            serde_yml::from_str::<Config>(&content)
                .wrap_err("Failed to parse configuration file")?
        }
        None => Config::default(),
    };

    Ok(config.with_defaults().apply_args(args))
}
