use crate::app::report::render_lattice;
use crate::config::Config;
use crate::io::{ObservableSeries, SnapshotWriter};
use color_eyre::eyre::{bail, Result, WrapErr};
use ising::{Observables, Simulation};
use std::path::PathBuf;
use tracing::info;

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub size: usize,
    pub coupling: f64,
    pub temperature: f64,
    pub sweeps: u64,
    pub acceptance_ratio: f64,
    /// Observables at sweep 0 and at every save point
    pub samples: Vec<Observables>,
    pub final_observables: Observables,
    pub snapshots: Vec<PathBuf>,
    pub observables_file: Option<PathBuf>,
}

/// Everything written at a save point.
struct Recorder {
    writer: SnapshotWriter,
    series: Option<ObservableSeries>,
    samples: Vec<Observables>,
    snapshots: Vec<PathBuf>,
}

impl Recorder {
    fn checkpoint(&mut self, simulation: &Simulation) -> Result<()> {
        if self.writer.is_enabled() {
            let written = self.writer.write(simulation.sweeps(), simulation.lattice())?;
            self.snapshots.extend(written);
        }
        let observed = simulation.observe();
        if let Some(series) = self.series.as_mut() {
            series.record(&observed)?;
        }
        self.samples.push(observed);
        Ok(())
    }
}

/// Run the configured number of sweeps.
///
/// Sweep 0 is exported before the first update, then the lattice is saved
/// every `save_frequency` sweeps and rendered every plot `frequency` sweeps.
pub fn run_simulation(config: &Config) -> Result<RunSummary> {
    let output = config.output();
    let plot = config.plot();

    let save_frequency = output.save_frequency.unwrap_or(10);
    if save_frequency == 0 {
        bail!("save_frequency must be at least 1");
    }
    let plotting = plot.enabled.unwrap_or(false);
    let plot_frequency = plot.frequency.unwrap_or(100);
    if plotting && plot_frequency == 0 {
        bail!("plot frequency must be at least 1");
    }

    let mut simulation =
        Simulation::new(config.simulation.clone()).wrap_err("Invalid simulation parameters")?;
    info!(
        "Simulating {}x{} lattice: J = {}, T = {}, {} sweeps",
        simulation.size(),
        simulation.size(),
        simulation.coupling(),
        simulation.temperature(),
        simulation.max_sweeps()
    );

    let writer = SnapshotWriter::new(
        output.directory.as_deref().unwrap_or("."),
        output.file_prefix.as_deref().unwrap_or("step_"),
        output.save_csv.unwrap_or(false),
        output.save_compressed.unwrap_or(true),
    )?;
    info!("Snapshots go to: {}", writer.directory().display());

    let series = match output.observables_file.as_deref() {
        Some(name) => Some(ObservableSeries::create(writer.directory().join(name))?),
        None => None,
    };

    let mut recorder = Recorder {
        writer,
        series,
        samples: Vec::new(),
        snapshots: Vec::new(),
    };

    recorder.checkpoint(&simulation)?;
    if plotting {
        render_lattice(&simulation);
    }

    while !simulation.is_finished() {
        simulation.advance_sweep();
        let sweep = simulation.sweeps();

        if sweep % save_frequency == 0 {
            recorder.checkpoint(&simulation)?;
            info!(
                "Sweep {}: E/N² = {:.6}, M/N² = {:+.6}",
                sweep,
                simulation.energy_per_site(),
                simulation.magnetization_per_site()
            );
        }
        if plotting && sweep % plot_frequency == 0 {
            render_lattice(&simulation);
        }
    }

    let observables_file = match recorder.series.take() {
        Some(series) => Some(series.finish()?),
        None => None,
    };

    Ok(RunSummary {
        size: simulation.size(),
        coupling: simulation.coupling(),
        temperature: simulation.temperature(),
        sweeps: simulation.sweeps(),
        acceptance_ratio: simulation.acceptance_ratio(),
        samples: recorder.samples,
        final_observables: simulation.observe(),
        snapshots: recorder.snapshots,
        observables_file,
    })
}
