//! End-to-end runs of the simulation driver against a scratch directory.

use ising::Simulation;
use ising_sim::app::{load_config, run_simulation};
use ising_sim::config::{Args, Config, OutputParams, PlotParams};
use ising::Observables;
use ising_sim::io::{read_compressed, read_csv};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn example_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("example")
        .join(filename)
}

fn small_run(dir: &Path, seed: u64) -> Config {
    let yaml = format!(
        "
simulation:
  size: 6
  temperature: 2.0
  max_sweeps: 20
  seed: {seed}
output:
  directory: {dir}
  save_frequency: 5
  save_csv: true
  save_compressed: true
  observables_file: observables.csv
",
        dir = dir.display()
    );
    serde_yml::from_str::<Config>(&yaml).unwrap().with_defaults()
}

#[test]
fn test_example_config_parses() {
    let args = Args::parse_from([
        "ising-sim",
        "--config-file",
        example_path("ising.yaml").to_str().unwrap(),
    ]);
    let config = load_config(&args).unwrap();

    assert_eq!(config.simulation.size, 64);
    assert_eq!(config.simulation.seed, Some(42));
    assert!(config.simulation.validate().is_ok());
    assert_eq!(config.output().observables_file.as_deref(), Some("observables.csv"));
}

#[test]
fn test_run_writes_snapshots_and_series() {
    let dir = tempdir().unwrap();
    let config = small_run(dir.path(), 7);

    let summary = run_simulation(&config).unwrap();

    assert_eq!(summary.sweeps, 20);
    // sweeps 0, 5, 10, 15, 20 in two formats each
    assert_eq!(summary.samples.len(), 5);
    assert_eq!(summary.snapshots.len(), 10);
    for sweep in [0, 5, 10, 15, 20] {
        assert!(dir.path().join(format!("step_{sweep}.csv")).exists());
        assert!(dir.path().join(format!("step_{sweep}.json.gz")).exists());
    }
    assert!(!dir.path().join("step_3.csv").exists());

    let record = read_compressed(&dir.path().join("step_20.json.gz")).unwrap();
    assert_eq!(record.sweep, 20);
    assert_eq!(record.size, 6);
    let from_gz = record.to_lattice().unwrap();
    let from_csv = read_csv(&dir.path().join("step_20.csv")).unwrap();
    assert_eq!(from_gz, from_csv);
    assert_eq!(from_csv.snapshot(), {
        let mut replay = Simulation::new(config.simulation.clone()).unwrap();
        replay.run(20);
        replay.snapshot()
    });

    let series = fs::read_to_string(dir.path().join("observables.csv")).unwrap();
    assert_eq!(series.lines().next(), Some("sweep,energy,magnetization"));
    let mut reader = csv::Reader::from_path(dir.path().join("observables.csv")).unwrap();
    let rows: Vec<Observables> = reader.deserialize().map(|r| r.unwrap()).collect();
    assert_eq!(rows, summary.samples);
    assert_eq!(rows.iter().map(|r| r.sweep).collect::<Vec<_>>(), [0, 5, 10, 15, 20]);

    let last = summary.final_observables;
    assert_eq!(last.sweep, 20);
    assert!(last.magnetization.abs() <= 36.0);
}

#[test]
fn test_same_seed_same_snapshots() {
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();

    run_simulation(&small_run(first.path(), 99)).unwrap();
    run_simulation(&small_run(second.path(), 99)).unwrap();

    let a = fs::read_to_string(first.path().join("step_20.csv")).unwrap();
    let b = fs::read_to_string(second.path().join("step_20.csv")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_output_directory_is_created() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("runs").join("t2");
    let config = Config {
        simulation: ising::SimulationConfig::default()
            .with_size(4)
            .with_max_sweeps(3)
            .with_seed(1),
        output: Some(OutputParams {
            directory: Some(nested.display().to_string()),
            save_frequency: Some(1),
            ..OutputParams::default()
        }),
        plot: Some(PlotParams {
            enabled: Some(true),
            frequency: Some(1),
        }),
    };

    let summary = run_simulation(&config).unwrap();

    assert_eq!(summary.snapshots.len(), 4);
    assert!(nested.join("step_3.json.gz").exists());
    assert!(!nested.join("step_3.csv").exists());
    assert!(summary.observables_file.is_none());
}

#[test]
fn test_invalid_parameters_abort_setup() {
    let dir = tempdir().unwrap();
    let mut config = small_run(dir.path(), 1);
    config.simulation.temperature = 0.0;
    assert!(run_simulation(&config).is_err());

    let mut config = small_run(dir.path(), 1);
    config.output = Some(OutputParams {
        save_frequency: Some(0),
        ..config.output()
    });
    assert!(run_simulation(&config).is_err());
}
