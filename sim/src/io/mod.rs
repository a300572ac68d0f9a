//! Input/Output operations for Ising runs
//!
//! This module handles logging setup, lattice snapshots and the observable
//! time series.

mod output;
mod series;
mod snapshot;

pub use output::setup_output;
pub use series::ObservableSeries;
pub use snapshot::{read_compressed, read_csv, SnapshotRecord, SnapshotWriter};
