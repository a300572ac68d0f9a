//! Metropolis Monte Carlo simulation of the 2D Ising model on a periodic
//! square lattice.
//!
//! The crate holds only the simulation core: the spin lattice, the
//! single-spin-flip update rule and the observables derived from the
//! lattice. Persistence and plotting live in the `ising-sim` driver.

pub mod analysis;
pub mod config;
pub mod engine;
pub mod error;
pub mod lattice;
pub mod observables;
pub mod random;

pub use config::SimulationConfig;
pub use engine::Simulation;
pub use error::{IsingError, Result};
pub use lattice::{Lattice, Spin};
pub use observables::Observables;
pub use random::RandomSource;
