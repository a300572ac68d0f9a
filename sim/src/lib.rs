//! Driver for the 2D Ising simulation: configuration, logging, snapshot
//! persistence and the run loop around [`ising::Simulation`].

pub mod app;
pub mod config;
pub mod io;
