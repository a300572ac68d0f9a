use crate::config::{validate_coupling, validate_temperature, SimulationConfig};
use crate::error::Result;
use crate::lattice::Lattice;
use crate::random::RandomSource;
use nalgebra::DMatrix;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

/// 2D Ising model driven by single-spin-flip Metropolis updates.
///
/// The engine exclusively owns its lattice and its random source. Callers
/// read the lattice through [`Simulation::lattice`] or copy it out with
/// [`Simulation::snapshot`]; the only mutation is [`Simulation::advance_sweep`].
#[derive(Debug, Clone)]
pub struct Simulation<R = StdRng> {
    lattice: Lattice,
    /// Coupling constant J
    coupling: f64,
    /// Temperature in units of J/k_B
    temperature: f64,
    max_sweeps: u64,
    /// Completed sweeps (Monte Carlo steps)
    sweeps: u64,
    rng: R,
    last_accepted: u64,
    total_trials: u64,
    total_accepted: u64,
}

impl Simulation<StdRng> {
    /// Build a simulation with a random initial lattice.
    ///
    /// The random source is a `StdRng` seeded from `config.seed`, or from OS
    /// entropy when no seed is given.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> Simulation<R> {
    /// Build a simulation with a caller-supplied random source.
    pub fn with_rng(config: SimulationConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let lattice = Lattice::random(config.size, &mut rng)?;
        debug!(
            "Initialized {}x{} lattice with J = {}, T = {}",
            config.size, config.size, config.coupling, config.temperature
        );
        Ok(Self::assemble(
            lattice,
            config.coupling,
            config.temperature,
            config.max_sweeps,
            rng,
        ))
    }

    /// Start from an explicit configuration instead of a random one.
    pub fn from_lattice(lattice: Lattice, coupling: f64, temperature: f64, rng: R) -> Result<Self> {
        validate_coupling(coupling)?;
        validate_temperature(temperature)?;
        let max_sweeps = SimulationConfig::default().max_sweeps;
        Ok(Self::assemble(lattice, coupling, temperature, max_sweeps, rng))
    }

    fn assemble(lattice: Lattice, coupling: f64, temperature: f64, max_sweeps: u64, rng: R) -> Self {
        Self {
            lattice,
            coupling,
            temperature,
            max_sweeps,
            sweeps: 0,
            rng,
            last_accepted: 0,
            total_trials: 0,
            total_accepted: 0,
        }
    }

    pub fn with_max_sweeps(mut self, max_sweeps: u64) -> Self {
        self.max_sweeps = max_sweeps;
        self
    }

    /// Energy change from flipping the spin at `(x, y)`: dE = 2 J s Σ.
    pub fn delta_energy(&self, x: usize, y: usize) -> f64 {
        let spin = self.lattice.value(x, y) as f64;
        let neighbors_sum = self.lattice.neighbor_sum(x, y) as f64;
        2.0 * self.coupling * spin * neighbors_sum
    }

    /// One Monte Carlo sweep: N² single-spin-flip trials.
    ///
    /// Trial sites are drawn uniformly with replacement, so a sweep may visit
    /// some sites several times and others not at all.
    pub fn advance_sweep(&mut self) {
        let n = self.lattice.size();
        let trials = self.lattice.sites() as u64;
        let mut accepted = 0;

        for _ in 0..trials {
            let (x, y) = self.rng.site(n);
            let delta_e = self.delta_energy(x, y);

            if self.accept(delta_e) {
                self.lattice.flip(x, y);
                accepted += 1;
            }
        }

        self.sweeps += 1;
        self.last_accepted = accepted;
        self.total_trials += trials;
        self.total_accepted += accepted;
        trace!(
            "Sweep {}: accepted {} of {} trials",
            self.sweeps,
            accepted,
            trials
        );
    }

    /// Metropolis criterion. Downhill moves are taken without a draw; any
    /// other move is taken when a uniform draw falls strictly below
    /// exp(-dE / T).
    fn accept(&mut self, delta_e: f64) -> bool {
        if delta_e < 0.0 {
            return true;
        }
        self.rng.uniform() < (-delta_e / self.temperature).exp()
    }

    /// Advance `sweeps` sweeps back to back.
    pub fn run(&mut self, sweeps: u64) {
        for _ in 0..sweeps {
            self.advance_sweep();
        }
    }
}

impl<R> Simulation<R> {
    /// Immutable view of the live lattice.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Owned copy of the current spin grid.
    pub fn snapshot(&self) -> DMatrix<i8> {
        self.lattice.snapshot()
    }

    pub fn size(&self) -> usize {
        self.lattice.size()
    }

    pub fn coupling(&self) -> f64 {
        self.coupling
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn max_sweeps(&self) -> u64 {
        self.max_sweeps
    }

    /// Number of completed sweeps.
    pub fn sweeps(&self) -> u64 {
        self.sweeps
    }

    /// Whether the sweep budget has been used up. Advisory: sweeping past it
    /// is still allowed.
    pub fn is_finished(&self) -> bool {
        self.sweeps >= self.max_sweeps
    }

    /// Flips accepted during the most recent sweep.
    pub fn last_accepted(&self) -> u64 {
        self.last_accepted
    }

    /// Fraction of all trials so far that were accepted.
    pub fn acceptance_ratio(&self) -> f64 {
        if self.total_trials == 0 {
            return 0.0;
        }
        self.total_accepted as f64 / self.total_trials as f64
    }

    #[cfg(test)]
    pub(crate) fn rng(&self) -> &R {
        &self.rng
    }
}
