//! Energy and magnetization of a lattice configuration.

use crate::engine::Simulation;
use crate::lattice::Lattice;
use serde::{Deserialize, Serialize};

/// Sum of all spins.
pub fn total_magnetization(lattice: &Lattice) -> f64 {
    lattice.values().map(|s| s as i64).sum::<i64>() as f64
}

/// Nearest-neighbor Ising energy with coupling `coupling`.
///
/// Each site contributes 2 s Σ_nb; the sum is scaled by J and divided by 4,
/// since every bond is seen from both ends and the local term carries an
/// extra factor of 2. The sign makes aligned spins lower the energy for
/// J > 0, so the all-up lattice sits at -2 J N².
pub fn total_energy(lattice: &Lattice, coupling: f64) -> f64 {
    let n = lattice.size();
    let mut local_sum: i64 = 0;
    for x in 0..n {
        for y in 0..n {
            let spin = lattice.value(x, y) as i64;
            local_sum += 2 * spin * lattice.neighbor_sum(x, y) as i64;
        }
    }
    -coupling * local_sum as f64 / 4.0
}

/// Observables recorded at one point of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observables {
    pub sweep: u64,
    pub energy: f64,
    pub magnetization: f64,
}

impl<R> Simulation<R> {
    /// Total energy of the current configuration.
    pub fn total_energy(&self) -> f64 {
        total_energy(self.lattice(), self.coupling())
    }

    /// Total magnetization of the current configuration.
    pub fn total_magnetization(&self) -> f64 {
        total_magnetization(self.lattice())
    }

    pub fn energy_per_site(&self) -> f64 {
        self.total_energy() / self.lattice().sites() as f64
    }

    pub fn magnetization_per_site(&self) -> f64 {
        self.total_magnetization() / self.lattice().sites() as f64
    }

    pub fn abs_magnetization_per_site(&self) -> f64 {
        self.magnetization_per_site().abs()
    }

    /// Capture energy and magnetization, labeled with the current sweep.
    pub fn observe(&self) -> Observables {
        Observables {
            sweep: self.sweeps(),
            energy: self.total_energy(),
            magnetization: self.total_magnetization(),
        }
    }
}
