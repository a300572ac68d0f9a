use crate::error::{IsingError, Result};
use crate::random::RandomSource;
use nalgebra::DMatrix;
use std::fmt;

/// A single Ising spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Spin {
    Up = 1,
    Down = -1,
}

impl Spin {
    pub fn value(self) -> i8 {
        self as i8
    }

    pub fn flipped(self) -> Spin {
        match self {
            Spin::Up => Spin::Down,
            Spin::Down => Spin::Up,
        }
    }
}

impl TryFrom<i8> for Spin {
    type Error = IsingError;

    fn try_from(value: i8) -> Result<Self> {
        match value {
            1 => Ok(Spin::Up),
            -1 => Ok(Spin::Down),
            other => Err(IsingError::state(format!(
                "spin value must be +1 or -1, got {other}"
            ))),
        }
    }
}

impl From<Spin> for i8 {
    fn from(spin: Spin) -> i8 {
        spin.value()
    }
}

/// N x N grid of spins with periodic boundaries (a torus).
///
/// Cells are addressed as `(x, y)` with `x` the row and `y` the column.
/// Every cell holds +1 or -1; the only ways in are [`Spin`] values or the
/// checked [`Lattice::set_value`].
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    size: usize,
    spins: DMatrix<i8>,
}

impl Lattice {
    /// Random configuration: every cell is an independent unbiased coin flip.
    pub fn random<R: RandomSource + ?Sized>(size: usize, rng: &mut R) -> Result<Self> {
        check_size(size)?;
        let spins = DMatrix::from_fn(size, size, |_, _| {
            if rng.coin() {
                Spin::Up.value()
            } else {
                Spin::Down.value()
            }
        });
        Ok(Self { size, spins })
    }

    /// Ordered configuration with every cell set to `spin`.
    pub fn uniform(size: usize, spin: Spin) -> Result<Self> {
        check_size(size)?;
        Ok(Self {
            size,
            spins: DMatrix::from_element(size, size, spin.value()),
        })
    }

    /// Build a lattice from explicit rows of raw +1/-1 values.
    pub fn from_rows(rows: &[Vec<i8>]) -> Result<Self> {
        let size = rows.len();
        check_size(size)?;
        for (x, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(IsingError::config(format!(
                    "lattice must be square: row {x} has {} cells, expected {size}",
                    row.len()
                )));
            }
            for &value in row {
                Spin::try_from(value)?;
            }
        }
        let spins = DMatrix::from_fn(size, size, |x, y| rows[x][y]);
        Ok(Self { size, spins })
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of sites, N².
    pub fn sites(&self) -> usize {
        self.size * self.size
    }

    pub fn get(&self, x: usize, y: usize) -> Spin {
        if self.spins[(x, y)] > 0 {
            Spin::Up
        } else {
            Spin::Down
        }
    }

    /// Raw value of the spin at `(x, y)`.
    pub fn value(&self, x: usize, y: usize) -> i8 {
        self.spins[(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, spin: Spin) {
        self.spins[(x, y)] = spin.value();
    }

    /// Checked write of a raw value; anything but +1/-1 is rejected.
    pub fn set_value(&mut self, x: usize, y: usize, value: i8) -> Result<()> {
        let spin = Spin::try_from(value)?;
        self.set(x, y, spin);
        Ok(())
    }

    /// Negate the spin at `(x, y)` in place.
    pub fn flip(&mut self, x: usize, y: usize) {
        self.spins[(x, y)] = -self.spins[(x, y)];
    }

    /// Map any integer coordinate onto `0..N` (so -1 becomes N - 1).
    pub fn wrap(&self, i: isize) -> usize {
        i.rem_euclid(self.size as isize) as usize
    }

    /// Spin at a possibly out-of-range coordinate, wrapped periodically.
    pub fn get_wrapped(&self, x: isize, y: isize) -> Spin {
        self.get(self.wrap(x), self.wrap(y))
    }

    /// The four nearest neighbors of `(x, y)`: x+1, x-1, y+1, y-1 (all wrapped).
    pub fn neighbors(&self, x: usize, y: usize) -> [(usize, usize); 4] {
        let n = self.size;
        let (up, down) = ((x + 1) % n, (x + n - 1) % n);
        let (right, left) = ((y + 1) % n, (y + n - 1) % n);
        [(up, y), (down, y), (x, right), (x, left)]
    }

    /// Sum of the four periodic neighbor spins of `(x, y)`, in `-4..=4`.
    pub fn neighbor_sum(&self, x: usize, y: usize) -> i32 {
        self.neighbors(x, y)
            .iter()
            .map(|&(i, j)| self.spins[(i, j)] as i32)
            .sum()
    }

    /// Owned copy of the spin grid. Never aliases the live lattice.
    pub fn snapshot(&self) -> DMatrix<i8> {
        self.spins.clone()
    }

    /// Rows of raw spin values, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = Vec<i8>> + '_ {
        (0..self.size).map(move |x| (0..self.size).map(|y| self.spins[(x, y)]).collect())
    }

    /// Iterator over every raw spin value (column-major).
    pub fn values(&self) -> impl Iterator<Item = i8> + '_ {
        self.spins.iter().copied()
    }
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row
                .iter()
                .map(|&s| if s > 0 { "↑ " } else { "↓ " })
                .collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

fn check_size(size: usize) -> Result<()> {
    if size == 0 {
        return Err(IsingError::config("lattice size must be positive"));
    }
    Ok(())
}
