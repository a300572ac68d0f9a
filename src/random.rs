use rand::Rng;

/// The random draws the Metropolis update needs.
///
/// Every `rand::Rng` is a `RandomSource`, so a seeded `StdRng` can be handed
/// straight to the engine. Tests plug in scripted sources to force sites and
/// acceptance outcomes.
pub trait RandomSource {
    /// A site drawn uniformly from an `n x n` grid, with replacement.
    fn site(&mut self, n: usize) -> (usize, usize);

    /// A uniform sample from `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// An unbiased coin flip.
    fn coin(&mut self) -> bool;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn site(&mut self, n: usize) -> (usize, usize) {
        (self.gen_range(0..n), self.gen_range(0..n))
    }

    fn uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn coin(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}
