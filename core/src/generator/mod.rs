use alloc::vec::Vec;
use rand::prelude::*;

pub use streaming::*;

mod streaming;

/// Source of uniform fractions in `[0, 1)` consumed by mine generation.
pub trait FractionSource {
    fn next_fraction(&mut self) -> f64;
}

/// Draws fractions from any `rand` generator.
#[derive(Clone, Debug)]
pub struct RngFractions<R> {
    rng: R,
}

impl<R: Rng> RngFractions<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngFractions<SmallRng> {
    /// Deterministic source, the host decides where the seed comes from.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> FractionSource for RngFractions<R> {
    fn next_fraction(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed list of fractions, starting over once it runs out.
#[derive(Clone, Debug, PartialEq)]
pub struct ReplayFractions {
    fractions: Vec<f64>,
    next: usize,
}

impl ReplayFractions {
    /// Fractions outside `[0, 1)` are clamped into it; an empty list replays `0.0`.
    pub fn new(fractions: impl IntoIterator<Item = f64>) -> Self {
        let fractions = fractions
            .into_iter()
            .map(|fraction| fraction.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { fractions, next: 0 }
    }
}

impl FractionSource for ReplayFractions {
    fn next_fraction(&mut self) -> f64 {
        let Some(&fraction) = self.fractions.get(self.next) else {
            return 0.0;
        };
        self.next = (self.next + 1) % self.fractions.len();
        fraction
    }
}
