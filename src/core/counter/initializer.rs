use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Chooses the starting value of a freshly built [`Counter`](super::Counter).
pub trait Initializer {
    fn initial_value(&mut self) -> i64;
}

/// Deterministic start at zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl Initializer for Zero {
    fn initial_value(&mut self) -> i64 {
        0
    }
}

/// Always starts at the wrapped value. Stands in for randomness in tests.
#[derive(Debug, Clone, Copy)]
pub struct Fixed(pub i64);

impl Initializer for Fixed {
    fn initial_value(&mut self) -> i64 {
        self.0
    }
}

/// Draws the starting value from the whole `i64` range.
#[derive(Debug)]
pub struct Randomized<R: Rng> {
    rng: R,
}

impl<R: Rng> Randomized<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Randomized<ThreadRng> {
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl Randomized<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Initializer for Randomized<R> {
    fn initial_value(&mut self) -> i64 {
        let value = self.rng.gen::<i64>();
        debug!("Randomized initial value: {}", value);
        value
    }
}
