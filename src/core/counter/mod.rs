pub mod initializer;

use tracing::instrument;

use crate::core::fault;

pub use initializer::{Fixed, Initializer, Randomized, Zero};

/// A signed counter that starts at zero, or somewhere arbitrary while the
/// fault flag is raised.
///
/// Once built, the value only moves through [`Counter::increment`] and
/// [`Counter::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    value: i64,
}

impl Counter {
    /// Builds a counter, consulting the process-wide fault flag once.
    pub fn new() -> Self {
        let faulty = fault::is_faulty();
        let value = fault::initializer_for(faulty).initial_value();
        tracing::info!("Creating a new counter with initial value: {} (faulty: {})", value, faulty);
        Self { value }
    }

    pub fn with_initializer(initializer: &mut dyn Initializer) -> Self {
        let value = initializer.initial_value();
        tracing::info!("Creating a new counter with initial value: {}", value);
        Self { value }
    }

    /// Adds one. `i64::MAX` wraps around to `i64::MIN`.
    #[instrument(name = "increment_counter", level = "debug")]
    pub fn increment(&mut self) {
        self.value = self.value.wrapping_add(1);
        tracing::debug!("Counter incremented to: {}", self.value);
    }

    #[instrument(name = "reset_counter", level = "debug")]
    pub fn reset(&mut self) {
        self.value = 0;
        tracing::debug!("Counter reset");
    }

    pub fn count(&self) -> i64 {
        self.value
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}
