use tracing::{debug, info, instrument, warn};

use crate::core::counter::Counter;

use super::action::Action;
use super::error::ModelError;

type Factory = Box<dyn FnMut() -> Counter>;

/// Drives a [`Counter`] alongside a reference value and checks that the two
/// agree whenever the counter is asked for its count.
pub struct CounterModel {
    factory: Factory,
    counter: Option<Counter>,
    expected: i64,
}

impl CounterModel {
    pub fn new<F>(factory: F) -> Self
    where
        F: FnMut() -> Counter + 'static,
    {
        Self {
            factory: Box::new(factory),
            counter: None,
            expected: 0,
        }
    }

    pub fn counter(&self) -> Option<&Counter> {
        self.counter.as_ref()
    }

    pub fn expected(&self) -> i64 {
        self.expected
    }

    pub fn is_enabled(&self, action: Action) -> bool {
        match action {
            Action::Create => self.counter.is_none(),
            Action::Destroy | Action::Increment | Action::Reset | Action::Count => {
                self.counter.is_some()
            }
        }
    }

    pub fn enabled_actions(&self) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|action| self.is_enabled(*action))
            .collect()
    }

    #[instrument(name = "execute_action", level = "debug", skip(self))]
    pub fn execute(&mut self, action: Action) -> Result<(), ModelError> {
        match (action, self.counter.as_mut()) {
            (Action::Create, None) => {
                self.expected = 0;
                self.counter = Some((self.factory)());
            }
            (Action::Destroy, Some(_)) => self.counter = None,
            (Action::Increment, Some(counter)) => {
                counter.increment();
                self.expected = self.expected.wrapping_add(1);
            }
            (Action::Reset, Some(counter)) => {
                counter.reset();
                self.expected = 0;
            }
            (Action::Count, Some(counter)) => {
                let actual = counter.count();
                if actual != self.expected {
                    warn!("Count mismatch: expected {}, got {}", self.expected, actual);
                    return Err(ModelError::CountMismatch {
                        expected: self.expected,
                        actual,
                    });
                }
            }
            _ => {
                warn!("Rejected {}: not enabled", action);
                return Err(ModelError::NotEnabled { action });
            }
        }

        debug!("Executed {}", action);
        Ok(())
    }

    pub fn run_script(&mut self, actions: &[Action]) -> Result<(), ModelError> {
        actions.iter().try_for_each(|action| self.execute(*action))
    }

    /// Drops any live counter and zeroes the reference value.
    pub fn reset(&mut self) {
        info!("Model reset");
        self.counter = None;
        self.expected = 0;
    }
}

impl Default for CounterModel {
    fn default() -> Self {
        Self::new(Counter::new)
    }
}
