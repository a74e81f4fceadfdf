//! Process-wide fault injection switch.
//!
//! While raised, new counters start from a random value instead of zero.
//! The flag is only consulted when a counter is constructed.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

use crate::core::counter::{Initializer, Randomized, Zero};

pub static FAULTY: AtomicBool = AtomicBool::new(false);

pub fn is_faulty() -> bool {
    FAULTY.load(Ordering::SeqCst)
}

pub fn set_faulty(faulty: bool) {
    let previous = FAULTY.swap(faulty, Ordering::SeqCst);
    if previous != faulty {
        info!("Fault flag changed: {} -> {}", previous, faulty);
    }
}

/// Picks the initializer a counter uses for the given flag value.
pub fn initializer_for(faulty: bool) -> Box<dyn Initializer> {
    if faulty {
        Box::new(Randomized::from_entropy())
    } else {
        Box::new(Zero)
    }
}

/// Raises or lowers the flag and puts the old value back when dropped.
#[derive(Debug)]
#[must_use = "the flag is restored as soon as the guard is dropped"]
pub struct FaultGuard {
    previous: bool,
}

impl FaultGuard {
    pub fn engage(faulty: bool) -> Self {
        let previous = is_faulty();
        set_faulty(faulty);
        Self { previous }
    }
}

impl Drop for FaultGuard {
    fn drop(&mut self) {
        set_faulty(self.previous);
    }
}
