pub mod action;
pub mod error;
pub mod harness;
pub mod walk;

pub use action::Action;
pub use error::ModelError;
pub use harness::CounterModel;
pub use walk::{RandomWalk, Verdict, WalkReport};
