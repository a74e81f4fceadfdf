use thiserror::Error;

use super::action::Action;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("action {action} is not enabled in the current state")]
    NotEnabled { action: Action },

    #[error("count mismatch: expected {expected}, counter reported {actual}")]
    CountMismatch { expected: i64, actual: i64 },
}
