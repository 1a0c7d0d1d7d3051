//! Error types for qlearn

use thiserror::Error;

/// Main error type for qlearn
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QLearnError {
    #[error("State out of range: {state} (n_states = {n_states})")]
    StateOutOfRange { state: usize, n_states: usize },

    #[error("Action out of range: {action} (n_actions = {n_actions})")]
    ActionOutOfRange { action: usize, n_actions: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid reward: {0}")]
    InvalidReward(f64),

    #[error("Update of Q({state}, {action}) produced a non-finite value")]
    NonFiniteValue { state: usize, action: usize },
}

impl QLearnError {
    /// Whether this error reports an out-of-range state or action index
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            QLearnError::StateOutOfRange { .. } | QLearnError::ActionOutOfRange { .. }
        )
    }
}

/// Result type alias for qlearn operations
pub type Result<T> = std::result::Result<T, QLearnError>;
