//! Observed environment transitions

use serde::{Deserialize, Serialize};

use qlearn_core::{ActionId, Reward, StateId};

/// A single transition tuple (s, a, r, s')
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub state: StateId,
    pub action: ActionId,
    pub reward: Reward,
    pub next_state: StateId,
}

impl Transition {
    /// Create a new transition
    pub fn new(state: StateId, action: ActionId, reward: Reward, next_state: StateId) -> Self {
        Self {
            state,
            action,
            reward,
            next_state,
        }
    }
}
