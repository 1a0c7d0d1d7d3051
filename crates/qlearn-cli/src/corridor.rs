//! Toy corridor environment used by the `train` command

use anyhow::{ensure, Result};

use qlearn_core::{ActionId, Reward, StateId};

pub const LEFT: ActionId = 0;
pub const RIGHT: ActionId = 1;
pub const N_ACTIONS: usize = 2;

/// Result of applying one action
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub reward: Reward,
    pub next_state: StateId,
    pub done: bool,
}

/// A row of `length` cells. The agent starts in cell 0 and the episode ends
/// with reward 1.0 when it reaches the last cell; every other move pays 0.0.
#[derive(Debug, Clone)]
pub struct Corridor {
    length: usize,
    position: StateId,
}

impl Corridor {
    /// Fails when `length` is below 2, leaving no room between start and goal
    pub fn new(length: usize) -> Result<Self> {
        ensure!(length >= 2, "corridor length must be at least 2, got {length}");
        Ok(Self {
            length,
            position: 0,
        })
    }

    pub fn n_states(&self) -> usize {
        self.length
    }

    pub fn goal(&self) -> StateId {
        self.length - 1
    }

    pub fn reset(&mut self) -> StateId {
        self.position = 0;
        self.position
    }

    /// Apply `action`; unknown actions leave the position unchanged
    pub fn step(&mut self, action: ActionId) -> Step {
        self.position = match action {
            LEFT => self.position.saturating_sub(1),
            RIGHT => (self.position + 1).min(self.goal()),
            _ => self.position,
        };
        let done = self.position == self.goal();
        Step {
            reward: if done { 1.0 } else { 0.0 },
            next_state: self.position,
            done,
        }
    }
}
