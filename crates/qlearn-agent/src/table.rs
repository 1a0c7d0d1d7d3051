//! Dense state-action value table

use qlearn_core::{ActionId, QLearnError, Result, StateId};

/// Q-table over a fixed `n_states x n_actions` grid, stored row-major by state.
///
/// Every entry exists from construction on; the key space never grows or shrinks.
#[derive(Debug, Clone, PartialEq)]
pub struct QTable {
    values: Vec<f64>,
    n_states: usize,
    n_actions: usize,
}

impl QTable {
    /// Create a zero-initialized table.
    ///
    /// Fails when `n_states * n_actions` overflows.
    pub fn new(n_states: usize, n_actions: usize) -> Result<Self> {
        let len = n_states.checked_mul(n_actions).ok_or_else(|| {
            QLearnError::Config(format!(
                "table of {n_states} x {n_actions} entries overflows"
            ))
        })?;

        Ok(Self {
            values: vec![0.0; len],
            n_states,
            n_actions,
        })
    }

    pub fn n_states(&self) -> usize {
        self.n_states
    }

    pub fn n_actions(&self) -> usize {
        self.n_actions
    }

    /// Total number of (state, action) entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn check_state(&self, state: StateId) -> Result<()> {
        if state < self.n_states {
            Ok(())
        } else {
            Err(QLearnError::StateOutOfRange {
                state,
                n_states: self.n_states,
            })
        }
    }

    pub fn check_action(&self, action: ActionId) -> Result<()> {
        if action < self.n_actions {
            Ok(())
        } else {
            Err(QLearnError::ActionOutOfRange {
                action,
                n_actions: self.n_actions,
            })
        }
    }

    fn offset(&self, state: StateId, action: ActionId) -> Result<usize> {
        self.check_state(state)?;
        self.check_action(action)?;
        Ok(state * self.n_actions + action)
    }

    /// Q(state, action)
    pub fn get(&self, state: StateId, action: ActionId) -> Result<f64> {
        let offset = self.offset(state, action)?;
        Ok(self.values[offset])
    }

    /// All action values for `state`, indexed by action
    pub fn row(&self, state: StateId) -> Result<&[f64]> {
        self.check_state(state)?;
        let start = state * self.n_actions;
        Ok(&self.values[start..start + self.n_actions])
    }

    /// Action with the highest value for `state`; ties go to the lowest index.
    pub fn argmax(&self, state: StateId) -> Result<ActionId> {
        let row = self.row(state)?;
        let mut best = 0;
        for (action, &value) in row.iter().enumerate().skip(1) {
            if value > row[best] {
                best = action;
            }
        }
        Ok(best)
    }

    /// Highest action value for `state`
    pub fn max_value(&self, state: StateId) -> Result<f64> {
        let best = self.argmax(state)?;
        self.get(state, best)
    }

    pub(crate) fn set(&mut self, state: StateId, action: ActionId, value: f64) -> Result<()> {
        let offset = self.offset(state, action)?;
        self.values[offset] = value;
        Ok(())
    }
}
