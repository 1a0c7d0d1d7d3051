//! Common types used throughout qlearn

/// Index of a discrete environment state in `[0, n_states)`
pub type StateId = usize;

/// Index of a discrete action in `[0, n_actions)`
pub type ActionId = usize;

/// Reward value from environment
pub type Reward = f64;
