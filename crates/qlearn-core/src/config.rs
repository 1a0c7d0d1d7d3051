//! Agent configuration and hyperparameter validation

use serde::{Deserialize, Serialize};

use crate::error::{QLearnError, Result};

/// Hyperparameters for a tabular Q-learning agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Step size of each update, in (0, 1]
    pub learning_rate: f64,

    /// Weight of future reward, in [0, 1]
    pub discount_factor: f64,

    pub n_actions: usize,
    pub n_states: usize,

    /// Initial exploration rate
    pub eps_start: f64,

    /// Exploration floor
    pub eps_end: f64,

    /// Multiplicative decay applied once per learning step, in (0, 1]
    pub eps_decay: f64,

    /// Seed for the exploration RNG; OS entropy when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            discount_factor: 0.99,
            n_actions: 4,
            n_states: 16,
            eps_start: 1.0,
            eps_end: 0.01,
            eps_decay: 0.995,
            seed: None,
        }
    }
}

impl AgentConfig {
    /// Create a config from the seven positional hyperparameters
    pub fn new(
        learning_rate: f64,
        discount_factor: f64,
        n_actions: usize,
        n_states: usize,
        eps_start: f64,
        eps_end: f64,
        eps_decay: f64,
    ) -> Self {
        Self {
            learning_rate,
            discount_factor,
            n_actions,
            n_states,
            eps_start,
            eps_end,
            eps_decay,
            seed: None,
        }
    }

    /// Set the exploration seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every hyperparameter against its valid range.
    ///
    /// Out-of-range values are rejected, never clamped.
    pub fn validate(&self) -> Result<()> {
        if self.n_actions == 0 {
            return Err(config_error("n_actions must be at least 1"));
        }
        if self.n_states == 0 {
            return Err(config_error("n_states must be at least 1"));
        }
        if self.n_states.checked_mul(self.n_actions).is_none() {
            return Err(config_error(format!(
                "table of {} x {} entries overflows",
                self.n_states, self.n_actions
            )));
        }

        check_range("learning_rate", self.learning_rate, |v| v > 0.0 && v <= 1.0, "(0, 1]")?;
        check_range("discount_factor", self.discount_factor, unit_interval, "[0, 1]")?;
        check_range("eps_start", self.eps_start, unit_interval, "[0, 1]")?;
        check_range("eps_end", self.eps_end, unit_interval, "[0, 1]")?;
        check_range("eps_decay", self.eps_decay, |v| v > 0.0 && v <= 1.0, "(0, 1]")?;

        if self.eps_end > self.eps_start {
            return Err(config_error(format!(
                "eps_end ({}) must not exceed eps_start ({})",
                self.eps_end, self.eps_start
            )));
        }

        Ok(())
    }

    /// Number of learning steps after which epsilon sits exactly at `eps_end`.
    ///
    /// Replays the clamped multiplicative decay step by step, so the count
    /// matches the agent's schedule under floating-point rounding. Returns
    /// `None` when the floor is never reached by decay alone (`eps_decay == 1`
    /// or `eps_end == 0` while above the floor).
    pub fn steps_to_floor(&self) -> Option<u64> {
        if self.eps_start <= self.eps_end {
            return Some(0);
        }
        if self.eps_decay >= 1.0 || self.eps_end <= 0.0 {
            return None;
        }

        // Rounding can only shift the closed form by a step or two
        let estimate = ((self.eps_end / self.eps_start).ln() / self.eps_decay.ln()).ceil();
        let limit = (estimate as u64).saturating_add(16);

        let mut epsilon = self.eps_start;
        for step in 1..=limit {
            epsilon = (epsilon * self.eps_decay).max(self.eps_end);
            if epsilon <= self.eps_end {
                return Some(step);
            }
        }
        None
    }
}

fn unit_interval(v: f64) -> bool {
    (0.0..=1.0).contains(&v)
}

fn check_range(name: &str, value: f64, valid: impl Fn(f64) -> bool, range: &str) -> Result<()> {
    if value.is_finite() && valid(value) {
        Ok(())
    } else {
        Err(config_error(format!("{name} must be in {range}, got {value}")))
    }
}

fn config_error(msg: impl Into<String>) -> QLearnError {
    QLearnError::Config(msg.into())
}
