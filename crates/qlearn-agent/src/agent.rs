//! Q-learning agent - epsilon-greedy selection and TD(0) updates

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use qlearn_core::{ActionId, AgentConfig, QLearnError, Result, Reward, StateId};

use crate::schedule::EpsilonSchedule;
use crate::table::QTable;
use crate::transition::Transition;

/// Tabular Q-learning agent.
///
/// Owns its Q-table, exploration schedule and random source. The table can
/// be read from outside but is only written by [`QLearningAgent::learn`].
pub struct QLearningAgent<R = StdRng> {
    config: AgentConfig,
    table: QTable,
    epsilon: EpsilonSchedule,
    rng: R,
    steps: u64,
    total_reward: f64,
}

impl QLearningAgent<StdRng> {
    /// Create an agent from positional hyperparameters, seeded from OS entropy
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        learning_rate: f64,
        discount_factor: f64,
        n_actions: usize,
        n_states: usize,
        eps_start: f64,
        eps_end: f64,
        eps_decay: f64,
    ) -> Result<Self> {
        Self::from_config(&AgentConfig::new(
            learning_rate,
            discount_factor,
            n_actions,
            n_states,
            eps_start,
            eps_end,
            eps_decay,
        ))
    }

    /// Create an agent from a config, seeding the RNG from `config.seed` if set
    pub fn from_config(config: &AgentConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> QLearningAgent<R> {
    /// Create an agent with an explicit random source
    pub fn with_rng(config: &AgentConfig, rng: R) -> Result<Self> {
        config.validate()?;

        info!(
            "Q-learning agent created: {} states x {} actions, lr={}, gamma={}, epsilon {} -> {} (decay {})",
            config.n_states,
            config.n_actions,
            config.learning_rate,
            config.discount_factor,
            config.eps_start,
            config.eps_end,
            config.eps_decay
        );

        Ok(Self {
            config: config.clone(),
            table: QTable::new(config.n_states, config.n_actions)?,
            epsilon: EpsilonSchedule::new(config.eps_start, config.eps_end, config.eps_decay),
            rng,
            steps: 0,
            total_reward: 0.0,
        })
    }

    /// Epsilon-greedy action for `state`.
    ///
    /// Exploits when a uniform draw exceeds epsilon, otherwise samples an
    /// action uniformly. Leaves the table and epsilon untouched.
    pub fn choose_action(&mut self, state: StateId) -> Result<ActionId> {
        self.table.check_state(state)?;

        let sample: f64 = self.rng.gen();
        if sample > self.epsilon.value() {
            self.table.argmax(state)
        } else {
            Ok(self.rng.gen_range(0..self.config.n_actions))
        }
    }

    /// Best known action for `state`, lowest index on ties
    pub fn greedy_action(&self, state: StateId) -> Result<ActionId> {
        self.table.argmax(state)
    }

    /// Apply one Q-learning backup for the transition and decay epsilon.
    ///
    /// `Q(s,a) += lr * (r + gamma * max_a' Q(s',a') - Q(s,a))`
    ///
    /// All inputs and the updated value are validated before anything is
    /// written, so an error leaves the table, epsilon and stats unchanged.
    pub fn learn(
        &mut self,
        state: StateId,
        action: ActionId,
        reward: Reward,
        next_state: StateId,
    ) -> Result<()> {
        let current = self.table.get(state, action)?;
        let best_next = self.table.max_value(next_state)?;
        if !reward.is_finite() {
            return Err(QLearnError::InvalidReward(reward));
        }

        let target = reward + self.config.discount_factor * best_next;
        let td_error = target - current;
        let updated = current + self.config.learning_rate * td_error;
        if !updated.is_finite() {
            return Err(QLearnError::NonFiniteValue { state, action });
        }
        self.table.set(state, action, updated)?;

        self.decrement_epsilon();
        self.steps += 1;
        self.total_reward += reward;

        debug!(
            "Learn step {}: s={} a={} r={} s'={} td_error={:.4} epsilon={:.4}",
            self.steps,
            state,
            action,
            reward,
            next_state,
            td_error,
            self.epsilon.value()
        );

        Ok(())
    }

    /// Learn from a [`Transition`] record
    pub fn learn_transition(&mut self, transition: &Transition) -> Result<()> {
        self.learn(
            transition.state,
            transition.action,
            transition.reward,
            transition.next_state,
        )
    }

    fn decrement_epsilon(&mut self) {
        let before = self.epsilon.value();
        let after = self.epsilon.step();
        if before > after && self.epsilon.is_at_floor() {
            debug!("Epsilon reached floor {} after {} steps", after, self.steps + 1);
        }
    }

    /// Current exploration rate
    pub fn epsilon(&self) -> f64 {
        self.epsilon.value()
    }

    /// Q(state, action)
    pub fn q_value(&self, state: StateId, action: ActionId) -> Result<f64> {
        self.table.get(state, action)
    }

    /// All action values for `state`
    pub fn q_values(&self, state: StateId) -> Result<&[f64]> {
        self.table.row(state)
    }

    /// Read-only view of the whole table
    pub fn table(&self) -> &QTable {
        &self.table
    }

    pub fn n_states(&self) -> usize {
        self.config.n_states
    }

    pub fn n_actions(&self) -> usize {
        self.config.n_actions
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Get statistics
    pub fn stats(&self) -> AgentStats {
        AgentStats {
            steps: self.steps,
            epsilon: self.epsilon.value(),
            total_reward: self.total_reward,
            average_reward: if self.steps > 0 {
                self.total_reward / self.steps as f64
            } else {
                0.0
            },
        }
    }
}

/// Agent statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentStats {
    /// Successful learn calls
    pub steps: u64,
    pub epsilon: f64,
    pub total_reward: f64,
    pub average_reward: f64,
}
