//! Learner trait and its Q-learning implementation

use rand::Rng;

use qlearn_core::{ActionId, Result, StateId};

use crate::agent::QLearningAgent;
use crate::transition::Transition;

/// Trait for tabular learners driven by an external training loop
pub trait Learner {
    /// Algorithm name
    fn name(&self) -> &str;

    /// Select an action for state, possibly exploring
    fn choose_action(&mut self, state: StateId) -> Result<ActionId>;

    /// Update from one observed transition
    fn learn(&mut self, transition: &Transition) -> Result<()>;

    /// Get algorithm parameters as JSON
    fn params(&self) -> serde_json::Value;
}

impl<R: Rng> Learner for QLearningAgent<R> {
    fn name(&self) -> &str {
        "q_learning"
    }

    fn choose_action(&mut self, state: StateId) -> Result<ActionId> {
        QLearningAgent::choose_action(self, state)
    }

    fn learn(&mut self, transition: &Transition) -> Result<()> {
        self.learn_transition(transition)
    }

    fn params(&self) -> serde_json::Value {
        let config = self.config();
        serde_json::json!({
            "learning_rate": config.learning_rate,
            "discount_factor": config.discount_factor,
            "n_actions": config.n_actions,
            "n_states": config.n_states,
            "eps_start": config.eps_start,
            "eps_end": config.eps_end,
            "eps_decay": config.eps_decay,
            "epsilon": self.epsilon(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qlearn_core::AgentConfig;

    fn boxed_learner() -> Box<dyn Learner> {
        let config = AgentConfig::new(0.5, 0.9, 2, 3, 1.0, 0.1, 0.5).with_seed(3);
        Box::new(QLearningAgent::from_config(&config).unwrap())
    }

    #[test]
    fn test_name() {
        assert_eq!(boxed_learner().name(), "q_learning");
    }

    #[test]
    fn test_learn_through_trait_object() {
        let mut learner = boxed_learner();
        let action = learner.choose_action(0).unwrap();
        assert!(action < 2);

        learner.learn(&Transition::new(0, action, 1.0, 1)).unwrap();
        assert_eq!(learner.params()["epsilon"], 0.5);
    }

    #[test]
    fn test_params() {
        let params = boxed_learner().params();
        assert_eq!(params["learning_rate"], 0.5);
        assert_eq!(params["discount_factor"], 0.9);
        assert_eq!(params["n_states"], 3);
        assert_eq!(params["epsilon"], 1.0);
    }

    #[test]
    fn test_trait_errors_propagate() {
        let mut learner = boxed_learner();
        assert!(learner.choose_action(3).is_err());
        assert!(learner.learn(&Transition::new(0, 5, 0.0, 0)).is_err());
    }
}
