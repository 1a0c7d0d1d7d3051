//! Integration tests for the Q-learning agent
//!
//! These tests drive the agent only through its public API.

#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]

use qlearn_agent::{AgentConfig, Learner, QLearnError, QLearningAgent, Transition};
use rand::rngs::StdRng;
use rand::SeedableRng;

const LEFT: usize = 0;
const RIGHT: usize = 1;

/// One-dimensional corridor: reaching the last cell pays 1.0 and ends the episode
fn corridor_step(length: usize, state: usize, action: usize) -> (f64, usize, bool) {
    let next = match action {
        LEFT => state.saturating_sub(1),
        _ => (state + 1).min(length - 1),
    };
    if next == length - 1 {
        (1.0, next, true)
    } else {
        (0.0, next, false)
    }
}

#[test]
fn test_epsilon_reaches_floor_exactly() {
    let config = AgentConfig::new(0.1, 0.9, 2, 3, 1.0, 0.05, 0.9).with_seed(11);
    let floor_steps = config.steps_to_floor().unwrap();
    assert_eq!(floor_steps, 29);

    let mut agent = QLearningAgent::from_config(&config).unwrap();
    let mut previous = agent.epsilon();

    for step in 1..=100 {
        agent.learn(step as usize % 3, 0, 0.0, 0).unwrap();
        let epsilon = agent.epsilon();
        assert!(epsilon <= previous, "epsilon rose at step {step}");

        if step < floor_steps {
            assert!(epsilon > 0.05, "floor reached early at step {step}");
        } else {
            assert_eq!(epsilon, 0.05, "not at floor at step {step}");
        }
        previous = epsilon;
    }
}

#[test]
fn test_floor_step_count_matches_agent_when_log_ratio_rounds_down() {
    let config = AgentConfig::new(0.1, 0.9, 2, 1, 1.0, 0.001, 0.1).with_seed(4);
    let mut agent = QLearningAgent::from_config(&config).unwrap();

    let mut steps = 0u64;
    while agent.epsilon() != 0.001 {
        agent.learn(0, 0, 0.0, 0).unwrap();
        steps += 1;
        assert!(steps < 100, "epsilon never reached the floor");
    }

    assert_eq!(steps, 4);
    assert_eq!(config.steps_to_floor(), Some(steps));
}

#[test]
fn test_exploration_coverage() {
    let config = AgentConfig::new(0.5, 0.9, 4, 2, 1.0, 1.0, 1.0);
    let mut agent = QLearningAgent::with_rng(&config, StdRng::seed_from_u64(2024)).unwrap();

    let mut counts = [0usize; 4];
    let draws = 40_000;
    for _ in 0..draws {
        counts[agent.choose_action(1).unwrap()] += 1;
    }

    let expected = draws / 4;
    for (action, &count) in counts.iter().enumerate() {
        let deviation = (count as f64 - expected as f64).abs() / expected as f64;
        assert!(
            deviation < 0.1,
            "action {action} drawn {count} times, expected about {expected}"
        );
    }
}

#[test]
fn test_exploitation_is_deterministic() {
    let config = AgentConfig::new(1.0, 0.0, 3, 1, 0.0, 0.0, 1.0).with_seed(5);
    let mut agent = QLearningAgent::from_config(&config).unwrap();

    // With lr = 1 and gamma = 0 the entry becomes the reward
    agent.learn(0, 2, 0.7, 0).unwrap();
    agent.learn(0, 1, 0.3, 0).unwrap();

    let values = agent.q_values(0).unwrap().to_vec();
    assert_eq!(values, vec![0.0, 0.3, 0.7]);

    for _ in 0..500 {
        let action = agent.choose_action(0).unwrap();
        assert_eq!(action, 2);
        assert!(values.iter().all(|&v| values[action] >= v));
    }
}

#[test]
fn test_range_errors_surface_to_caller() {
    let mut agent = QLearningAgent::new(0.5, 0.9, 2, 2, 1.0, 0.1, 0.99).unwrap();

    let err = agent.learn(0, 0, 1.0, 2).unwrap_err();
    assert!(err.is_range_error());
    assert_eq!(
        err,
        QLearnError::StateOutOfRange {
            state: 2,
            n_states: 2
        }
    );

    assert!(agent.q_value(0, 3).unwrap_err().is_range_error());
    assert_eq!(agent.epsilon(), 1.0);
    assert!(agent.table().row(0).unwrap().iter().all(|&v| v == 0.0));
}

#[test]
fn test_corridor_learns_to_go_right() {
    let length = 5;
    let config = AgentConfig::new(0.5, 0.9, 2, length, 1.0, 0.05, 0.99).with_seed(42);
    let mut agent = QLearningAgent::from_config(&config).unwrap();

    for _episode in 0..300 {
        let mut state = 0;
        for _ in 0..100 {
            let action = agent.choose_action(state).unwrap();
            let (reward, next_state, done) = corridor_step(length, state, action);
            agent.learn(state, action, reward, next_state).unwrap();
            state = next_state;
            if done {
                break;
            }
        }
    }

    for state in 0..length - 1 {
        assert_eq!(
            agent.greedy_action(state).unwrap(),
            RIGHT,
            "state {state}: {:?}",
            agent.q_values(state).unwrap()
        );
    }

    // Value one step from the goal approaches the immediate reward
    assert!((agent.q_value(length - 2, RIGHT).unwrap() - 1.0).abs() < 1e-3);
    assert_eq!(agent.epsilon(), 0.05);
}

#[test]
fn test_drive_through_learner_trait() {
    let config = AgentConfig::new(0.5, 0.9, 2, 4, 1.0, 0.1, 0.9).with_seed(9);
    let mut learner: Box<dyn Learner> = Box::new(QLearningAgent::from_config(&config).unwrap());

    let mut state = 0;
    for _ in 0..20 {
        let action = learner.choose_action(state).unwrap();
        let (reward, next_state, done) = corridor_step(4, state, action);
        learner
            .learn(&Transition::new(state, action, reward, next_state))
            .unwrap();
        state = if done { 0 } else { next_state };
    }

    let epsilon = learner.params()["epsilon"].as_f64().unwrap();
    assert!(epsilon < 1.0);
    assert!(epsilon >= 0.1);
}
