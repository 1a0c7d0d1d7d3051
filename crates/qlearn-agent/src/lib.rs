//! qlearn agent - Tabular Q-learning
//!
//! This crate provides a Q-learning agent over discrete, finite state and
//! action spaces: a dense Q-table, an epsilon-greedy exploration policy with
//! exponential decay, and the TD(0) update rule.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::module_name_repetitions)]

pub mod agent;
pub mod learner;
pub mod schedule;
pub mod table;
pub mod transition;

pub use agent::{AgentStats, QLearningAgent};
pub use learner::Learner;
pub use qlearn_core::{ActionId, AgentConfig, QLearnError, Result, Reward, StateId};
pub use schedule::EpsilonSchedule;
pub use table::QTable;
pub use transition::Transition;
