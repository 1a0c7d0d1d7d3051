//! qlearn Core - Shared types, configuration, and errors
//!
//! This crate provides the foundational types used across all qlearn components.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::float_cmp)]

pub mod config;
pub mod error;
pub mod types;

pub use config::AgentConfig;
pub use error::{QLearnError, Result};
pub use types::*;
