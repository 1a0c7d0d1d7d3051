//! Configuration loading for the qlearn driver

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};

use qlearn_core::AgentConfig;

/// Configuration for the driver
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub agent: AgentConfig,
    pub training: TrainingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    pub episodes: usize,
    pub corridor_length: usize,
    pub max_steps_per_episode: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: 500,
            corridor_length: 8,
            max_steps_per_episode: 200,
        }
    }
}

impl Config {
    /// Load configuration from file and environment
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let config_path = match explicit_path {
            Some(path) => Some(path.to_path_buf()),
            None => Self::find_config_file(),
        };

        let mut builder = ConfigBuilder::<config::builder::DefaultState>::default();

        if let Some(path) = &config_path {
            tracing::info!("Loading config from: {:?}", path);
            // An explicitly named file must exist
            builder = builder.add_source(File::from(path.clone()).required(explicit_path.is_some()));
        } else {
            tracing::info!("No config file found, using defaults");
        }

        // Environment variables like QLEARN_AGENT__LEARNING_RATE
        builder = builder.add_source(
            Environment::with_prefix("QLEARN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Find the configuration file
    fn find_config_file() -> Option<PathBuf> {
        // QLEARN_CONFIG arrives through the --config flag; check ./qlearn.toml,
        // then ~/.config/qlearn/qlearn.toml
        let local = PathBuf::from("qlearn.toml");
        if local.exists() {
            return Some(local);
        }

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".config").join("qlearn").join("qlearn.toml");
            if user_config.exists() {
                return Some(user_config);
            }
        }

        None
    }
}
