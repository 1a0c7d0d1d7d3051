//! qlearn CLI - reference driver for the Q-learning agent
//!
//! Trains an agent on a toy corridor environment. The environment and the
//! training loop live here; the agent itself is in `qlearn-agent`.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qlearn_agent::{AgentConfig, QLearningAgent};

mod config;
mod corridor;

use crate::config::Config;
use crate::corridor::{Corridor, LEFT, N_ACTIONS};

#[derive(Parser)]
#[command(name = "qlearn")]
#[command(author, version, about = "qlearn - tabular Q-learning driver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a TOML config file
    #[arg(short, long, global = true, env = "QLEARN_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Train an agent on the corridor environment
    Train {
        /// Number of episodes
        #[arg(short, long)]
        episodes: Option<usize>,

        /// Seed for the exploration RNG
        #[arg(short, long)]
        seed: Option<u64>,

        /// Corridor length (number of states)
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Print the resolved configuration
    ShowConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = if cli.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("qlearn={log_level},qlearn_agent={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Train {
            episodes,
            seed,
            length,
        } => {
            if let Some(episodes) = episodes {
                config.training.episodes = episodes;
            }
            if let Some(seed) = seed {
                config.agent.seed = Some(seed);
            }
            if let Some(length) = length {
                config.training.corridor_length = length;
            }
            train(&config)
        }
        Commands::ShowConfig => {
            let text = toml::to_string_pretty(&config).context("Failed to render configuration")?;
            println!("{text}");
            Ok(())
        }
    }
}

fn train(config: &Config) -> Result<()> {
    let corridor = Corridor::new(config.training.corridor_length)
        .context("Invalid training configuration")?;
    let agent_config = corridor_agent_config(config, &corridor);
    run_training(config, corridor, &agent_config)
}

/// The environment defines the state and action spaces
fn corridor_agent_config(config: &Config, corridor: &Corridor) -> AgentConfig {
    let mut agent_config = config.agent.clone();
    if agent_config.n_states != corridor.n_states() || agent_config.n_actions != N_ACTIONS {
        info!(
            "Corridor defines the table size: {} states x {} actions (configured {} x {})",
            corridor.n_states(),
            N_ACTIONS,
            agent_config.n_states,
            agent_config.n_actions
        );
    }
    agent_config.n_states = corridor.n_states();
    agent_config.n_actions = N_ACTIONS;
    agent_config
}

fn run_training(config: &Config, mut corridor: Corridor, agent_config: &AgentConfig) -> Result<()> {
    let mut agent =
        QLearningAgent::from_config(agent_config).context("Failed to create agent")?;

    let mut solved = 0usize;
    let mut total_steps = 0usize;

    for episode in 0..config.training.episodes {
        let mut state = corridor.reset();
        let mut steps = 0;
        let mut reached_goal = false;

        while steps < config.training.max_steps_per_episode {
            let action = agent.choose_action(state)?;
            let step = corridor.step(action);
            agent.learn(state, action, step.reward, step.next_state)?;

            state = step.next_state;
            steps += 1;
            if step.done {
                reached_goal = true;
                break;
            }
        }

        total_steps += steps;
        if reached_goal {
            solved += 1;
        }
        debug!(
            "Episode {}: {} steps, goal reached: {}, epsilon {:.4}",
            episode,
            steps,
            reached_goal,
            agent.epsilon()
        );
    }

    info!(
        "Training complete: {} episodes, {} solved, {:.1} steps/episode",
        config.training.episodes,
        solved,
        if config.training.episodes > 0 {
            total_steps as f64 / config.training.episodes as f64
        } else {
            0.0
        }
    );

    let policy: String = (0..corridor.goal())
        .map(|state| match agent.greedy_action(state) {
            Ok(LEFT) => Ok('<'),
            Ok(_) => Ok('>'),
            Err(e) => Err(e),
        })
        .collect::<Result<_, _>>()?;
    println!("Greedy policy: {policy}G");

    let stats = serde_json::to_string_pretty(&agent.stats())?;
    println!("{stats}");

    Ok(())
}
