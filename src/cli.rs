//! Command-line interface definition for Hevy Coach
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for one-shot analysis, interactive coaching chat,
//! and plain workout listing.

use crate::config::{MAX_WORKOUT_COUNT, MIN_WORKOUT_COUNT};
use clap::{Args, Parser, Subcommand};

/// Hevy Coach - AI feedback on your recent Hevy workouts
///
/// Fetches your latest workouts from Hevy, summarizes them, and asks a
/// chat model for a personalized coaching analysis.
#[derive(Parser, Debug, Clone)]
#[command(name = "hevy-coach")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that fetches workouts
#[derive(Args, Debug, Clone, Default)]
pub struct CoachArgs {
    /// How many recent workouts to analyze (1-20)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(MIN_WORKOUT_COUNT as i64..=MAX_WORKOUT_COUNT as i64))]
    pub count: Option<u32>,

    /// Coach focus: Motivational, Technical, Hypertrophy, Endurance, Strength
    #[arg(short, long)]
    pub persona: Option<String>,

    /// Answer detail: Short, Normal, Detailed, "Very Detailed"
    #[arg(long)]
    pub verbosity: Option<String>,

    /// Hevy API key (overrides config and HEVY_API_KEY)
    #[arg(long)]
    pub hevy_api_key: Option<String>,

    /// Override the chat provider from config (openai, ollama)
    #[arg(long)]
    pub provider: Option<String>,

    /// Override the chat model
    #[arg(short, long)]
    pub model: Option<String>,
}

/// Available commands for Hevy Coach
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Fetch recent workouts and print an AI coaching analysis
    Analyze {
        #[command(flatten)]
        args: CoachArgs,

        /// Also print the workouts summary table
        #[arg(long)]
        show_workouts: bool,

        /// Also print the raw JSON of every workout
        #[arg(long)]
        raw: bool,

        /// Print summaries and analysis as one JSON document
        #[arg(long)]
        json: bool,
    },

    /// Analyze recent workouts, then ask follow-up questions interactively
    Chat {
        #[command(flatten)]
        args: CoachArgs,
    },

    /// List recent workout summaries without contacting a chat provider
    Workouts {
        #[command(flatten)]
        args: CoachArgs,

        /// Show per-exercise set previews
        #[arg(short, long)]
        details: bool,

        /// Print summaries as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Coaching options shared by every command
    pub fn coach_args(&self) -> &CoachArgs {
        match self {
            Self::Analyze { args, .. } | Self::Chat { args } | Self::Workouts { args, .. } => args,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            verbose: false,
            command: Commands::Workouts {
                args: CoachArgs::default(),
                details: false,
                json: false,
            },
        }
    }
}
