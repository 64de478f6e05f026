//! Hevy Coach - AI coaching feedback for Hevy workouts
//!
#![doc = "Main entry point for the hevy-coach application."]

use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hevy_coach::cli::{Cli, Commands};
use hevy_coach::commands;
use hevy_coach::commands::analyze::AnalyzeOptions;
use hevy_coach::config::Config;
use hevy_coach::error::Result;

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        tracing::debug!("Command failed: {:?}", e);
        eprintln!("{}", commands::render::failure_line(&e).red());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Analyze {
            show_workouts,
            raw,
            json,
            ..
        } => {
            let options = AnalyzeOptions {
                show_workouts,
                raw,
                json,
            };
            commands::analyze::run_analyze(config, options).await
        }
        Commands::Chat { .. } => commands::chat::run_chat(config).await,
        Commands::Workouts { details, json, .. } => {
            commands::workouts::list_workouts(config, details, json).await
        }
    }
}

/// Initialize tracing subscriber with environment filter
///
/// `RUST_LOG` wins when set; otherwise `-v` selects debug output.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "hevy_coach=debug"
    } else {
        "hevy_coach=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
