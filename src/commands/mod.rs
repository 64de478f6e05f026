/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes three top-level command modules:

- `analyze`  — Fetch workouts and print one coaching analysis
- `chat`     — Analysis followed by interactive follow-up questions
- `workouts` — List workout summaries without a chat provider
*/

use crate::config::Config;
use crate::error::Result;
use crate::hevy::{HevyClient, WorkoutRecord, WorkoutSource};
use crate::providers::{create_provider_with_override, Provider};
use crate::session::{fetch_workouts, AnalysisRequest};
use colored::Colorize;

// Terminal rendering helpers
pub mod render;

// Special commands parser for the chat loop
pub mod special_commands;

/// Everything a command needs to fetch and analyze workouts
struct CoachContext {
    source: HevyClient,
    provider: Box<dyn Provider>,
    request: AnalysisRequest,
}

impl CoachContext {
    fn from_config(config: &Config) -> Result<Self> {
        let request = analysis_request(config)?;
        let source = HevyClient::new(config.hevy.clone())?;
        let provider = create_provider_with_override(&config.provider, None, None)?;
        tracing::debug!("Using provider model {}", provider.model_name());

        Ok(Self {
            source,
            provider,
            request,
        })
    }
}

fn analysis_request(config: &Config) -> Result<AnalysisRequest> {
    Ok(AnalysisRequest {
        api_key: config.hevy_api_key()?.to_string(),
        count: config.hevy.workout_count,
        persona: config.coach.persona.clone(),
        verbosity: config.coach.verbosity,
    })
}

/// Fetch workouts and print the success banner unless `quiet`
async fn fetch_and_announce(
    source: &dyn WorkoutSource,
    request: &AnalysisRequest,
    quiet: bool,
) -> Result<Vec<WorkoutRecord>> {
    let workouts = fetch_workouts(source, &request.api_key, request.count).await?;
    if !quiet {
        println!("{}\n", render::fetched_banner(workouts.len()).green());
    }
    Ok(workouts)
}

// Analyze command handler
pub mod analyze {
    //! One-shot analysis handler.
    //!
    //! Fetches the configured number of workouts, asks the provider for an
    //! analysis, and prints it.

    use super::*;
    use crate::session::CoachSession;

    /// Output switches for `analyze`
    #[derive(Debug, Clone, Copy, Default)]
    pub struct AnalyzeOptions {
        /// Print the workouts table before the analysis
        pub show_workouts: bool,
        /// Print each workout's raw JSON
        pub raw: bool,
        /// Print one JSON document instead of text
        pub json: bool,
    }

    /// Run a single analysis
    ///
    /// # Errors
    ///
    /// Returns error if credentials are missing, no workouts could be
    /// fetched, or the provider fails
    pub async fn run_analyze(config: Config, options: AnalyzeOptions) -> Result<()> {
        tracing::info!("Starting workout analysis");
        let context = CoachContext::from_config(&config)?;

        let workouts = fetch_and_announce(&context.source, &context.request, options.json).await?;

        let mut session = CoachSession::new();
        session
            .analyze(
                context.provider.as_ref(),
                &workouts,
                &context.request.persona,
                context.request.verbosity,
            )
            .await?;

        if options.json {
            let document = serde_json::json!({
                "model": context.provider.model_name(),
                "persona": context.request.persona.name(),
                "verbosity": context.request.verbosity.name(),
                "workouts": session.workouts(),
                "analysis": session.analysis(),
            });
            println!("{}", serde_json::to_string_pretty(&document)?);
            return Ok(());
        }

        if options.show_workouts {
            render::workouts_table(session.workouts()).printstd();
            println!();
        }

        if options.raw {
            for workout in session.workouts() {
                println!("{}", workout.title.bold());
                println!("{}\n", render::raw_json(workout)?);
            }
        }

        println!("{}", "Coach's Analysis".bold().underline());
        println!("\n{}\n", session.analysis().unwrap_or_default());
        Ok(())
    }
}

// Chat command handler
pub mod chat {
    //! Interactive coaching chat handler.
    //!
    //! Runs the initial analysis, then a readline-based loop that sends
    //! follow-up questions to the provider with the whole conversation.

    use super::special_commands::{parse_special_command, print_help, SpecialCommand};
    use super::*;
    use crate::error::CoachError;
    use crate::session::{CoachSession, Reply};
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;

    /// Start interactive chat mode
    ///
    /// # Errors
    ///
    /// Returns error if credentials are missing, the first analysis fails,
    /// or the line editor cannot be created
    pub async fn run_chat(config: Config) -> Result<()> {
        tracing::info!("Starting interactive coaching chat");
        let context = CoachContext::from_config(&config)?;
        let mut session = CoachSession::new();

        start_analysis(&context, &mut session).await?;

        let mut rl = DefaultEditor::new().map_err(CoachError::from)?;
        print_welcome_banner(&context);

        loop {
            match rl.readline(&format!("{} ", render::USER_LABEL.cyan().bold())) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(trimmed);

                    match parse_special_command(trimmed) {
                        Ok(SpecialCommand::Help) => {
                            print_help();
                            continue;
                        }
                        Ok(SpecialCommand::ShowWorkouts) => {
                            render::workouts_table(session.workouts()).printstd();
                            println!();
                            continue;
                        }
                        Ok(SpecialCommand::ShowRaw(index)) => {
                            show_raw(&session, index);
                            continue;
                        }
                        Ok(SpecialCommand::ShowHistory) => {
                            for line in render::transcript_lines(session.transcript()) {
                                println!("{}\n", line);
                            }
                            continue;
                        }
                        Ok(SpecialCommand::Reset) => {
                            // A failed refresh keeps the current analysis and chat.
                            if let Err(e) = start_analysis(&context, &mut session).await {
                                eprintln!("{}", render::failure_line(&e).red());
                            }
                            continue;
                        }
                        Ok(SpecialCommand::Exit) => break,
                        Ok(SpecialCommand::None) => {}
                        Err(e) => {
                            eprintln!("{}\n", e.to_string().red());
                            continue;
                        }
                    }

                    match session.submit(context.provider.as_ref(), trimmed).await {
                        Ok(Reply::Answered(reply)) => {
                            println!("\n{} {}\n", render::COACH_LABEL.green().bold(), reply.content);
                        }
                        Ok(Reply::Duplicate) => {
                            println!("{}\n", "Same question as last time; skipped.".dimmed());
                        }
                        Err(e) => {
                            eprintln!("{}\n", format!("Error: {}", e).red());
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {:?}", err);
                    break;
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    async fn start_analysis(context: &CoachContext, session: &mut CoachSession) -> Result<()> {
        let workouts = fetch_and_announce(&context.source, &context.request, false).await?;
        let analysis = session
            .analyze(
                context.provider.as_ref(),
                &workouts,
                &context.request.persona,
                context.request.verbosity,
            )
            .await?;
        println!("{} {}\n", render::COACH_LABEL.green().bold(), analysis);
        Ok(())
    }

    fn show_raw(session: &CoachSession, index: usize) {
        let Some(workout) = session.workouts().get(index - 1) else {
            eprintln!(
                "{}\n",
                format!(
                    "No workout #{}; {} workouts loaded",
                    index,
                    session.workouts().len()
                )
                .red()
            );
            return;
        };

        match render::raw_json(workout) {
            Ok(json) => println!("{}\n{}\n", workout.title.bold(), json),
            Err(e) => eprintln!("{}\n", format!("Error: {}", e).red()),
        }
    }

    /// Display welcome banner at the start of interactive chat
    fn print_welcome_banner(context: &CoachContext) {
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║              Hevy Coach Interactive Chat                     ║");
        println!("╚══════════════════════════════════════════════════════════════╝\n");
        println!("Model:     {}", context.provider.model_name().cyan());
        println!("Persona:   {}", context.request.persona.name().cyan());
        println!("Verbosity: {}\n", context.request.verbosity.name().cyan());
        println!("Ask a follow-up question, type '/help' for commands, 'exit' to quit\n");
    }
}

// Workouts command handler
pub mod workouts {
    //! Workout listing handler. Never contacts a chat provider.

    use super::*;
    use crate::summary::summarize_all;

    /// List recent workouts
    ///
    /// # Errors
    ///
    /// Returns error if the Hevy key is missing, no workouts could be
    /// fetched, or a timestamp is malformed
    pub async fn list_workouts(config: Config, details: bool, json: bool) -> Result<()> {
        tracing::info!("Listing recent workouts");
        let request = analysis_request(&config)?;
        let source = HevyClient::new(config.hevy.clone())?;

        let workouts = fetch_and_announce(&source, &request, json).await?;
        let summaries = summarize_all(&workouts)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
            return Ok(());
        }

        if details {
            for summary in &summaries {
                println!("{}\n", render::workout_details(summary));
            }
        } else {
            render::workouts_table(&summaries).printstd();
            println!();
        }
        Ok(())
    }
}
