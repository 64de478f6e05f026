//! Special commands parser for interactive coaching chat
//!
//! Lines starting with `/` are handled locally instead of being sent to the
//! coach. They let the user inspect the fetched workouts, review the
//! conversation, start over, or leave.
//!
//! Commands are case-insensitive.

use thiserror::Error;

/// Errors that can occur when parsing special commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command was entered
    #[error("Unknown command: {0}\n\nType '/help' to see available commands")]
    UnknownCommand(String),

    /// Command was given an unsupported argument
    #[error("Unsupported argument for {command}: {arg}\n\nType '/help' to see valid usage")]
    UnsupportedArgument { command: String, arg: String },

    /// Command requires an argument but none was provided
    #[error("Command {command} requires an argument\n\nUsage: {usage}")]
    MissingArgument { command: String, usage: String },
}

/// Special commands that can be executed during interactive chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialCommand {
    /// Display help information
    Help,

    /// Show the summary table of the analyzed workouts
    ShowWorkouts,

    /// Print the raw JSON of one workout, 1-based
    ShowRaw(usize),

    /// Replay the conversation transcript
    ShowHistory,

    /// Fetch workouts again and start a new analysis
    Reset,

    /// Exit the interactive session
    Exit,

    /// Not a special command; send the input to the coach
    None,
}

/// Parse a user input string into a special command
///
/// # Errors
///
/// Returns [`CommandError::UnknownCommand`] for an unrecognized `/` command,
/// [`CommandError::MissingArgument`] for `/raw` without an index, and
/// [`CommandError::UnsupportedArgument`] for an index that is not a positive
/// number.
///
/// # Examples
///
/// ```
/// use hevy_coach::commands::special_commands::{parse_special_command, SpecialCommand};
///
/// assert_eq!(parse_special_command("/raw 2").unwrap(), SpecialCommand::ShowRaw(2));
/// assert_eq!(parse_special_command("quit").unwrap(), SpecialCommand::Exit);
/// assert_eq!(
///     parse_special_command("how was my bench?").unwrap(),
///     SpecialCommand::None
/// );
/// assert!(parse_special_command("/foo").is_err());
/// ```
pub fn parse_special_command(input: &str) -> Result<SpecialCommand, CommandError> {
    let trimmed = input.trim();
    let lower = trimmed.to_lowercase();

    if !trimmed.starts_with('/') && lower != "exit" && lower != "quit" {
        return Ok(SpecialCommand::None);
    }

    match lower.as_str() {
        "/help" | "/?" => Ok(SpecialCommand::Help),
        "/workouts" => Ok(SpecialCommand::ShowWorkouts),
        "/history" => Ok(SpecialCommand::ShowHistory),
        "/reset" => Ok(SpecialCommand::Reset),
        "/exit" | "/quit" | "exit" | "quit" => Ok(SpecialCommand::Exit),

        "/raw" => Err(CommandError::MissingArgument {
            command: "/raw".to_string(),
            usage: "/raw <workout number>".to_string(),
        }),
        input if input.starts_with("/raw ") => {
            let arg = input[5..].trim();
            match arg.parse::<usize>() {
                Ok(index) if index > 0 => Ok(SpecialCommand::ShowRaw(index)),
                _ => Err(CommandError::UnsupportedArgument {
                    command: "/raw".to_string(),
                    arg: arg.to_string(),
                }),
            }
        }

        _ => Err(CommandError::UnknownCommand(trimmed.to_string())),
    }
}

/// Print the special commands help
pub fn print_help() {
    println!(
        r#"
Special Commands for Coaching Chat
==================================

WORKOUTS:
  /workouts       - Show the analyzed workouts
  /raw <n>        - Show the raw JSON of workout n (as numbered in /workouts)

CONVERSATION:
  /history        - Replay the conversation so far
  /reset          - Fetch workouts again and start a new analysis

SESSION CONTROL:
  /help           - Show this help message
  /?              - Same as /help
  /exit           - Exit interactive mode
  exit, quit      - Same as /exit

NOTES:
  - Commands are case-insensitive
  - Regular text (not starting with /) is sent to the coach
  - Sending the same question twice in a row is ignored
"#
    );
}
