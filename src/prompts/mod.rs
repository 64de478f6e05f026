//! Analysis prompt construction
//!
//! Combines the workout summaries with the selected persona and verbosity
//! into the single user prompt that starts a coaching conversation.

pub mod coaching;

pub use coaching::{Persona, Verbosity, FALLBACK_PERSONA_INSTRUCTION};

use crate::hevy::WorkoutRecord;
use crate::summary::WorkoutSummary;

/// Number of exercises listed per workout in the prompt
const PROMPT_EXERCISES_PER_WORKOUT: usize = 6;

/// Closing request appended after the workout list
const CLOSING_INSTRUCTION: &str = "Give a motivating, clear analysis of the user's recent training, noting strengths and suggesting one actionable improvement for the next week. Focus on overall trends, and end with a suggested future workout plan. ";

/// Compact one-line description of a workout for the prompt
///
/// Format: `'{title}' on {day}: {exercise}, {exercise}, ...` listing at most
/// the first six exercises.
///
/// # Examples
///
/// ```
/// use hevy_coach::hevy::WorkoutRecord;
/// use hevy_coach::prompts::workout_fragment;
/// use hevy_coach::summary::summarize;
///
/// let record: WorkoutRecord = serde_json::from_str(r#"{
///     "title": "Leg Day",
///     "start_time": "2024-01-01T10:00:00Z",
///     "end_time": "2024-01-01T11:05:00Z",
///     "exercises": [{"title": "Squat", "sets": [{}, {}]}]
/// }"#).unwrap();
///
/// let fragment = workout_fragment(&summarize(&record).unwrap());
/// assert_eq!(fragment, "'Leg Day' on 2024-01-01: Squat (2 sets)");
/// ```
pub fn workout_fragment(summary: &WorkoutSummary) -> String {
    let exercises: Vec<&str> = summary
        .exercises
        .iter()
        .take(PROMPT_EXERCISES_PER_WORKOUT)
        .map(String::as_str)
        .collect();
    format!(
        "'{}' on {}: {}",
        summary.title,
        summary.day(),
        exercises.join(", ")
    )
}

/// Prompt fragments for a list of summaries, in order
pub fn workout_fragments(summaries: &[WorkoutSummary]) -> Vec<String> {
    summaries.iter().map(workout_fragment).collect()
}

/// Build the analysis prompt
///
/// # Arguments
///
/// * `workouts` - Raw records; only their count is used
/// * `summaries` - One prompt fragment per workout (see [`workout_fragment`])
/// * `persona` - Coaching style
/// * `verbosity` - Requested level of detail
///
/// # Examples
///
/// ```
/// use hevy_coach::prompts::{build_prompt, Persona, Verbosity};
///
/// let prompt = build_prompt(&[], &[], &Persona::Strength, Verbosity::Short);
/// assert!(prompt.starts_with("You are an experienced personal trainer with a strength focus."));
/// assert!(prompt.contains("(2-3 sentences)"));
/// ```
pub fn build_prompt(
    workouts: &[WorkoutRecord],
    summaries: &[String],
    persona: &Persona,
    verbosity: Verbosity,
) -> String {
    format!(
        "You are an experienced personal trainer with a {} focus. {} {} Here are the user's last {} workouts: {}. {}",
        persona.name().to_lowercase(),
        persona.instruction(),
        verbosity.instruction(),
        workouts.len(),
        summaries.join("; "),
        CLOSING_INSTRUCTION
    )
}
