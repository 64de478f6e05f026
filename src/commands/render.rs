//! Terminal rendering of workouts and conversations
//!
//! Helpers here return plain strings or tables; callers add color when
//! printing.

use crate::error::{CoachError, Result};
use crate::providers::Message;
use crate::summary::{set_preview, WorkoutSummary};
use prettytable::{row, Table};

/// Label in front of user messages in a transcript
pub const USER_LABEL: &str = "You:";

/// Label in front of coach messages in a transcript
pub const COACH_LABEL: &str = "AI:";

/// Banner printed after a successful fetch
///
/// # Examples
///
/// ```
/// use hevy_coach::commands::render::fetched_banner;
///
/// assert_eq!(fetched_banner(5), "✅ 5 Workouts fetched successfully!");
/// ```
pub fn fetched_banner(count: usize) -> String {
    format!("✅ {} Workouts fetched successfully!", count)
}

/// Line printed for an error that ends a command
pub fn failure_line(error: &anyhow::Error) -> String {
    format!("❌ {}", error)
}

/// Duration with one decimal place, e.g. `65.0`
pub fn format_duration(minutes: f64) -> String {
    format!("{:.1}", minutes)
}

/// Summary table: number, title, date, duration, exercises
pub fn workouts_table(workouts: &[WorkoutSummary]) -> Table {
    let mut table = Table::new();
    table.add_row(row!["#", "Title", "Date", "Duration (min)", "Exercises"]);

    for (index, workout) in workouts.iter().enumerate() {
        table.add_row(row![
            index + 1,
            workout.title,
            workout.date,
            format_duration(workout.duration),
            workout.exercises.join("\n")
        ]);
    }

    table
}

/// Multi-line description of one workout with set previews
///
/// ```text
/// Leg Day
/// Date: 2024-01-01 10:00 | Duration: 65.0 min
/// Exercises: Squat (2 sets)
///   - Squat: 5 reps @ 100 kg, 5 reps @ 110 kg
/// ```
pub fn workout_details(workout: &WorkoutSummary) -> String {
    let mut lines = vec![
        workout.title.clone(),
        format!(
            "Date: {} | Duration: {} min",
            workout.date,
            format_duration(workout.duration)
        ),
        format!("Exercises: {}", workout.exercises.join(", ")),
    ];

    for exercise in &workout.raw.exercises {
        let preview = set_preview(&exercise.sets);
        if preview.is_empty() {
            lines.push(format!("  - {}: no sets", exercise.display_title()));
        } else {
            lines.push(format!("  - {}: {}", exercise.display_title(), preview));
        }
    }

    lines.join("\n")
}

/// Pretty-printed JSON of the record behind a summary
///
/// # Errors
///
/// Returns error if the record cannot be serialized
pub fn raw_json(workout: &WorkoutSummary) -> Result<String> {
    serde_json::to_string_pretty(&workout.raw).map_err(|e| CoachError::Serialization(e).into())
}

/// One labelled line per transcript message
pub fn transcript_lines(transcript: &[Message]) -> Vec<String> {
    transcript
        .iter()
        .map(|message| {
            let label = if message.is_user() {
                USER_LABEL
            } else {
                COACH_LABEL
            };
            format!("{} {}", label, message.content)
        })
        .collect()
}
