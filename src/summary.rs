//! Workout summaries
//!
//! Turns raw [`WorkoutRecord`]s into display-ready [`WorkoutSummary`] values:
//! title, start date, duration in minutes, and one line per exercise.

use crate::error::{CoachError, Result};
use crate::hevy::{ExerciseRecord, SetRecord, WorkoutRecord};

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;

/// Format used for the summary date
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Number of sets shown in a set preview before it is cut off
const PREVIEW_SETS: usize = 3;

/// Display-ready view of one workout
///
/// Built by [`summarize`]; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutSummary {
    /// Workout title, defaulted when absent
    pub title: String,
    /// Start time formatted with [`DATE_FORMAT`] in the record's own offset
    pub date: String,
    /// Elapsed minutes, rounded to one decimal; negative if the record ends
    /// before it starts
    pub duration: f64,
    /// One `"{title} ({n} sets)"` entry per exercise, in record order
    pub exercises: Vec<String>,
    /// The record this summary was built from
    pub raw: WorkoutRecord,
}

impl WorkoutSummary {
    /// Calendar day part of [`WorkoutSummary::date`]
    pub fn day(&self) -> &str {
        self.date.split_whitespace().next().unwrap_or_default()
    }
}

/// Format one set as `"{reps} reps @ {weight_kg} kg"`
///
/// # Examples
///
/// ```
/// use hevy_coach::hevy::SetRecord;
/// use hevy_coach::summary::set_fragment;
///
/// assert_eq!(set_fragment(&SetRecord::default()), "? reps @ ? kg");
/// ```
pub fn set_fragment(set: &SetRecord) -> String {
    format!("{} reps @ {} kg", set.reps_text(), set.weight_text())
}

/// Short preview of a list of sets
///
/// Joins the first three set fragments with `", "` and appends `" ..."` when
/// more sets follow. An empty list gives an empty string.
pub fn set_preview(sets: &[SetRecord]) -> String {
    let fragments: Vec<String> = sets.iter().take(PREVIEW_SETS).map(set_fragment).collect();
    let mut preview = fragments.join(", ");
    if sets.len() > PREVIEW_SETS {
        preview.push_str(" ...");
    }
    preview
}

/// Display line for one exercise, `"{title} ({set_count} sets)"`
pub fn exercise_display(exercise: &ExerciseRecord) -> String {
    format!("{} ({} sets)", exercise.display_title(), exercise.sets.len())
}

/// Build the summary for one workout
///
/// # Errors
///
/// Returns [`CoachError::InvalidTimestamp`] if either timestamp is missing or
/// not ISO-8601
///
/// # Examples
///
/// ```
/// use hevy_coach::hevy::WorkoutRecord;
/// use hevy_coach::summary::summarize;
///
/// let record: WorkoutRecord = serde_json::from_str(r#"{
///     "title": "Leg Day",
///     "start_time": "2024-01-01T10:00:00Z",
///     "end_time": "2024-01-01T11:05:00Z",
///     "exercises": [{"title": "Squat", "sets": [{"reps": 5, "weight_kg": 100}]}]
/// }"#).unwrap();
///
/// let summary = summarize(&record).unwrap();
/// assert_eq!(summary.date, "2024-01-01 10:00");
/// assert_eq!(summary.duration, 65.0);
/// assert_eq!(summary.exercises, vec!["Squat (1 sets)"]);
/// ```
pub fn summarize(record: &WorkoutRecord) -> Result<WorkoutSummary> {
    let start = parse_timestamp("start_time", record.start_time.as_deref())?;
    let end = parse_timestamp("end_time", record.end_time.as_deref())?;

    Ok(WorkoutSummary {
        title: record.display_title().to_string(),
        date: start.format(DATE_FORMAT).to_string(),
        duration: elapsed_minutes(start, end),
        exercises: record.exercises.iter().map(exercise_display).collect(),
        raw: record.clone(),
    })
}

/// Summarize every record, failing on the first malformed one
pub fn summarize_all(records: &[WorkoutRecord]) -> Result<Vec<WorkoutSummary>> {
    records.iter().map(summarize).collect()
}

fn elapsed_minutes(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> f64 {
    let elapsed = end - start;
    let seconds = match elapsed.num_microseconds() {
        Some(us) => us as f64 / 1_000_000.0,
        None => elapsed.num_seconds() as f64,
    };
    round_one_decimal(seconds / 60.0)
}

/// Round to one decimal on the exact binary value, ties to even
///
/// Float formatting is correctly rounded, so `0.15` (stored just below) gives
/// `0.1` and the exact tie `0.25` gives `0.2`.
fn round_one_decimal(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Parse an ISO-8601 timestamp, treating a trailing `Z` as `+00:00`
///
/// Timestamps without an offset are taken as UTC.
fn parse_timestamp(field: &'static str, value: Option<&str>) -> Result<DateTime<FixedOffset>> {
    let invalid = |raw: &str| CoachError::InvalidTimestamp {
        field,
        value: raw.to_string(),
    };

    let raw = value.ok_or_else(|| invalid("<missing>"))?;
    let normalized = match raw.strip_suffix('Z') {
        Some(stem) => format!("{}+00:00", stem),
        None => raw.to_string(),
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&normalized) {
        return Ok(parsed);
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%:z"] {
        if let Ok(parsed) = DateTime::parse_from_str(&normalized, format) {
            return Ok(parsed);
        }
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Ok(Utc.from_utc_datetime(&naive).into());
        }
    }

    Err(invalid(raw).into())
}
