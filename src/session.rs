//! Coaching session state
//!
//! A [`CoachSession`] holds everything one user session accumulates: the
//! summaries of the last fetch, the initial analysis, and the conversation
//! transcript. It is created by the command handler, passed explicitly to
//! every operation, and cleared with [`CoachSession::reset`].

use crate::error::{CoachError, Result};
use crate::hevy::{WorkoutRecord, WorkoutSource};
use crate::prompts::{build_prompt, workout_fragments, Persona, Verbosity};
use crate::providers::{Message, Provider};
use crate::summary::{summarize_all, WorkoutSummary};

/// What to fetch and how the coach should answer
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Hevy API key
    pub api_key: String,
    /// Number of recent workouts, 1..=20
    pub count: u32,
    pub persona: Persona,
    pub verbosity: Verbosity,
}

/// Outcome of a follow-up submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The provider answered; the reply is now the last transcript entry
    Answered(Message),
    /// Same text as the previous submission; nothing was sent
    Duplicate,
}

/// Session-scoped coaching state
#[derive(Debug, Default)]
pub struct CoachSession {
    workouts: Vec<WorkoutSummary>,
    analysis: Option<String>,
    transcript: Vec<Message>,
    last_user_input: Option<String>,
}

impl CoachSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Summaries from the most recent analysis
    pub fn workouts(&self) -> &[WorkoutSummary] {
        &self.workouts
    }

    /// Initial analysis text, if an analysis has run
    pub fn analysis(&self) -> Option<&str> {
        self.analysis.as_deref()
    }

    /// Conversation so far, oldest first
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// True once an analysis has been stored
    pub fn has_analysis(&self) -> bool {
        self.analysis.is_some()
    }

    /// Drop all session state
    pub fn reset(&mut self) {
        tracing::debug!(
            "Resetting session ({} workouts, {} messages)",
            self.workouts.len(),
            self.transcript.len()
        );
        *self = Self::default();
    }

    /// Fetch workouts and run the initial analysis
    ///
    /// Any fetch failure and an empty result both become
    /// [`CoachError::NoWorkoutData`]; the underlying cause is only logged.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::NoWorkoutData`], a summary error for malformed
    /// timestamps, or the provider's error
    pub async fn fetch_and_analyze(
        &mut self,
        source: &dyn WorkoutSource,
        provider: &dyn Provider,
        request: &AnalysisRequest,
    ) -> Result<&str> {
        let workouts = fetch_workouts(source, &request.api_key, request.count).await?;
        self.analyze(provider, &workouts, &request.persona, request.verbosity)
            .await
    }

    /// Summarize `workouts` and ask the provider for the initial analysis
    ///
    /// On success the session holds the new summaries, the analysis, and a
    /// transcript seeded with the analysis as its only assistant message.
    /// On failure the previous state is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::NoWorkoutData`] for an empty list, a summary
    /// error for malformed timestamps, or the provider's error
    pub async fn analyze(
        &mut self,
        provider: &dyn Provider,
        workouts: &[WorkoutRecord],
        persona: &Persona,
        verbosity: Verbosity,
    ) -> Result<&str> {
        if workouts.is_empty() {
            return Err(CoachError::NoWorkoutData.into());
        }

        let summaries = summarize_all(workouts)?;
        let prompt = build_prompt(workouts, &workout_fragments(&summaries), persona, verbosity);
        tracing::debug!(
            "Requesting analysis of {} workouts from {} (persona={}, verbosity={})",
            workouts.len(),
            provider.model_name(),
            persona,
            verbosity
        );

        let completion = provider.complete(&[Message::user(prompt)]).await?;
        let analysis = completion.message.content;

        self.workouts = summaries;
        self.transcript = vec![Message::assistant(analysis.clone())];
        // New conversation: the first follow-up is always sent, even if it
        // repeats the last question of the previous one.
        self.last_user_input = None;
        Ok(self.analysis.insert(analysis).as_str())
    }

    /// Submit a follow-up question
    ///
    /// A message identical to the previous submission is ignored. Otherwise it
    /// is appended to the transcript, the whole transcript is sent to the
    /// provider, and the reply is appended.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::NoAnalysis`] before the first analysis, or the
    /// provider's error. The user message stays in the transcript when the
    /// provider fails.
    pub async fn submit(&mut self, provider: &dyn Provider, input: &str) -> Result<Reply> {
        if !self.has_analysis() {
            return Err(CoachError::NoAnalysis.into());
        }

        if self.last_user_input.as_deref() == Some(input) {
            tracing::debug!("Ignoring repeated message");
            return Ok(Reply::Duplicate);
        }

        self.transcript.push(Message::user(input));
        tracing::debug!(
            "Sending follow-up with {} transcript messages",
            self.transcript.len()
        );

        let completion = provider.complete(&self.transcript).await?;
        let reply = Message::assistant(completion.message.content);
        self.transcript.push(reply.clone());
        self.last_user_input = Some(input.to_string());

        Ok(Reply::Answered(reply))
    }
}

/// Fetch workouts, folding every failure into [`CoachError::NoWorkoutData`]
///
/// # Errors
///
/// Returns [`CoachError::NoWorkoutData`] if the fetch fails or returns nothing
pub async fn fetch_workouts(
    source: &dyn WorkoutSource,
    api_key: &str,
    count: u32,
) -> Result<Vec<WorkoutRecord>> {
    match source.fetch(api_key, count).await {
        Ok(workouts) if !workouts.is_empty() => {
            tracing::info!("{} workouts fetched", workouts.len());
            Ok(workouts)
        }
        Ok(_) => {
            tracing::warn!("Workout API returned no workouts");
            Err(CoachError::NoWorkoutData.into())
        }
        Err(e) => {
            tracing::warn!("Workout fetch failed: {:#}", e);
            Err(CoachError::NoWorkoutData.into())
        }
    }
}
