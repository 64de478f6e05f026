//! HTTP client for the Hevy workouts API

use crate::config::HevyConfig;
use crate::error::{CoachError, Result};
use crate::hevy::types::{WorkoutRecord, WorkoutsPage};
use crate::hevy::WorkoutSource;

use async_trait::async_trait;
use reqwest::Client;

/// Path of the paginated workouts listing, relative to the API base
const WORKOUTS_PATH: &str = "/v1/workouts";

/// Hevy API client
///
/// Issues one GET per fetch with the API key in the `api-key` header.
/// No retries are attempted.
///
/// # Examples
///
/// ```no_run
/// use hevy_coach::config::HevyConfig;
/// use hevy_coach::hevy::HevyClient;
///
/// # async fn example() -> hevy_coach::error::Result<()> {
/// let client = HevyClient::new(HevyConfig::default())?;
/// let workouts = client.fetch_workouts("my-api-key", 5).await?;
/// println!("fetched {} workouts", workouts.len());
/// # Ok(())
/// # }
/// ```
pub struct HevyClient {
    client: Client,
    config: HevyConfig,
}

impl HevyClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails
    pub fn new(config: HevyConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("hevy-coach/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CoachError::Hevy(format!("Failed to create HTTP client: {}", e)))?;

        tracing::debug!("Initialized Hevy client: api_base={}", config.api_base);

        Ok(Self { client, config })
    }

    /// Base URL requests are sent to
    pub fn api_base(&self) -> &str {
        &self.config.api_base
    }

    fn workouts_url(&self) -> String {
        format!(
            "{}{}",
            self.config.api_base.trim_end_matches('/'),
            WORKOUTS_PATH
        )
    }

    /// Fetch the `count` most recent workouts
    ///
    /// Requests page 1 with a page size of `count`. The range of `count` is
    /// not checked here; callers keep it within 1..=20.
    ///
    /// # Returns
    ///
    /// The `workouts` array of the response, or an empty vector when the key
    /// is absent
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, a non-success status, or a body
    /// that is not the expected JSON
    pub async fn fetch_workouts(&self, api_key: &str, count: u32) -> Result<Vec<WorkoutRecord>> {
        let url = self.workouts_url();
        tracing::debug!("Fetching {} workouts from {}", count, url);

        let response = self
            .client
            .get(&url)
            .query(&[("page", "1".to_string()), ("pageSize", count.to_string())])
            .header("accept", "application/json")
            .header("api-key", api_key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Hevy request failed: {}", e);
                CoachError::Hevy(format!("Hevy request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Hevy returned error {}: {}", status, error_text);
            return Err(CoachError::Hevy(format!(
                "Hevy returned error {}: {}",
                status, error_text
            ))
            .into());
        }

        let page: WorkoutsPage = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Hevy response: {}", e);
            CoachError::Hevy(format!("Failed to parse Hevy response: {}", e))
        })?;

        tracing::debug!("Hevy returned {} workouts", page.workouts.len());
        Ok(page.workouts)
    }
}

#[async_trait]
impl WorkoutSource for HevyClient {
    async fn fetch(&self, api_key: &str, count: u32) -> Result<Vec<WorkoutRecord>> {
        self.fetch_workouts(api_key, count).await
    }
}
