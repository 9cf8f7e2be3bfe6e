// src/views/dashboard.rs
//! Career recommendations for the stored profile

use tracing::{error, info};

use crate::core::{ProfileStore, ServiceClient};
use crate::error::ServiceError;
use crate::quiz::PersonalityType;
use crate::types::CareerPath;

pub const HTTP_FAILURE_MESSAGE: &str = "Failed to fetch recommendations";

#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationState {
    Loading,
    Loaded(Vec<CareerPath>),
    Failed(String),
}

#[derive(Debug)]
pub struct RecommendationView {
    state: RecommendationState,
    skills: Vec<String>,
    personality_type: Option<PersonalityType>,
}

impl Default for RecommendationView {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationView {
    pub fn new() -> Self {
        Self {
            state: RecommendationState::Loading,
            skills: Vec::new(),
            personality_type: None,
        }
    }

    /// Build and load in one step
    pub async fn activate<S>(client: &ServiceClient, store: &S) -> Self
    where
        S: ProfileStore + ?Sized,
    {
        let mut view = Self::new();
        view.load(client, store).await;
        view
    }

    pub fn state(&self) -> &RecommendationState {
        &self.state
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn personality_type(&self) -> Option<&PersonalityType> {
        self.personality_type.as_ref()
    }

    /// Fetch once. A loaded or failed view never issues another request.
    pub async fn load<S>(&mut self, client: &ServiceClient, store: &S)
    where
        S: ProfileStore + ?Sized,
    {
        if self.state != RecommendationState::Loading {
            return;
        }

        let profile = store
            .skills()
            .and_then(|skills| store.personality_type().map(|personality| (skills, personality)));

        let (skills, personality_type) = match profile {
            Ok(profile) => profile,
            Err(e) => {
                error!("Failed to read stored profile: {}", e);
                self.state = RecommendationState::Failed(e.to_string());
                return;
            }
        };
        self.skills = skills;
        self.personality_type = personality_type;

        self.state = match client.recommendations(&self.skills).await {
            Ok(paths) => {
                info!("Loaded {} career paths", paths.len());
                RecommendationState::Loaded(paths)
            }
            Err(e) => {
                error!("Error fetching recommendations: {}", e);
                RecommendationState::Failed(failure_message(&e))
            }
        };
    }
}

fn failure_message(error: &ServiceError) -> String {
    match error {
        ServiceError::Status { .. } => HTTP_FAILURE_MESSAGE.to_string(),
        other => other.to_string(),
    }
}
