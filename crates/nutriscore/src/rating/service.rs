use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use super::domain::{HealthProfile, NutrientSnapshot, UserId, ValidationError};
use super::profile::normalize;
use super::repository::{ProfileRecord, ProfileRepository, RepositoryError};
use super::{RatingEngine, RatingResult};

/// Service composing the profile store and the rating engine.
///
/// The engine stays pure; every side effect (profile reads and writes,
/// timestamps) lives here at the service edge.
pub struct MealRatingService<R> {
    repository: Arc<R>,
    engine: Arc<RatingEngine>,
}

impl<R> MealRatingService<R>
where
    R: ProfileRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: super::RatingConfig) -> Self {
        Self {
            repository,
            engine: Arc::new(RatingEngine::new(config)),
        }
    }

    pub fn engine(&self) -> &RatingEngine {
        &self.engine
    }

    /// Store (or replace) a user's health profile.
    pub fn save_profile(
        &self,
        user_id: UserId,
        profile: HealthProfile,
    ) -> Result<ProfileRecord, ServiceError> {
        let record = ProfileRecord {
            user_id,
            profile,
            updated_at: Utc::now(),
        };
        self.repository.upsert(record.clone())?;
        Ok(record)
    }

    pub fn profile(&self, user_id: &UserId) -> Result<Option<ProfileRecord>, ServiceError> {
        Ok(self.repository.fetch(user_id)?)
    }

    /// Rate a meal against an optional profile supplied inline.
    ///
    /// Constraints are normalized fresh on every call; an absent profile
    /// rates on generic quality alone.
    pub fn rate(
        &self,
        profile: Option<&HealthProfile>,
        nutrients: &NutrientSnapshot,
        description: Option<&str>,
    ) -> Result<MealRating, ServiceError> {
        let constraints = profile.map(normalize).unwrap_or_default();
        let rating = self.engine.rate(nutrients, &constraints)?;
        let warnings = profile
            .map(|profile| allergen_warnings(profile, description))
            .unwrap_or_default();

        Ok(MealRating {
            rating,
            profile_used: profile.is_some(),
            warnings,
        })
    }

    /// Rate a meal against the user's stored profile. A user without a stored
    /// profile is rated as if the profile were empty.
    pub fn rate_for_user(
        &self,
        user_id: &UserId,
        nutrients: &NutrientSnapshot,
        description: Option<&str>,
    ) -> Result<MealRating, ServiceError> {
        let record = self.repository.fetch(user_id)?;
        self.rate(record.as_ref().map(|record| &record.profile), nutrients, description)
    }
}

/// Service-level rating envelope: the engine result plus caller-facing
/// context that must not influence the score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealRating {
    #[serde(flatten)]
    pub rating: RatingResult,
    pub profile_used: bool,
    /// Allergen mentions found in the food description. Warnings only; the
    /// score remains a function of (nutrients, profile).
    pub warnings: Vec<String>,
}

/// Error raised by the rating service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

fn allergen_warnings(profile: &HealthProfile, description: Option<&str>) -> Vec<String> {
    let (Some(allergies), Some(description)) = (profile.allergies.as_deref(), description) else {
        return Vec::new();
    };

    let description = description.to_lowercase();
    allergies
        .to_lowercase()
        .split([',', ';', '\n'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter(|token| description.contains(token))
        .map(|token| format!("potential allergen: {token}"))
        .collect()
}
