use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::rating::domain::{Gender, HealthProfile, NutrientSnapshot, UserId};
use crate::rating::repository::{ProfileRecord, ProfileRepository, RepositoryError};
use crate::rating::{rating_router, MealRatingService, RatingConfig, RatingEngine};

/// The reference meal from the observed smoke tests: a high-sodium cheese
/// pizza serving.
pub(super) fn sample_meal() -> NutrientSnapshot {
    NutrientSnapshot {
        calories: 650.0,
        protein_g: 30.0,
        fat_g: 28.0,
        carbs_g: 55.0,
        fiber_g: 6.0,
        sugar_g: 12.0,
        sodium_mg: 1400.0,
    }
}

pub(super) fn hypertensive_profile() -> HealthProfile {
    HealthProfile {
        age: Some(45),
        gender: Some(Gender::Male),
        conditions: Vec::new(),
        allergies: Some("hypertension".to_string()),
    }
}

pub(super) fn unrestricted_profile() -> HealthProfile {
    HealthProfile {
        age: Some(45),
        gender: Some(Gender::Male),
        conditions: Vec::new(),
        allergies: Some(String::new()),
    }
}

pub(super) fn rating_config() -> RatingConfig {
    RatingConfig::default()
}

pub(super) fn engine() -> RatingEngine {
    RatingEngine::new(rating_config())
}

pub(super) fn build_service() -> (
    Arc<MealRatingService<MemoryProfiles>>,
    Arc<MemoryProfiles>,
) {
    let repository = Arc::new(MemoryProfiles::default());
    let service = Arc::new(MealRatingService::new(repository.clone(), rating_config()));
    (service, repository)
}

pub(super) fn rating_router_with_service(
    service: Arc<MealRatingService<MemoryProfiles>>,
) -> axum::Router {
    rating_router(service)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[derive(Default, Clone)]
pub(super) struct MemoryProfiles {
    records: Arc<Mutex<HashMap<UserId, ProfileRecord>>>,
}

impl ProfileRepository for MemoryProfiles {
    fn upsert(&self, record: ProfileRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.user_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, user_id: &UserId) -> Result<Option<ProfileRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(user_id).cloned())
    }
}

pub(super) struct UnavailableProfiles;

impl ProfileRepository for UnavailableProfiles {
    fn upsert(&self, _record: ProfileRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _user_id: &UserId) -> Result<Option<ProfileRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
