use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{HealthProfile, UserId};

/// Stored health profile with its last-write timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub user_id: UserId,
    pub profile: HealthProfile,
    pub updated_at: DateTime<Utc>,
}

/// Storage abstraction so the rating service can be exercised in isolation.
///
/// The engine itself never touches this boundary; only the service facade
/// resolves profiles through it.
pub trait ProfileRepository: Send + Sync {
    fn upsert(&self, record: ProfileRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, user_id: &UserId) -> Result<Option<ProfileRecord>, RepositoryError>;
}

/// Error enumeration for profile-store failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("profile not found")]
    NotFound,
    #[error("profile store unavailable: {0}")]
    Unavailable(String),
}
