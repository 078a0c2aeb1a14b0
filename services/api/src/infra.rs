use metrics_exporter_prometheus::PrometheusHandle;
use nutriscore::rating::{ProfileRecord, ProfileRepository, RepositoryError, UserId};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Profile store used by the service binary and demos. A database-backed
/// adapter would implement the same trait at deployment time.
#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileRepository {
    records: Arc<Mutex<HashMap<UserId, ProfileRecord>>>,
}

impl ProfileRepository for InMemoryProfileRepository {
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
