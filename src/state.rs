use crate::store::{EntryStore, StoreError};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<EntryStore>>,
}

impl AppState {
    pub fn new(store: EntryStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Runs one store call on the blocking pool while holding the store lock.
    pub async fn with_store<T, F>(&self, op: F) -> Result<T, StoreError>
    where
        F: FnOnce(&EntryStore) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store).lock_owned().await;
        tokio::task::spawn_blocking(move || op(&store)).await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entry;
    use chrono::{TimeZone, Utc};

    fn entry(id: &str) -> Entry {
        Entry {
            id: id.to_string(),
            title: "T".to_string(),
            description: "D".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 29, 23, 39, 32).unwrap(),
            scheduled: Utc.with_ymd_and_hms(2025, 2, 2, 0, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn with_store_runs_calls_on_the_shared_store() {
        let state = AppState::new(EntryStore::open_in_memory().unwrap());
        let stored = entry("1");

        let inserted = stored.clone();
        state
            .with_store(move |store| store.insert(&inserted))
            .await
            .unwrap();

        let listed = state.with_store(|store| store.list()).await.unwrap();
        assert_eq!(listed, vec![stored]);
    }

    #[tokio::test]
    async fn with_store_passes_store_errors_through() {
        let state = AppState::new(EntryStore::open_in_memory().unwrap());
        let err = state
            .with_store(|store| store.find("missing"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id == "missing"));
    }

    #[tokio::test]
    async fn with_store_reports_a_panicked_call_as_task_error() {
        let state = AppState::new(EntryStore::open_in_memory().unwrap());
        let err = state
            .with_store(|_| -> Result<(), StoreError> { panic!("store call panicked") })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Task(_)));

        // The lock is released, so the store stays usable.
        assert!(state.with_store(|store| store.list()).await.unwrap().is_empty());
    }
}
