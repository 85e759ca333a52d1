use super::api::{ClientError, EntryApi};
use crate::models::Entry;
use tracing::warn;

/// When a local update or removal is applied relative to the server's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncPolicy {
    /// Apply only after the server confirmed the write.
    #[default]
    Confirmed,
    /// Apply once the call settles, whether it succeeded or not. Local state can then
    /// diverge from the server until the next hydration.
    Unconditional,
}

/// Client-side mirror of the server's entries.
///
/// Every mutation issues exactly one API call and touches the local list only after that
/// call has settled.
#[derive(Debug)]
pub struct EntryBook<A> {
    api: A,
    policy: SyncPolicy,
    entries: Vec<Entry>,
}

impl<A: EntryApi> EntryBook<A> {
    pub fn new(api: A, policy: SyncPolicy) -> Self {
        Self {
            api,
            policy,
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn policy(&self) -> SyncPolicy {
        self.policy
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Replaces the local list with the server's full list.
    pub async fn hydrate(&mut self) -> Result<(), ClientError> {
        self.entries = self.api.list().await?;
        Ok(())
    }

    /// Appends the entry as echoed by the server. The list is untouched on failure.
    pub async fn create(&mut self, entry: Entry) -> Result<Entry, ClientError> {
        let created = self.api.create(&entry).await.inspect_err(|err| {
            warn!(id = %entry.id, "failed to create entry: {err}");
        })?;
        self.entries.push(created.clone());
        Ok(created)
    }

    /// Overwrites the local entry keyed by `id` with the submitted `entry`, since the
    /// server answers with a status message only.
    pub async fn update(&mut self, id: &str, entry: Entry) -> Result<(), ClientError> {
        let outcome = self.api.update(id, &entry).await;
        if let Err(err) = &outcome {
            warn!(%id, "failed to update entry: {err}");
        }
        if self.applies(&outcome) {
            if let Some(slot) = self.entries.iter_mut().find(|current| current.id == id) {
                *slot = entry;
            }
        }
        outcome
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), ClientError> {
        let outcome = self.api.delete(id).await;
        if let Err(err) = &outcome {
            warn!(%id, "failed to delete entry: {err}");
        }
        if self.applies(&outcome) {
            self.entries.retain(|current| current.id != id);
        }
        outcome
    }

    fn applies(&self, outcome: &Result<(), ClientError>) -> bool {
        outcome.is_ok() || self.policy == SyncPolicy::Unconditional
    }
}
