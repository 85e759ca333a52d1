use super::api::EntryApi;
use super::book::{EntryBook, SyncPolicy};
use super::theme::{Preferences, Theme};
use tracing::warn;

/// Application-session state handed to the view layer: the entry mirror and the theme.
#[derive(Debug)]
pub struct Session<A, P> {
    pub entries: EntryBook<A>,
    pub theme: Theme<P>,
}

impl<A: EntryApi, P: Preferences> Session<A, P> {
    /// Loads the theme and hydrates the entry list. A failed hydration leaves the list
    /// empty.
    pub async fn start(api: A, prefs: P, policy: SyncPolicy) -> Self {
        let theme = Theme::load(prefs);
        let mut entries = EntryBook::new(api, policy);
        if let Err(err) = entries.hydrate().await {
            warn!("failed to load entries: {err}");
        }
        Self { entries, theme }
    }
}
