//! Client side of the journal: the in-memory entry mirror, the HTTP API it talks to,
//! and the persisted theme preference.

pub mod api;
pub mod book;
pub mod session;
pub mod theme;

pub use api::{ClientError, EntryApi, HttpEntryApi};
pub use book::{EntryBook, SyncPolicy};
pub use session::Session;
pub use theme::{
    FilePreferences, MemoryPreferences, PreferenceError, Preferences, THEME_MODE_KEY, Theme,
    ThemeMode,
};
