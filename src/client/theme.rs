use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::error;

pub const THEME_MODE_KEY: &str = "THEME_MODE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("encode: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Persistent string key-value storage for UI preferences.
pub trait Preferences {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl Preferences for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept as a flat JSON object in one file, rewritten on every write.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Missing or unreadable files start out empty.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(values) => values,
                Err(err) => {
                    error!("failed to parse preferences file: {err}");
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                error!("failed to read preferences file: {err}");
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Preferences for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_vec_pretty(&self.values)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

/// Light/dark preference backed by the `THEME_MODE` key.
///
/// Writes are best-effort: a failed write is logged and the in-memory mode still changes.
#[derive(Debug)]
pub struct Theme<P> {
    prefs: P,
    mode: ThemeMode,
}

impl<P: Preferences> Theme<P> {
    pub fn load(prefs: P) -> Self {
        let mode = prefs
            .get(THEME_MODE_KEY)
            .and_then(|raw| ThemeMode::parse(&raw))
            .unwrap_or_default();
        let mut theme = Self { prefs, mode };
        theme.persist();
        theme
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Whether the root element carries the `dark` class.
    pub fn dark_class_enabled(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.persist();
    }

    pub fn preferences(&self) -> &P {
        &self.prefs
    }

    fn persist(&mut self) {
        if let Err(err) = self.prefs.set(THEME_MODE_KEY, self.mode.as_str()) {
            error!("failed to persist theme mode: {err}");
        }
    }
}
