//! Persisted theme preference.

use async_trait::async_trait;
use log::warn;
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::constants::PREFERENCE_KEY_THEME;
use crate::repositories::PreferenceRepository;
use crate::storage::LocalStorage;
use crate::theme::ThemePreference;

/// Errors raised while reading or writing preferences
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Key-value persistence of the theme preference
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read the stored preference. Absent or unparsable values yield `None`.
    async fn load_theme(&self) -> Result<Option<ThemePreference>, PreferenceError>;

    /// Store the preference, replacing any previous value
    async fn save_theme(&self, preference: ThemePreference) -> Result<(), PreferenceError>;
}

fn parse_stored(raw: Option<String>) -> Option<ThemePreference> {
    let raw = raw?;
    match raw.parse::<ThemePreference>() {
        Ok(preference) => Some(preference),
        Err(e) => {
            warn!("Ignoring stored theme preference: {}", e);
            None
        }
    }
}

/// SQLite-backed store
#[derive(Clone)]
pub struct SqlitePreferenceStore {
    storage: LocalStorage,
}

impl SqlitePreferenceStore {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    /// Open a database file, creating its parent directory
    pub async fn open(path: &Path) -> Result<Self, PreferenceError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(Self::new(LocalStorage::open(path).await?))
    }

    pub async fn in_memory() -> Result<Self, PreferenceError> {
        Ok(Self::new(LocalStorage::in_memory().await?))
    }

    /// Raw stored string, including values that do not parse
    pub async fn raw_theme(&self) -> Result<Option<String>, PreferenceError> {
        Ok(PreferenceRepository::get(self.storage.connection(), PREFERENCE_KEY_THEME).await?)
    }

    /// Write an arbitrary raw value under the theme key
    pub async fn write_raw_theme(&self, value: &str) -> Result<(), PreferenceError> {
        PreferenceRepository::set(self.storage.connection(), PREFERENCE_KEY_THEME, value).await?;
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for SqlitePreferenceStore {
    async fn load_theme(&self) -> Result<Option<ThemePreference>, PreferenceError> {
        Ok(parse_stored(self.raw_theme().await?))
    }

    async fn save_theme(&self, preference: ThemePreference) -> Result<(), PreferenceError> {
        self.write_raw_theme(preference.as_str()).await
    }
}

/// Process-local store used when persistence is disabled
#[derive(Clone, Default)]
pub struct MemoryPreferenceStore {
    value: Arc<Mutex<Option<String>>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a raw value
    pub fn with_raw(value: &str) -> Self {
        Self {
            value: Arc::new(Mutex::new(Some(value.to_string()))),
        }
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn load_theme(&self) -> Result<Option<ThemePreference>, PreferenceError> {
        let raw = self.value.lock().ok().and_then(|v| v.clone());
        Ok(parse_stored(raw))
    }

    async fn save_theme(&self, preference: ThemePreference) -> Result<(), PreferenceError> {
        if let Ok(mut value) = self.value.lock() {
            *value = Some(preference.as_str().to_string());
        }
        Ok(())
    }
}
