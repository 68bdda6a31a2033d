//! TOML settings: `[ui]`, `[storage]` and `[logging]` tables, every key optional.

use crate::constants::{APP_NAME, CONFIG_GENERATED, SIDEBAR_DEFAULT_WIDTH, SIDEBAR_MAX_WIDTH, SIDEBAR_MIN_WIDTH};
use crate::icons::IconTheme;
use crate::theme::{SystemThemeSource, ThemePreference};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// `[ui]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub mouse_enabled: bool,
    /// Columns given to the sidebar on wide terminals
    pub sidebar_width: u16,
    /// Theme used until a persisted preference has been read
    /// Options: "light", "dark", "system"
    pub default_theme: ThemePreference,
    /// How the "system" theme is detected
    /// Options: "auto" (COLORFGBG), "light", "dark"
    pub system_theme: SystemThemeSource,
    /// Icon set: "emoji", "unicode" or "ascii"
    pub icon_theme: IconTheme,
}

/// Preference storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Persist the theme preference between runs
    pub persist: bool,
    /// SQLite database path (defaults to the XDG data directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write entries to `adminboard.log` in the data directory
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            sidebar_width: SIDEBAR_DEFAULT_WIDTH,
            default_theme: ThemePreference::System,
            system_theme: SystemThemeSource::Auto,
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            persist: true,
            database_path: None,
        }
    }
}

impl StorageConfig {
    /// Configured database path, or `preferences.db` in the data directory
    pub fn resolved_database_path(&self) -> Result<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Config::get_data_dir()?.join("preferences.db")),
        }
    }
}

impl Config {
    /// Settings from the first config file found, or the built-in defaults
    pub fn load() -> Result<Self> {
        match Self::locate()? {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate one TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
        let config: Self = toml::from_str(&raw).with_context(|| format!("Invalid TOML in {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// `./adminboard.toml` wins over `$XDG_CONFIG_HOME/adminboard/config.toml`
    fn locate() -> Result<Option<PathBuf>> {
        let candidates = [
            Some(PathBuf::from(format!("{APP_NAME}.toml"))),
            Self::get_default_config_path().ok(),
        ];
        Ok(candidates.into_iter().flatten().find(|candidate| candidate.is_file()))
    }

    pub fn validate(&self) -> Result<()> {
        let width = self.ui.sidebar_width;
        if !(SIDEBAR_MIN_WIDTH..=SIDEBAR_MAX_WIDTH).contains(&width) {
            anyhow::bail!("ui.sidebar_width is {width}, expected {SIDEBAR_MIN_WIDTH}..={SIDEBAR_MAX_WIDTH}");
        }

        let empty_db = self
            .storage
            .database_path
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty());
        if empty_db {
            anyhow::bail!("storage.database_path is set but empty");
        }

        Ok(())
    }

    /// Write the defaults, with a dated header, to `path`
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        let body = toml::to_string_pretty(&Self::default()).context("Cannot serialize the default settings")?;
        let document = format!(
            "# Adminboard Configuration File\n# Generated on {}\n\n{body}",
            chrono::Local::now().format("%Y-%m-%d")
        );

        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).with_context(|| format!("Cannot create {}", dir.display()))?;
        }
        std::fs::write(path, document).with_context(|| format!("Cannot write {}", path.display()))?;

        println!("{CONFIG_GENERATED}: {}", path.display());
        Ok(())
    }

    pub fn get_default_config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("No configuration directory on this platform")?;
        Ok(base.join(APP_NAME).join("config.toml"))
    }

    /// Home of the preference database and the log file
    pub fn get_data_dir() -> Result<PathBuf> {
        let base = dirs::data_dir().context("No data directory on this platform")?;
        Ok(base.join(APP_NAME))
    }
}
