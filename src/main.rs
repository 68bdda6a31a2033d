use adminboard::cli::Cli;
use adminboard::config::Config;
use adminboard::logger::Logger;
use adminboard::storage::{MemoryPreferenceStore, PreferenceStore, SqlitePreferenceStore};
use adminboard::theme::ThemeState;
use adminboard::ui::{self, AppComponent};
use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.generate_config {
        let path = match path {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    if let Some(theme) = cli.theme {
        config.ui.default_theme = theme;
    }

    let logger = Logger::from_config(config.logging.enabled)?;

    let store: Arc<dyn PreferenceStore> = if config.storage.persist {
        let path = config.storage.resolved_database_path()?;
        let store = SqlitePreferenceStore::open(&path)
            .await
            .with_context(|| format!("Failed to open preference database: {}", path.display()))?;
        Arc::new(store)
    } else {
        Arc::new(MemoryPreferenceStore::new())
    };

    let theme = ThemeState::new(config.ui.default_theme, config.ui.system_theme.detect());
    logger.log(format!(
        "Starting {} (theme before hydration: {})",
        adminboard::constants::BRAND_NAME,
        theme.indicator_label()
    ));

    let app = AppComponent::new(&config.ui, theme, store, logger);
    ui::run_app(app, config.ui.mouse_enabled).await
}
