use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};
use std::path::Path;

use crate::entities::preference;

/// SQLite connection holding the preference table
#[derive(Clone)]
pub struct LocalStorage {
    pub(crate) conn: DatabaseConnection,
}

impl LocalStorage {
    /// Open (creating if needed) a database file
    pub async fn open(path: &Path) -> Result<Self, DbErr> {
        Self::connect(&format!("sqlite://{}?mode=rwc", path.display())).await
    }

    /// Private in-memory database, gone when the connection drops
    pub async fn in_memory() -> Result<Self, DbErr> {
        Self::connect("sqlite::memory:").await
    }

    async fn connect(url: &str) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(url.to_string());
        // A single connection keeps in-memory databases coherent
        options.max_connections(1).min_connections(1).sqlx_logging(false);

        let conn = Database::connect(options).await?;
        let storage = LocalStorage { conn };
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Initialize database schema
    async fn init_schema(&self) -> Result<(), DbErr> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut create_preferences = schema.create_table_from_entity(preference::Entity);
        create_preferences.if_not_exists();
        self.conn.execute(backend.build(&create_preferences)).await?;

        Ok(())
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }
}
