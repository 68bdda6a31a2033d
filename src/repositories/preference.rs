//! Preference repository for database operations.

use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::entities::preference;

/// Repository for key-value preference entries.
pub struct PreferenceRepository;

impl PreferenceRepository {
    /// Get the stored value for a key.
    pub async fn get<C>(conn: &C, key: &str) -> Result<Option<String>, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(preference::Entity::find_by_id(key.to_string())
            .one(conn)
            .await?
            .map(|p| p.value))
    }

    /// Insert or replace the value for a key.
    pub async fn set<C>(conn: &C, key: &str, value: &str) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        let entry = preference::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value.to_string()),
        };

        preference::Entity::insert(entry)
            .on_conflict(
                OnConflict::column(preference::Column::Key)
                    .update_column(preference::Column::Value)
                    .to_owned(),
            )
            .exec(conn)
            .await?;
        Ok(())
    }
}
