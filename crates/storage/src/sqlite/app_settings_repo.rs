use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use crate::repository::{AppSettingsRepository, StorageError};
use quiz_core::model::AppSettings;

use super::SqliteRepository;

#[async_trait]
impl AppSettingsRepository for SqliteRepository {
    async fn get_settings(&self) -> Result<Option<AppSettings>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT language
            FROM app_settings
            WHERE id = 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let language: Option<String> = row
            .try_get("language")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        Ok(Some(AppSettings::from_persisted(language)))
    }

    async fn save_settings(&self, settings: &AppSettings) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO app_settings (id, language, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(id) DO UPDATE SET
                language = excluded.language,
                updated_at = excluded.updated_at
            ",
        )
        .bind(1_i64)
        .bind(settings.language().code())
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
