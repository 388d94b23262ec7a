use crate::timestamp;

use blog_core::{CoreError, NewPromptLog, PromptLog, PromptLogRepository, Result, StorageCode};

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct PromptLogRow {
    id: String,
    article_id: Option<String>,
    prompt: String,
    response: String,
    created_at: i64,
}

impl TryFrom<PromptLogRow> for PromptLog {
    type Error = CoreError;

    fn try_from(row: PromptLogRow) -> std::result::Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id).map_err(|e| {
            CoreError::storage(
                StorageCode::PromptLogFailed,
                format!("invalid prompt log id '{}': {e}", row.id),
            )
        })?;
        let created_at = timestamp::from_micros(row.created_at).ok_or_else(|| {
            CoreError::storage(
                StorageCode::PromptLogFailed,
                format!("invalid created_at for prompt log {id}"),
            )
        })?;

        Ok(PromptLog {
            id,
            article_id: row.article_id,
            prompt: row.prompt,
            response: row.response,
            created_at,
        })
    }
}

pub struct SqlitePromptLogRepository {
    pool: SqlitePool,
}

impl SqlitePromptLogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PromptLogRepository for SqlitePromptLogRepository {
    async fn save(&self, log: NewPromptLog) -> Result<PromptLog> {
        let saved = PromptLog {
            id: Uuid::new_v4(),
            article_id: log.article_id,
            prompt: log.prompt,
            response: log.response,
            created_at: timestamp::now(),
        };

        sqlx::query(
            r#"
              INSERT INTO prompt_logs (id, article_id, prompt, response, created_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(saved.id.to_string())
        .bind(&saved.article_id)
        .bind(&saved.prompt)
        .bind(&saved.response)
        .bind(saved.created_at.timestamp_micros())
        .execute(&self.pool)
        .await
        .map_err(|e| CoreError::storage(StorageCode::PromptLogFailed, e.to_string()))?;

        Ok(saved)
    }

    async fn list_by_article(&self, article_id: &str) -> Result<Vec<PromptLog>> {
        let rows = sqlx::query_as::<_, PromptLogRow>(
            r#"
              SELECT id, article_id, prompt, response, created_at
              FROM prompt_logs
              WHERE article_id = ?
              ORDER BY created_at DESC, rowid DESC
              "#,
        )
        .bind(article_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CoreError::storage(StorageCode::PromptLogFailed, e.to_string()))?;

        rows.into_iter().map(PromptLog::try_from).collect()
    }

    async fn list_all(&self) -> Result<Vec<PromptLog>> {
        let rows = sqlx::query_as::<_, PromptLogRow>(
            r#"
              SELECT id, article_id, prompt, response, created_at
              FROM prompt_logs
              ORDER BY created_at DESC, rowid DESC
              "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CoreError::storage(StorageCode::PromptLogFailed, e.to_string()))?;

        rows.into_iter().map(PromptLog::try_from).collect()
    }
}
