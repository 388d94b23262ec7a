use crate::{DbError, Result};

use blog_core::ErrorLocation;

use std::panic::Location;

use sqlx::SqlitePool;

/// Optional columns of the `articles` table, probed once when a repository
/// is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaCapabilities {
    pub updated_at: bool,
}

impl Default for SchemaCapabilities {
    fn default() -> Self {
        Self::full()
    }
}

impl SchemaCapabilities {
    pub const fn full() -> Self {
        Self { updated_at: true }
    }

    /// A table created before `updated_at` existed.
    pub const fn without_updated_at() -> Self {
        Self { updated_at: false }
    }

    pub async fn probe_sqlite(pool: &SqlitePool) -> Result<Self> {
        let columns: Vec<String> =
            sqlx::query_scalar("SELECT name FROM pragma_table_info('articles')")
                .fetch_all(pool)
                .await?;

        if columns.is_empty() {
            return Err(DbError::SchemaProbe {
                message: "table 'articles' does not exist".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            updated_at: columns.iter().any(|c| c == "updated_at"),
        })
    }

    /// Column list for article reads. Without `updated_at` the column is
    /// selected as NULL so every row decodes the same way.
    pub(crate) fn sqlite_article_columns(&self) -> &'static str {
        if self.updated_at {
            "id, title, category, content, slug, created_at, updated_at"
        } else {
            "id, title, category, content, slug, created_at, NULL AS updated_at"
        }
    }

    pub(crate) fn postgrest_article_columns(&self) -> &'static str {
        if self.updated_at {
            "id,title,category,content,slug,created_at,updated_at"
        } else {
            "id,title,category,content,slug,created_at"
        }
    }
}
