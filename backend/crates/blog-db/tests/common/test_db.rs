use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

async fn create_empty_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool")
}

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let pool = create_empty_pool().await;

    blog_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Creates an in-memory pool whose `articles` table predates `updated_at`
pub async fn create_legacy_pool() -> SqlitePool {
    let pool = create_empty_pool().await;

    sqlx::query(
        r#"
          CREATE TABLE articles (
              id          TEXT PRIMARY KEY NOT NULL,
              title       TEXT NOT NULL,
              category    TEXT NOT NULL,
              content     TEXT NOT NULL,
              slug        TEXT NOT NULL UNIQUE,
              created_at  INTEGER NOT NULL
          )
          "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to create legacy articles table");

    pool
}
