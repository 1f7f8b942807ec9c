use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use crate::error::Result;

/// Bootstrap DDL executed whenever a pool is opened. `IF NOT EXISTS` keeps
/// startup idempotent; there is no migration framework behind this.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    firstname TEXT,
    lastname  TEXT,
    email     TEXT NOT NULL UNIQUE,
    password  TEXT
);

CREATE TABLE IF NOT EXISTS posts (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    content    TEXT,
    author_id  INTEGER REFERENCES users (id)
);
"#;

/// Open a connection pool for `database_url` and ensure the schema exists.
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    tracing::debug!(url = %database_url, "Opening database pool");

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    init_schema(&pool).await?;
    Ok(pool)
}

/// Create the tables if they are missing.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}

/// Pool over a private in-memory database. A single connection, so every
/// query sees the same database.
#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    init_schema(&pool).await.unwrap();
    pool
}
