//! Database module for SQLite persistence.
//!
//! SQLite is the source of truth for all topic data.

mod store;

pub use store::*;

#[cfg(test)]
mod failing;

#[cfg(test)]
pub use failing::FailingTopicStore;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(sqlx::Error::Io)?;
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // AUTOINCREMENT keeps ids of deleted rows from being handed out again
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS topics (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            message TEXT NOT NULL,
            creation_timestamp TEXT NOT NULL,
            status TEXT NOT NULL,
            author TEXT NOT NULL,
            course TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Not UNIQUE: duplicates are rejected at create time only
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_topics_title_message ON topics(title, message);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
