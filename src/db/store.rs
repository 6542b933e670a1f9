//! Topic store: the persistence contract consumed by the topic service.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{NewTopic, Topic};

/// Durable storage for topics, keyed by id.
#[async_trait]
pub trait TopicStore: Send + Sync {
    /// Returns `None` if no topic has this id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Topic>, AppError>;

    async fn exists_by_title_and_message(
        &self,
        title: &str,
        message: &str,
    ) -> Result<bool, AppError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Store a new topic. The store assigns the id.
    async fn insert(&self, topic: &NewTopic) -> Result<Topic, AppError>;

    /// Overwrite an existing topic in place, keyed by its id.
    async fn update(&self, topic: &Topic) -> Result<Topic, AppError>;

    /// Remove a topic. Deleting a missing id does nothing.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;

    /// All topics in insertion order.
    async fn find_all(&self) -> Result<Vec<Topic>, AppError>;
}

/// SQLite-backed topic store.
#[derive(Clone)]
pub struct SqliteTopicStore {
    pool: SqlitePool,
}

impl SqliteTopicStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TopicStore for SqliteTopicStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Topic>, AppError> {
        let row = sqlx::query(
            r#"SELECT id, title, message, creation_timestamp, status, author, course
               FROM topics WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(topic_from_row))
    }

    async fn exists_by_title_and_message(
        &self,
        title: &str,
        message: &str,
    ) -> Result<bool, AppError> {
        let row =
            sqlx::query("SELECT EXISTS(SELECT 1 FROM topics WHERE title = ? AND message = ?)")
                .bind(title)
                .bind(message)
                .fetch_one(&self.pool)
                .await?;

        let exists: i64 = row.get(0);
        Ok(exists != 0)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM topics WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        let exists: i64 = row.get(0);
        Ok(exists != 0)
    }

    async fn insert(&self, topic: &NewTopic) -> Result<Topic, AppError> {
        let result = sqlx::query(
            r#"INSERT INTO topics (title, message, creation_timestamp, status, author, course)
               VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&topic.title)
        .bind(&topic.message)
        .bind(topic.creation_timestamp)
        .bind(&topic.status)
        .bind(&topic.author)
        .bind(&topic.course)
        .execute(&self.pool)
        .await?;

        Ok(Topic {
            id: result.last_insert_rowid(),
            title: topic.title.clone(),
            message: topic.message.clone(),
            creation_timestamp: topic.creation_timestamp,
            status: topic.status.clone(),
            author: topic.author.clone(),
            course: topic.course.clone(),
        })
    }

    async fn update(&self, topic: &Topic) -> Result<Topic, AppError> {
        let result = sqlx::query(
            r#"UPDATE topics SET
                title = ?, message = ?, status = ?, author = ?, course = ?
            WHERE id = ?"#,
        )
        .bind(&topic.title)
        .bind(&topic.message)
        .bind(&topic.status)
        .bind(&topic.author)
        .bind(&topic.course)
        .bind(topic.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Topic {} not found", topic.id)));
        }

        Ok(topic.clone())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM topics WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Topic>, AppError> {
        let rows = sqlx::query(
            r#"SELECT id, title, message, creation_timestamp, status, author, course
               FROM topics ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(topic_from_row).collect())
    }
}

fn topic_from_row(row: &sqlx::sqlite::SqliteRow) -> Topic {
    Topic {
        id: row.get("id"),
        title: row.get("title"),
        message: row.get("message"),
        creation_timestamp: row.get("creation_timestamp"),
        status: row.get("status"),
        author: row.get("author"),
        course: row.get("course"),
    }
}
