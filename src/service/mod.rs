//! Topic service: business rules on top of the topic store.
//!
//! Writes that check before they write (`create`, `update`, `delete`) hold the
//! service's write guard across the check and the write, so two writes through
//! the same service never interleave. Writers outside this process are not
//! coordinated.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::db::TopicStore;
use crate::errors::AppError;
use crate::models::{NewTopic, TopicRequest, TopicResponse};

const DUPLICATE_MESSAGE: &str = "A topic with this title and message already exists";

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Topic {} not found", id))
}

/// Orchestrates topic lifecycle operations.
pub struct TopicService {
    store: Arc<dyn TopicStore>,
    // Serialises every write made through this instance, including writes to
    // unrelated ids. It does not reach other processes sharing the database.
    write_guard: Mutex<()>,
}

impl TopicService {
    pub fn new(store: Arc<dyn TopicStore>) -> Self {
        Self {
            store,
            write_guard: Mutex::new(()),
        }
    }

    /// List every topic.
    pub async fn list_all(&self) -> Result<Vec<TopicResponse>, AppError> {
        let topics = self.store.find_all().await?;
        tracing::debug!(count = topics.len(), "Listed topics");
        Ok(topics.into_iter().map(TopicResponse::from).collect())
    }

    /// Fetch a single topic.
    pub async fn get_by_id(&self, id: i64) -> Result<TopicResponse, AppError> {
        let topic = self.store.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
        Ok(topic.into())
    }

    /// Create a topic. Fails with `Duplicate` if the title and message pair is taken.
    pub async fn create(&self, request: &TopicRequest) -> Result<TopicResponse, AppError> {
        let _guard = self.write_guard.lock().await;

        if self
            .store
            .exists_by_title_and_message(&request.title, &request.message)
            .await?
        {
            tracing::warn!(title = %request.title, "Rejected duplicate topic");
            return Err(AppError::Duplicate(DUPLICATE_MESSAGE.to_string()));
        }

        let topic = self
            .store
            .insert(&NewTopic::from_request(request, Utc::now()))
            .await?;

        tracing::info!(id = topic.id, "Created topic");
        Ok(topic.into())
    }

    /// Replace the editable fields of a topic.
    ///
    /// Unlike `create`, this does not check for an existing topic with the
    /// same title and message.
    pub async fn update(&self, id: i64, request: &TopicRequest) -> Result<TopicResponse, AppError> {
        let _guard = self.write_guard.lock().await;

        let mut topic = self.store.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
        topic.apply(request);
        let topic = self.store.update(&topic).await?;

        tracing::info!(id, "Updated topic");
        Ok(topic.into())
    }

    /// Delete a topic.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let _guard = self.write_guard.lock().await;

        if !self.store.exists_by_id(id).await? {
            return Err(not_found(id));
        }
        self.store.delete_by_id(id).await?;

        tracing::info!(id, "Deleted topic");
        Ok(())
    }
}
