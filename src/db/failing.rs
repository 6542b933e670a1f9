//! Store that fails every call, for exercising error propagation.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::TopicStore;
use crate::errors::AppError;
use crate::models::{NewTopic, Topic};

/// Every operation returns `AppError::Database`. Write attempts are counted.
#[derive(Default)]
pub struct FailingTopicStore {
    writes: AtomicUsize,
}

impl FailingTopicStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of insert, update or delete calls that reached the store.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn unavailable() -> AppError {
        AppError::Database("Database error: connection refused".to_string())
    }

    fn record_write(&self) -> AppError {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Self::unavailable()
    }
}

#[async_trait]
impl TopicStore for FailingTopicStore {
    async fn find_by_id(&self, _id: i64) -> Result<Option<Topic>, AppError> {
        Err(Self::unavailable())
    }

    async fn exists_by_title_and_message(
        &self,
        _title: &str,
        _message: &str,
    ) -> Result<bool, AppError> {
        Err(Self::unavailable())
    }

    async fn exists_by_id(&self, _id: i64) -> Result<bool, AppError> {
        Err(Self::unavailable())
    }

    async fn insert(&self, _topic: &NewTopic) -> Result<Topic, AppError> {
        Err(self.record_write())
    }

    async fn update(&self, _topic: &Topic) -> Result<Topic, AppError> {
        Err(self.record_write())
    }

    async fn delete_by_id(&self, _id: i64) -> Result<(), AppError> {
        Err(self.record_write())
    }

    async fn find_all(&self) -> Result<Vec<Topic>, AppError> {
        Err(Self::unavailable())
    }
}
