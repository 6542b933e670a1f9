//! Topic model: the persisted record, the inbound payload and the outbound view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Title length bounds, in characters.
pub const TITLE_MIN_LEN: usize = 5;
pub const TITLE_MAX_LEN: usize = 100;

/// Message length bounds, in characters.
pub const MESSAGE_MIN_LEN: usize = 10;
pub const MESSAGE_MAX_LEN: usize = 500;

/// A persisted forum topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub creation_timestamp: DateTime<Utc>,
    pub status: String,
    pub author: String,
    pub course: String,
}

impl Topic {
    /// Overwrite the mutable fields from a request. `id` and
    /// `creation_timestamp` are never touched.
    pub fn apply(&mut self, request: &TopicRequest) {
        self.title = request.title.clone();
        self.message = request.message.clone();
        self.status = request.status.clone();
        self.author = request.author.clone();
        self.course = request.course.clone();
    }
}

/// A topic that has not been stored yet; the store assigns its id.
#[derive(Debug, Clone)]
pub struct NewTopic {
    pub title: String,
    pub message: String,
    pub creation_timestamp: DateTime<Utc>,
    pub status: String,
    pub author: String,
    pub course: String,
}

impl NewTopic {
    pub fn from_request(request: &TopicRequest, creation_timestamp: DateTime<Utc>) -> Self {
        Self {
            title: request.title.clone(),
            message: request.message.clone(),
            creation_timestamp,
            status: request.status.clone(),
            author: request.author.clone(),
            course: request.course.clone(),
        }
    }
}

/// Request body for creating or updating a topic.
///
/// Absent fields deserialize as empty strings so `validate` reports them by name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopicRequest {
    pub title: String,
    pub message: String,
    pub status: String,
    pub author: String,
    pub course: String,
}

impl TopicRequest {
    /// Check the field constraints. Runs before any store access.
    pub fn validate(&self) -> Result<(), AppError> {
        check_length("title", &self.title, TITLE_MIN_LEN, TITLE_MAX_LEN)?;
        check_length("message", &self.message, MESSAGE_MIN_LEN, MESSAGE_MAX_LEN)?;
        check_not_blank("status", &self.status)?;
        check_not_blank("author", &self.author)?;
        check_not_blank("course", &self.course)?;
        Ok(())
    }
}

fn check_not_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation {
            field: field.to_string(),
            message: format!("{} must not be blank", field),
        });
    }
    Ok(())
}

fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), AppError> {
    check_not_blank(field, value)?;

    let len = value.chars().count();
    if len < min || len > max {
        return Err(AppError::Validation {
            field: field.to_string(),
            message: format!(
                "{} must be between {} and {} characters (got {})",
                field, min, max, len
            ),
        });
    }
    Ok(())
}

/// Outbound representation of a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicResponse {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub creation_timestamp: DateTime<Utc>,
    pub status: String,
    pub author: String,
    pub course: String,
}

impl From<Topic> for TopicResponse {
    fn from(topic: Topic) -> Self {
        Self {
            id: topic.id,
            title: topic.title,
            message: topic.message,
            creation_timestamp: topic.creation_timestamp,
            status: topic.status,
            author: topic.author,
            course: topic.course,
        }
    }
}
