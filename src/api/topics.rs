//! Topic API endpoints.

use axum::extract::State;

use super::{success, ApiJson, ApiPath, ApiResult};
use crate::models::{TopicRequest, TopicResponse};
use crate::AppState;

/// GET /api/topics - List all topics.
pub async fn list_topics(State(state): State<AppState>) -> ApiResult<Vec<TopicResponse>> {
    success(state.topics.list_all().await?)
}

/// GET /api/topics/:id - Get a single topic.
pub async fn get_topic(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<TopicResponse> {
    success(state.topics.get_by_id(id).await?)
}

/// POST /api/topics - Create a new topic.
pub async fn create_topic(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<TopicRequest>,
) -> ApiResult<TopicResponse> {
    request.validate()?;
    success(state.topics.create(&request).await?)
}

/// PUT /api/topics/:id - Update a topic.
pub async fn update_topic(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(request): ApiJson<TopicRequest>,
) -> ApiResult<TopicResponse> {
    request.validate()?;
    success(state.topics.update(id, &request).await?)
}

/// DELETE /api/topics/:id - Delete a topic.
pub async fn delete_topic(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<()> {
    state.topics.delete(id).await?;
    success(())
}
