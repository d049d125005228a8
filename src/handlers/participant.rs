//! 事件参与者管理的 HTTP 处理器

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::{
    auth::middleware::CurrentUser, error::AppError, middleware::AppState, models::participant::*,
    repository::ParticipantRepository,
};

#[derive(Debug, Deserialize)]
pub struct ParticipantListQuery {
    pub event_id: Option<i64>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    100
}

/// 列出参与记录，可按事件过滤
pub async fn list_participants(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Query(query): Query<ParticipantListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let repo = ParticipantRepository::new(state.db.clone());
    let participants = repo
        .list(query.event_id, query.limit, query.offset)
        .await?;

    Ok(Json(json!({
        "participants": participants,
        "count": participants.len()
    })))
}

/// 添加参与者
pub async fn create_participant(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Json(req): Json<CreateParticipantRequest>,
) -> Result<impl IntoResponse, AppError> {
    let repo = ParticipantRepository::new(state.db.clone());
    let participant = repo.create(&req).await?;

    Ok(Json(json!({
        "message": "参与者添加成功",
        "participant": participant
    })))
}

/// 获取参与记录详情
pub async fn get_participant(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = ParticipantRepository::new(state.db.clone());
    let participant = repo.find_by_id(id).await?.ok_or(AppError::NotFound)?;

    Ok(Json(participant))
}

/// 移除参与者
pub async fn delete_participant(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = ParticipantRepository::new(state.db.clone());
    repo.delete(id).await?;

    Ok(Json(json!({
        "message": "参与者移除成功"
    })))
}
