//! 事件管理的 HTTP 处理器

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::{
    auth::middleware::CurrentUser, error::AppError, handlers::ListQuery, middleware::AppState,
    models::event::*, repository::EventRepository,
};

/// 列出事件
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let repo = EventRepository::new(state.db.clone());
    let events = repo.list(query.limit, query.offset).await?;

    Ok(Json(json!({
        "events": events,
        "count": events.len()
    })))
}

/// 创建事件，主办人为当前用户
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Json(req): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let repo = EventRepository::new(state.db.clone());
    let event = repo.create(&req, current_user.id).await?;

    Ok(Json(json!({
        "message": "事件创建成功",
        "event": event
    })))
}

/// 获取事件详情
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = EventRepository::new(state.db.clone());
    let event = repo.find_by_id(id).await?.ok_or(AppError::NotFound)?;

    Ok(Json(event))
}

/// 更新事件
pub async fn update_event(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let repo = EventRepository::new(state.db.clone());
    let event = repo.update(id, &req).await?.ok_or(AppError::NotFound)?;

    Ok(Json(json!({
        "message": "事件更新成功",
        "event": event
    })))
}

/// 删除事件
pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = EventRepository::new(state.db.clone());
    repo.delete(id).await?;

    Ok(Json(json!({
        "message": "事件删除成功"
    })))
}
