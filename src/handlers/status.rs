//! 事件状态管理的 HTTP 处理器

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
    models::status::*, repository::StatusRepository,
};

/// 列出状态
pub async fn list_statuses(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let repo = StatusRepository::new(state.db.clone());
    let statuses = repo.list(query.limit, query.offset).await?;

    Ok(Json(json!({
        "statuses": statuses,
        "count": statuses.len()
    })))
}

/// 创建状态
pub async fn create_status(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Json(req): Json<CreateStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let repo = StatusRepository::new(state.db.clone());
    let status = repo.create(&req).await?;

    Ok(Json(json!({
        "message": "状态创建成功",
        "status": status
    })))
}

/// 获取状态详情
pub async fn get_status(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = StatusRepository::new(state.db.clone());
    let status = repo.find_by_id(id).await?.ok_or(AppError::NotFound)?;

    Ok(Json(status))
}

/// 更新状态
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let repo = StatusRepository::new(state.db.clone());
    let status = repo.update(id, &req).await?.ok_or(AppError::NotFound)?;

    Ok(Json(json!({
        "message": "状态更新成功",
        "status": status
    })))
}

/// 删除状态
pub async fn delete_status(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = StatusRepository::new(state.db.clone());
    repo.delete(id).await?;

    Ok(Json(json!({
        "message": "状态删除成功"
    })))
}
