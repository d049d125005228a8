//! 通知管理的 HTTP 处理器

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::{
    auth::middleware::CurrentUser, error::AppError, middleware::AppState, models::notification::*,
    repository::NotificationRepository,
};

#[derive(Debug, Deserialize)]
pub struct NotificationListQuery {
    pub user_id: Option<i64>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    100
}

/// 列出通知，可按接收用户过滤
pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Query(query): Query<NotificationListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let repo = NotificationRepository::new(state.db.clone());
    let notifications = repo
        .list(query.user_id, query.limit, query.offset)
        .await?;

    Ok(Json(json!({
        "notifications": notifications,
        "count": notifications.len()
    })))
}

/// 创建通知
pub async fn create_notification(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Json(req): Json<CreateNotificationRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let repo = NotificationRepository::new(state.db.clone());
    let notification = repo.create(&req).await?;

    Ok(Json(json!({
        "message": "通知创建成功",
        "notification": notification
    })))
}

/// 获取通知详情
pub async fn get_notification(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = NotificationRepository::new(state.db.clone());
    let notification = repo.find_by_id(id).await?.ok_or(AppError::NotFound)?;

    Ok(Json(notification))
}

/// 更新通知
pub async fn update_notification(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateNotificationRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let repo = NotificationRepository::new(state.db.clone());
    let notification = repo.update(id, &req).await?.ok_or(AppError::NotFound)?;

    Ok(Json(json!({
        "message": "通知更新成功",
        "notification": notification
    })))
}

/// 删除通知
pub async fn delete_notification(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = NotificationRepository::new(state.db.clone());
    repo.delete(id).await?;

    Ok(Json(json!({
        "message": "通知删除成功"
    })))
}
