//! 分组管理的 HTTP 处理器

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
    models::group::*, repository::GroupRepository,
};

/// 列出分组
pub async fn list_groups(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let repo = GroupRepository::new(state.db.clone());
    let groups = repo.list(query.limit, query.offset).await?;

    Ok(Json(json!({
        "groups": groups,
        "count": groups.len()
    })))
}

/// 创建分组
pub async fn create_group(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Json(req): Json<CreateGroupRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let repo = GroupRepository::new(state.db.clone());
    let group = repo.create(&req).await?;

    Ok(Json(json!({
        "message": "分组创建成功",
        "group": group
    })))
}

/// 获取分组详情
pub async fn get_group(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = GroupRepository::new(state.db.clone());
    let group = repo.find_by_id(id).await?.ok_or(AppError::NotFound)?;

    Ok(Json(group))
}

/// 更新分组
pub async fn update_group(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateGroupRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let repo = GroupRepository::new(state.db.clone());
    let group = repo.update(id, &req).await?.ok_or(AppError::NotFound)?;

    Ok(Json(json!({
        "message": "分组更新成功",
        "group": group
    })))
}

/// 删除分组
pub async fn delete_group(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = GroupRepository::new(state.db.clone());
    repo.delete(id).await?;

    Ok(Json(json!({
        "message": "分组删除成功"
    })))
}
