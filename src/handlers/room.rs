//! 房间管理的 HTTP 处理器

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
    models::room::*, repository::RoomRepository,
};

/// 列出房间
pub async fn list_rooms(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let repo = RoomRepository::new(state.db.clone());
    let rooms = repo.list(query.limit, query.offset).await?;

    Ok(Json(json!({
        "rooms": rooms,
        "count": rooms.len()
    })))
}

/// 创建房间
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Json(req): Json<CreateRoomRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let repo = RoomRepository::new(state.db.clone());
    let room = repo.create(&req).await?;

    Ok(Json(json!({
        "message": "房间创建成功",
        "room": room
    })))
}

/// 获取房间详情
pub async fn get_room(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = RoomRepository::new(state.db.clone());
    let room = repo.find_by_id(id).await?.ok_or(AppError::NotFound)?;

    Ok(Json(room))
}

/// 更新房间
pub async fn update_room(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateRoomRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let repo = RoomRepository::new(state.db.clone());
    let room = repo.update(id, &req).await?.ok_or(AppError::NotFound)?;

    Ok(Json(json!({
        "message": "房间更新成功",
        "room": room
    })))
}

/// 删除房间
pub async fn delete_room(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = RoomRepository::new(state.db.clone());
    repo.delete(id).await?;

    Ok(Json(json!({
        "message": "房间删除成功"
    })))
}
