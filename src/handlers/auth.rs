//! 认证相关的 HTTP 处理器

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::{
    auth::middleware::CurrentUser, error::AppError, middleware::AppState, models::auth::*,
};

/// 登录：校验邮箱密码并返回 bearer 令牌
///
/// 失败时统一返回 401 和固定文案，不区分邮箱不存在与密码错误。
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = state.auth_service.login(req).await?;

    Ok(Json(response))
}

/// 获取当前用户信息
pub async fn get_current_user(current_user: CurrentUser) -> Result<impl IntoResponse, AppError> {
    Ok(Json(json!({
        "id": current_user.id,
        "email": current_user.email,
        "first_name": current_user.first_name,
        "last_name": current_user.last_name,
        "group_id": current_user.group_id,
        "is_admin": current_user.is_admin,
    })))
}
