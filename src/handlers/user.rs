//! 用户管理的 HTTP 处理器

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::{
    auth::middleware::CurrentUser,
    auth::password::{generate_password, PasswordHasher},
    error::AppError,
    handlers::ListQuery,
    middleware::AppState,
    models::user::*,
    repository::UserRepository,
};

/// 管理操作要求管理员标志
fn require_admin(current_user: &CurrentUser) -> Result<(), AppError> {
    if current_user.is_admin {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// 列出用户
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let repo = UserRepository::new(state.db.clone());
    let users = repo.list(query.limit, query.offset).await?;

    let user_responses: Vec<UserResponse> = users.into_iter().map(|u| u.into()).collect();

    Ok(Json(json!({
        "users": user_responses,
        "count": user_responses.len()
    })))
}

/// 创建用户（仅管理员）
///
/// 未提供密码时生成随机密码，并把初始凭证通过欢迎邮件发给新账号；
/// 邮件发送是尽力而为，失败只记日志。
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Json(req): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&current_user)?;
    req.validate()?;

    let repo = UserRepository::new(state.db.clone());

    // 邮箱唯一
    if repo.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::BadRequest("email already registered".to_string()));
    }

    let generated = req.password.is_none();
    let password = match &req.password {
        Some(p) => p.clone(),
        None => generate_password(state.config.security.generated_password_length),
    };

    let hasher = PasswordHasher::new();
    let password_hash = hasher.hash(&password)?;

    let user = repo.create(&req, &password_hash).await?;

    // 只有生成的密码需要通过邮件告知
    if generated {
        let mail = state.mail_service.clone();
        let to = user.email.clone();
        let first_name = user.first_name.clone();
        tokio::spawn(async move {
            if let Err(e) = mail.send_welcome_email(&to, &first_name, &password).await {
                tracing::warn!(error = %e, "Failed to send welcome email");
            }
        });
    }

    Ok(Json(json!({
        "message": "用户创建成功",
        "user": UserResponse::from(user)
    })))
}

/// 获取用户详情
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = UserRepository::new(state.db.clone());
    let user = repo.find_by_id(id).await?.ok_or(AppError::NotFound)?;

    Ok(Json(UserResponse::from(user)))
}

/// 更新用户（仅管理员）
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&current_user)?;
    req.validate()?;

    let repo = UserRepository::new(state.db.clone());
    let user = repo.update(id, &req).await?.ok_or(AppError::NotFound)?;

    Ok(Json(json!({
        "message": "用户更新成功",
        "user": UserResponse::from(user)
    })))
}

/// 删除用户（仅管理员）
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&current_user)?;

    // 不允许删除自己
    if id == current_user.id {
        return Err(AppError::BadRequest("不能删除自己的账户".to_string()));
    }

    let repo = UserRepository::new(state.db.clone());
    repo.delete(id).await?;

    Ok(Json(json!({
        "message": "用户删除成功"
    })))
}

/// 修改自己的密码
pub async fn change_password(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let repo = UserRepository::new(state.db.clone());
    let user = repo
        .find_by_id(current_user.id)
        .await?
        .ok_or(AppError::NotFound)?;

    let hasher = PasswordHasher::new();
    if !hasher.verify(&req.old_password, &user.password_hash) {
        return Err(AppError::CredentialMismatch);
    }

    let new_password_hash = hasher.hash(&req.new_password)?;
    repo.update_password(current_user.id, &new_password_hash)
        .await?;

    Ok(Json(json!({
        "message": "密码修改成功"
    })))
}
