//! 认证服务：凭证校验、令牌签发与身份解析

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    auth::jwt::{TokenError, TokenService},
    auth::password::PasswordHasher,
    error::AppError,
    models::{auth::*, user::User},
    repository::user_repo::UserRepository,
};

pub struct AuthService {
    db: PgPool,
    token_service: Arc<TokenService>,
}

impl AuthService {
    pub fn new(db: PgPool, token_service: Arc<TokenService>) -> Self {
        Self { db, token_service }
    }

    /// 校验邮箱密码组合
    ///
    /// 邮箱不存在与密码错误返回同一个错误值，响应侧无法区分，
    /// 避免通过登录接口枚举有效账号。
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db.clone());

        let user = user_repo
            .find_by_email(email)
            .await?
            .ok_or(AppError::CredentialMismatch)?;

        let hasher = PasswordHasher::new();
        if !hasher.verify(password, &user.password_hash) {
            tracing::debug!(email = %email, "Password verification failed");
            return Err(AppError::CredentialMismatch);
        }

        Ok(user)
    }

    /// 登录：校验凭证并签发访问令牌
    pub async fn login(&self, req: LoginRequest) -> Result<TokenResponse, AppError> {
        let user = self.authenticate(&req.email, &req.password).await?;

        let token = self.token_service.issue_access_token(&user.email)?;

        tracing::info!(user_id = user.id, "User logged in");

        Ok(TokenResponse::bearer(token))
    }

    /// 将令牌解析为持久化的用户
    ///
    /// 校验顺序：签名、主体声明、过期时间（解析时实时判断，不缓存）、
    /// 主体是否仍然存在。令牌本身有效但主体已被删除时同样拒绝。
    pub async fn resolve(&self, token: &str) -> Result<User, AppError> {
        let claims = self.token_service.decode(token)?;

        let Some(subject) = claims.sub else {
            return Err(TokenError::MissingSubject.into());
        };

        let user_repo = UserRepository::new(self.db.clone());
        let user = user_repo
            .find_by_email(&subject)
            .await?
            .ok_or(TokenError::UnknownSubject)?;

        Ok(user)
    }
}
