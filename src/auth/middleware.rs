//! Bearer-token request guard
//!
//! Every protected route passes through [`auth_middleware`]: the bearer
//! token is extracted, resolved to a persisted user, and the resulting
//! [`CurrentUser`] is attached to request extensions for handlers to pull
//! out via the extractor impl.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::{error::AppError, middleware::AppState, models::user::User};

/// Authenticated identity attached to request extensions
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub group_id: Option<i64>,
    pub is_admin: bool,
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            group_id: user.group_id,
            is_admin: user.is_admin,
        }
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Extract the bearer token from the Authorization header
pub fn extract_token(headers: &HeaderMap) -> Result<String, AppError> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.to_string())
        .ok_or(AppError::Unauthorized)
}

/// Request guard: resolve the bearer token to a user or reject with 401
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_token(req.headers())?;

    // Signature, subject and expiry checks plus the subject lookup all
    // happen in resolve; any failure collapses to a generic 401
    let user = state.auth_service.resolve(&token).await?;

    req.extensions_mut().insert(CurrentUser::from(user));

    Ok(next.run(req).await)
}
