//! Notification domain models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Message addressed to a single user
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub message: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateNotificationRequest {
    pub user_id: i64,
    #[validate(length(min = 1))]
    pub message: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateNotificationRequest {
    #[validate(length(min = 1))]
    pub message: String,
}
