//! Event status domain models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Event status. The migration seeds Approved, Rejected, Cancelled and
/// Pending; events default to Pending.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Status {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStatusRequest {
    #[validate(length(min = 1))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    #[validate(length(min = 1))]
    pub name: String,
}
