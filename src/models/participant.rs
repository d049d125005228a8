//! Event participant domain models

use serde::{Deserialize, Serialize};

/// Membership of a user in an event; unique per (event, user) pair
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Participant {
    pub id: i64,
    pub event_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateParticipantRequest {
    pub event_id: i64,
    pub user_id: i64,
}
