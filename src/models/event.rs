//! Event domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Room booking bound to a room, a group and a status; `host_id` references
/// the user who created it.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub date_start: Option<DateTime<Utc>>,
    pub date_end: Option<DateTime<Utc>>,
    pub room_id: i64,
    pub group_id: i64,
    pub description: Option<String>,
    pub status_id: i64,
    pub host_id: i64,
}

/// Create event request. The host is always the authenticated caller, never
/// part of the payload; an omitted status falls back to the pending status.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub date_start: Option<DateTime<Utc>>,
    pub date_end: Option<DateTime<Utc>>,
    pub room_id: i64,
    pub group_id: i64,
    pub description: Option<String>,
    pub status_id: Option<i64>,
}

/// Update event request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEventRequest {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub date_start: Option<DateTime<Utc>>,
    pub date_end: Option<DateTime<Utc>>,
    pub room_id: Option<i64>,
    pub group_id: Option<i64>,
    pub description: Option<String>,
    pub status_id: Option<i64>,
}
