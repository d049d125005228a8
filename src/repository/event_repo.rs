//! Event repository (数据库访问层)

use crate::{error::AppError, models::event::*};
use sqlx::PgPool;

/// 省略 status_id 时使用的默认状态（Pending）
const DEFAULT_STATUS_ID: i64 = 4;

pub struct EventRepository {
    db: PgPool,
}

impl EventRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 根据 ID 查找事件
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Event>, AppError> {
        let event = sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(event)
    }

    /// 创建事件，主办人始终为当前认证用户
    pub async fn create(&self, req: &CreateEventRequest, host_id: i64) -> Result<Event, AppError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (name, date_start, date_end, room_id, group_id, description, status_id, host_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&req.name)
        .bind(req.date_start)
        .bind(req.date_end)
        .bind(req.room_id)
        .bind(req.group_id)
        .bind(&req.description)
        .bind(req.status_id.unwrap_or(DEFAULT_STATUS_ID))
        .bind(host_id)
        .fetch_one(&self.db)
        .await?;

        Ok(event)
    }

    /// 更新事件
    pub async fn update(
        &self,
        id: i64,
        req: &UpdateEventRequest,
    ) -> Result<Option<Event>, AppError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET
                name = COALESCE($2, name),
                date_start = COALESCE($3, date_start),
                date_end = COALESCE($4, date_end),
                room_id = COALESCE($5, room_id),
                group_id = COALESCE($6, group_id),
                description = COALESCE($7, description),
                status_id = COALESCE($8, status_id)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(req.date_start)
        .bind(req.date_end)
        .bind(req.room_id)
        .bind(req.group_id)
        .bind(&req.description)
        .bind(req.status_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(event)
    }

    /// 删除事件
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// 列出事件
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Event>, AppError> {
        let events =
            sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY id LIMIT $1 OFFSET $2")
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.db)
                .await?;

        Ok(events)
    }
}
