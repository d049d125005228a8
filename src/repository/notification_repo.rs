//! Notification repository (数据库访问层)

use crate::{error::AppError, models::notification::*};
use sqlx::PgPool;

pub struct NotificationRepository {
    db: PgPool,
}

impl NotificationRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Notification>, AppError> {
        let notification =
            sqlx::query_as::<_, Notification>("SELECT * FROM notifications WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.db)
                .await?;

        Ok(notification)
    }

    pub async fn create(&self, req: &CreateNotificationRequest) -> Result<Notification, AppError> {
        let notification = sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (user_id, message) VALUES ($1, $2) RETURNING *",
        )
        .bind(req.user_id)
        .bind(&req.message)
        .fetch_one(&self.db)
        .await?;

        Ok(notification)
    }

    pub async fn update(
        &self,
        id: i64,
        req: &UpdateNotificationRequest,
    ) -> Result<Option<Notification>, AppError> {
        let notification = sqlx::query_as::<_, Notification>(
            "UPDATE notifications SET message = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&req.message)
        .fetch_optional(&self.db)
        .await?;

        Ok(notification)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// 列出通知，可按接收用户过滤
    pub async fn list(
        &self,
        user_id: Option<i64>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>, AppError> {
        let notifications = sqlx::query_as::<_, Notification>(
            r#"
            SELECT * FROM notifications
            WHERE ($1::BIGINT IS NULL OR user_id = $1)
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        Ok(notifications)
    }
}
