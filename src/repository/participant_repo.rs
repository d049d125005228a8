//! Participant repository (数据库访问层)

use crate::{error::AppError, models::participant::*};
use sqlx::PgPool;

pub struct ParticipantRepository {
    db: PgPool,
}

impl ParticipantRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Participant>, AppError> {
        let participant =
            sqlx::query_as::<_, Participant>("SELECT * FROM participants WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.db)
                .await?;

        Ok(participant)
    }

    /// 重复加入同一事件视为冲突，交由数据库唯一约束拒绝
    pub async fn create(&self, req: &CreateParticipantRequest) -> Result<Participant, AppError> {
        let participant = sqlx::query_as::<_, Participant>(
            "INSERT INTO participants (event_id, user_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(req.event_id)
        .bind(req.user_id)
        .fetch_one(&self.db)
        .await?;

        Ok(participant)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM participants WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// 列出参与记录，可按事件过滤
    pub async fn list(
        &self,
        event_id: Option<i64>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Participant>, AppError> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT * FROM participants
            WHERE ($1::BIGINT IS NULL OR event_id = $1)
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(event_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        Ok(participants)
    }
}
