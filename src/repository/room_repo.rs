//! Room repository (数据库访问层)

use crate::{error::AppError, models::room::*};
use sqlx::PgPool;

pub struct RoomRepository {
    db: PgPool,
}

impl RoomRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Room>, AppError> {
        let room = sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(room)
    }

    pub async fn create(&self, req: &CreateRoomRequest) -> Result<Room, AppError> {
        let room = sqlx::query_as::<_, Room>("INSERT INTO rooms (name) VALUES ($1) RETURNING *")
            .bind(&req.name)
            .fetch_one(&self.db)
            .await?;

        Ok(room)
    }

    pub async fn update(&self, id: i64, req: &UpdateRoomRequest) -> Result<Option<Room>, AppError> {
        let room =
            sqlx::query_as::<_, Room>("UPDATE rooms SET name = $2 WHERE id = $1 RETURNING *")
                .bind(id)
                .bind(&req.name)
                .fetch_optional(&self.db)
                .await?;

        Ok(room)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Room>, AppError> {
        let rooms =
            sqlx::query_as::<_, Room>("SELECT * FROM rooms ORDER BY id LIMIT $1 OFFSET $2")
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.db)
                .await?;

        Ok(rooms)
    }
}
