//! Status repository (数据库访问层)

use crate::{error::AppError, models::status::*};
use sqlx::PgPool;

pub struct StatusRepository {
    db: PgPool,
}

impl StatusRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Status>, AppError> {
        let status = sqlx::query_as::<_, Status>("SELECT * FROM statuses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(status)
    }

    pub async fn create(&self, req: &CreateStatusRequest) -> Result<Status, AppError> {
        let status =
            sqlx::query_as::<_, Status>("INSERT INTO statuses (name) VALUES ($1) RETURNING *")
                .bind(&req.name)
                .fetch_one(&self.db)
                .await?;

        Ok(status)
    }

    pub async fn update(
        &self,
        id: i64,
        req: &UpdateStatusRequest,
    ) -> Result<Option<Status>, AppError> {
        let status = sqlx::query_as::<_, Status>(
            "UPDATE statuses SET name = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&req.name)
        .fetch_optional(&self.db)
        .await?;

        Ok(status)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM statuses WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Status>, AppError> {
        let statuses =
            sqlx::query_as::<_, Status>("SELECT * FROM statuses ORDER BY id LIMIT $1 OFFSET $2")
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.db)
                .await?;

        Ok(statuses)
    }
}
