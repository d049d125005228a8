//! Group repository (数据库访问层)

use crate::{error::AppError, models::group::*};
use sqlx::PgPool;

pub struct GroupRepository {
    db: PgPool,
}

impl GroupRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Group>, AppError> {
        let group = sqlx::query_as::<_, Group>("SELECT * FROM groups WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(group)
    }

    pub async fn create(&self, req: &CreateGroupRequest) -> Result<Group, AppError> {
        let group =
            sqlx::query_as::<_, Group>("INSERT INTO groups (name) VALUES ($1) RETURNING *")
                .bind(&req.name)
                .fetch_one(&self.db)
                .await?;

        Ok(group)
    }

    pub async fn update(
        &self,
        id: i64,
        req: &UpdateGroupRequest,
    ) -> Result<Option<Group>, AppError> {
        let group = sqlx::query_as::<_, Group>(
            "UPDATE groups SET name = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&req.name)
        .fetch_optional(&self.db)
        .await?;

        Ok(group)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM groups WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Group>, AppError> {
        let groups =
            sqlx::query_as::<_, Group>("SELECT * FROM groups ORDER BY id LIMIT $1 OFFSET $2")
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.db)
                .await?;

        Ok(groups)
    }
}
