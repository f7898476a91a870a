//! PostgreSQL implementation of the unique click counter repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{UniqueClickPatch, UniqueClickStatistic};
use crate::domain::repositories::UniqueClickStatisticRepository;
use crate::error::AppError;

/// PostgreSQL repository for the per-(user, text) click counters.
///
/// `record_click` relies on `INSERT .. ON CONFLICT DO UPDATE` so the
/// increment-or-insert happens in one statement; concurrent clicks for the
/// same pair serialize inside the database and no increment is lost.
pub struct PgUniqueClickStatisticRepository {
    pool: Arc<PgPool>,
}

impl PgUniqueClickStatisticRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UniqueClickStatisticRepository for PgUniqueClickStatisticRepository {
    async fn record_click(
        &self,
        user_id: i64,
        text: &str,
    ) -> Result<UniqueClickStatistic, AppError> {
        let stat = sqlx::query_as::<_, UniqueClickStatistic>(
            r#"
            INSERT INTO unique_click_statistics (user_id, text)
            VALUES ($1, $2)
            ON CONFLICT (user_id, text)
            DO UPDATE SET count = unique_click_statistics.count + 1, updated_at = NOW()
            RETURNING id, text, user_id, count, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(text)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(stat)
    }

    async fn find_all(&self) -> Result<Vec<UniqueClickStatistic>, AppError> {
        let stats = sqlx::query_as::<_, UniqueClickStatistic>(
            r#"
            SELECT id, text, user_id, count, created_at, updated_at
            FROM unique_click_statistics
            ORDER BY count DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(stats)
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Vec<UniqueClickStatistic>, AppError> {
        let stats = sqlx::query_as::<_, UniqueClickStatistic>(
            r#"
            SELECT id, text, user_id, count, created_at, updated_at
            FROM unique_click_statistics
            WHERE user_id = $1
            ORDER BY count DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(stats)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UniqueClickStatistic>, AppError> {
        let stat = sqlx::query_as::<_, UniqueClickStatistic>(
            r#"
            SELECT id, text, user_id, count, created_at, updated_at
            FROM unique_click_statistics
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(stat)
    }

    async fn update(
        &self,
        id: i64,
        patch: UniqueClickPatch,
    ) -> Result<Option<UniqueClickStatistic>, AppError> {
        let stat = sqlx::query_as::<_, UniqueClickStatistic>(
            r#"
            UPDATE unique_click_statistics
            SET text = COALESCE($2, text),
                count = COALESCE($3, count),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, text, user_id, count, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(patch.text)
        .bind(patch.count)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(stat)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM unique_click_statistics WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
