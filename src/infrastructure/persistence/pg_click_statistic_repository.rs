//! PostgreSQL implementation of the click log repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ClickStatistic, NewClickStatistic};
use crate::domain::repositories::{ClickStatisticRepository, ClickSummary};
use crate::error::AppError;

/// PostgreSQL repository for the append-only click log.
///
/// Summaries are computed in SQL with a single `GROUP BY` pass rather than
/// in application memory.
pub struct PgClickStatisticRepository {
    pool: Arc<PgPool>,
}

impl PgClickStatisticRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickStatisticRepository for PgClickStatisticRepository {
    async fn insert(&self, new_click: NewClickStatistic) -> Result<ClickStatistic, AppError> {
        let click = sqlx::query_as::<_, ClickStatistic>(
            r#"
            INSERT INTO click_statistics (text, user_id)
            VALUES ($1, $2)
            RETURNING id, text, user_id, created_at, updated_at
            "#,
        )
        .bind(new_click.text)
        .bind(new_click.user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(click)
    }

    async fn find_all(&self) -> Result<Vec<ClickStatistic>, AppError> {
        let clicks = sqlx::query_as::<_, ClickStatistic>(
            r#"
            SELECT id, text, user_id, created_at, updated_at
            FROM click_statistics
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(clicks)
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Vec<ClickStatistic>, AppError> {
        let clicks = sqlx::query_as::<_, ClickStatistic>(
            r#"
            SELECT id, text, user_id, created_at, updated_at
            FROM click_statistics
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(clicks)
    }

    async fn find_by_user_and_text(
        &self,
        user_id: i64,
        text: &str,
    ) -> Result<Vec<ClickStatistic>, AppError> {
        let clicks = sqlx::query_as::<_, ClickStatistic>(
            r#"
            SELECT id, text, user_id, created_at, updated_at
            FROM click_statistics
            WHERE user_id = $1 AND text = $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(text)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(clicks)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ClickStatistic>, AppError> {
        let click = sqlx::query_as::<_, ClickStatistic>(
            r#"
            SELECT id, text, user_id, created_at, updated_at
            FROM click_statistics
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(click)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM click_statistics WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn summary(&self) -> Result<Vec<ClickSummary>, AppError> {
        let rows = sqlx::query_as::<_, ClickSummary>(
            r#"
            SELECT
                text,
                COUNT(*) AS count,
                MIN(created_at) AS first_click,
                MAX(created_at) AS last_click
            FROM click_statistics
            GROUP BY text
            ORDER BY count DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn summary_for_user(&self, user_id: i64) -> Result<Vec<ClickSummary>, AppError> {
        let rows = sqlx::query_as::<_, ClickSummary>(
            r#"
            SELECT
                text,
                COUNT(*) AS count,
                MIN(created_at) AS first_click,
                MAX(created_at) AS last_click
            FROM click_statistics
            WHERE user_id = $1
            GROUP BY text
            ORDER BY count DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }
}
