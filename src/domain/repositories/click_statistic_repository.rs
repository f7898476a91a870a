//! Repository trait for the raw click event log.

use crate::domain::entities::{ClickStatistic, NewClickStatistic};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// One row of a click summary grouped by text label.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClickSummary {
    pub text: String,
    pub count: i64,
    pub first_click: DateTime<Utc>,
    pub last_click: DateTime<Utc>,
}

/// Repository interface for the append-only click log.
///
/// Rows are inserted once per click event and never mutated. Summaries
/// aggregate the log by text label.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickStatisticRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_click_statistic.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickStatisticRepository: Send + Sync {
    /// Records a click event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_click: NewClickStatistic) -> Result<ClickStatistic, AppError>;

    /// Lists all click events, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<ClickStatistic>, AppError>;

    /// Lists a user's click events, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_user(&self, user_id: i64) -> Result<Vec<ClickStatistic>, AppError>;

    /// Lists a user's click events matching a text label, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_user_and_text(
        &self,
        user_id: i64,
        text: &str,
    ) -> Result<Vec<ClickStatistic>, AppError>;

    /// Finds a click event by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<ClickStatistic>, AppError>;

    /// Deletes a click event.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if the id was
    /// unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Groups the whole click log by text label.
    ///
    /// Each entry carries the click count plus first and last click
    /// timestamps, ordered by count descending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn summary(&self) -> Result<Vec<ClickSummary>, AppError>;

    /// Groups one user's click log by text label.
    ///
    /// Same shape and ordering as [`Self::summary`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn summary_for_user(&self, user_id: i64) -> Result<Vec<ClickSummary>, AppError>;
}
