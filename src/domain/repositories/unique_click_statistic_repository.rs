//! Repository trait for the aggregated per-(user, text) click counters.

use crate::domain::entities::{UniqueClickPatch, UniqueClickStatistic};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the deduplicated click counters.
///
/// The store guarantees at most one row per (user, text) pair.
/// [`Self::record_click`] must be an atomic increment-or-insert: concurrent
/// calls for the same pair may never lose an increment.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUniqueClickStatisticRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_unique_click_statistic.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UniqueClickStatisticRepository: Send + Sync {
    /// Records a click against the (user, text) counter.
    ///
    /// Inserts a new row with `count = 1` on the first click of a pair and
    /// increments the existing row in place on every subsequent click, in a
    /// single atomic store operation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_click(&self, user_id: i64, text: &str)
    -> Result<UniqueClickStatistic, AppError>;

    /// Lists all counters, highest count first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<UniqueClickStatistic>, AppError>;

    /// Lists a user's counters, highest count first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_user(&self, user_id: i64) -> Result<Vec<UniqueClickStatistic>, AppError>;

    /// Finds a counter by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<UniqueClickStatistic>, AppError>;

    /// Partially updates a counter.
    ///
    /// Only fields present in [`UniqueClickPatch`] are modified. Returns
    /// `Ok(None)` when no row matches the id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a text change collides with another
    /// counter of the same user. Returns [`AppError::Internal`] on database
    /// errors.
    async fn update(
        &self,
        id: i64,
        patch: UniqueClickPatch,
    ) -> Result<Option<UniqueClickStatistic>, AppError>;

    /// Deletes a counter.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if the id was
    /// unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
