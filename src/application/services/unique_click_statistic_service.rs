//! Aggregated per-(user, text) click counter service.

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use crate::domain::entities::{UniqueClickPatch, UniqueClickStatistic, User};
use crate::domain::repositories::{UniqueClickStatisticRepository, UserRepository};
use crate::error::AppError;

/// Service maintaining one running counter per (user, text) pair.
///
/// Ownership checks mirror the raw click log service; the upsert itself is a
/// single atomic store operation, so the counter invariant holds under
/// concurrent submissions.
pub struct UniqueClickStatisticService<Q, U>
where
    Q: UniqueClickStatisticRepository,
    U: UserRepository,
{
    unique_repository: Arc<Q>,
    user_repository: Arc<U>,
}

impl<Q, U> UniqueClickStatisticService<Q, U>
where
    Q: UniqueClickStatisticRepository,
    U: UserRepository,
{
    /// Creates a new unique click statistic service.
    pub fn new(unique_repository: Arc<Q>, user_repository: Arc<U>) -> Self {
        Self {
            unique_repository,
            user_repository,
        }
    }

    /// Records a click for an authenticated caller.
    ///
    /// First click of a (user, text) pair creates the counter at 1;
    /// subsequent clicks increment it in place.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the caller's account is gone and
    /// [`AppError::Unauthorized`] if the token does not match.
    pub async fn create(
        &self,
        text: String,
        personal_token: Uuid,
        user_id: i64,
    ) -> Result<UniqueClickStatistic, AppError> {
        self.verify_personal_token(user_id, personal_token).await?;

        self.unique_repository.record_click(user_id, &text).await
    }

    /// Records a click identified only by a personal token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if no user owns the token.
    pub async fn create_anonymous(
        &self,
        text: String,
        personal_token: Uuid,
    ) -> Result<UniqueClickStatistic, AppError> {
        let user = self.resolve_token_owner(personal_token).await?;

        self.unique_repository.record_click(user.id, &text).await
    }

    /// Lists all counters, highest count first.
    pub async fn find_all(&self) -> Result<Vec<UniqueClickStatistic>, AppError> {
        self.unique_repository.find_all().await
    }

    /// Lists one user's counters, highest count first.
    pub async fn find_by_user(&self, user_id: i64) -> Result<Vec<UniqueClickStatistic>, AppError> {
        self.unique_repository.find_by_user(user_id).await
    }

    /// Retrieves a counter by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no counter matches the id.
    pub async fn find_one(&self, id: i64) -> Result<UniqueClickStatistic, AppError> {
        self.unique_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Unique click statistic not found", json!({ "id": id }))
            })
    }

    /// Partially updates a counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no counter matches the id.
    pub async fn update(
        &self,
        id: i64,
        patch: UniqueClickPatch,
    ) -> Result<UniqueClickStatistic, AppError> {
        self.unique_repository
            .update(id, patch)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Unique click statistic not found", json!({ "id": id }))
            })
    }

    /// Deletes a counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no counter matches the id.
    pub async fn remove(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.unique_repository.delete(id).await?;

        if !deleted {
            return Err(AppError::not_found(
                "Unique click statistic not found",
                json!({ "id": id }),
            ));
        }

        Ok(())
    }

    /// Lists one user's counters after re-validating the personal token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token does not belong to
    /// the user.
    pub async fn get_user_click_summary(
        &self,
        user_id: i64,
        personal_token: Uuid,
    ) -> Result<Vec<UniqueClickStatistic>, AppError> {
        self.verify_personal_token(user_id, personal_token).await?;

        self.unique_repository.find_by_user(user_id).await
    }

    /// Checks that `personal_token` is the one stored for `user_id`.
    async fn verify_personal_token(
        &self,
        user_id: i64,
        personal_token: Uuid,
    ) -> Result<(), AppError> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "id": user_id })))?;

        if user.personal_token != personal_token {
            return Err(AppError::unauthorized(
                "Personal token is not valid for this user",
                json!({ "userId": user_id }),
            ));
        }

        Ok(())
    }

    /// Resolves the user owning a personal token.
    async fn resolve_token_owner(&self, personal_token: Uuid) -> Result<User, AppError> {
        self.user_repository
            .find_by_personal_token(personal_token)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid personal token", json!({})))
    }
}
