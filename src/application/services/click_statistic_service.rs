//! Raw click event recording and summary service.

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use crate::domain::entities::{ClickStatistic, NewClickStatistic, User};
use crate::domain::repositories::{
    ClickStatisticRepository, ClickSummary, UniqueClickStatisticRepository, UserRepository,
};
use crate::error::AppError;

/// Service recording click events into the append-only log.
///
/// Every write is gated by personal token ownership: authenticated callers
/// must present the token matching their own account, anonymous callers are
/// resolved purely from the token. The anonymous path additionally feeds the
/// per-(user, text) aggregate.
pub struct ClickStatisticService<C, U, Q>
where
    C: ClickStatisticRepository,
    U: UserRepository,
    Q: UniqueClickStatisticRepository,
{
    click_repository: Arc<C>,
    user_repository: Arc<U>,
    unique_repository: Arc<Q>,
}

impl<C, U, Q> ClickStatisticService<C, U, Q>
where
    C: ClickStatisticRepository,
    U: UserRepository,
    Q: UniqueClickStatisticRepository,
{
    /// Creates a new click statistic service.
    pub fn new(
        click_repository: Arc<C>,
        user_repository: Arc<U>,
        unique_repository: Arc<Q>,
    ) -> Self {
        Self {
            click_repository,
            user_repository,
            unique_repository,
        }
    }

    /// Records a click for an authenticated caller.
    ///
    /// The personal token must belong to the caller's own account; on
    /// failure nothing is written.
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
    ) -> Result<ClickStatistic, AppError> {
        self.verify_personal_token(user_id, personal_token).await?;

        self.click_repository
            .insert(NewClickStatistic { text, user_id })
            .await
    }

    /// Records a click identified only by a personal token.
    ///
    /// Resolves the owning user from the token, appends the raw log row, and
    /// forwards the event to the unique-click aggregate. A failed forward is
    /// logged and ignored: the raw row stays and the two tables converge on
    /// the next successful click (eventual consistency, no rollback).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if no user owns the token.
    pub async fn create_anonymous(
        &self,
        text: String,
        personal_token: Uuid,
    ) -> Result<ClickStatistic, AppError> {
        let user = self.resolve_token_owner(personal_token).await?;

        let click = self
            .click_repository
            .insert(NewClickStatistic {
                text: text.clone(),
                user_id: user.id,
            })
            .await?;

        if let Err(e) = self.unique_repository.record_click(user.id, &text).await {
            tracing::warn!(
                error = %e,
                user_id = user.id,
                text = %text,
                "Failed to update unique click aggregate for anonymous click"
            );
        }

        Ok(click)
    }

    /// Lists the whole click log, newest first.
    pub async fn find_all(&self) -> Result<Vec<ClickStatistic>, AppError> {
        self.click_repository.find_all().await
    }

    /// Lists one user's clicks, newest first.
    pub async fn find_by_user(&self, user_id: i64) -> Result<Vec<ClickStatistic>, AppError> {
        self.click_repository.find_by_user(user_id).await
    }

    /// Retrieves a click event by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no click matches the id.
    pub async fn find_one(&self, id: i64) -> Result<ClickStatistic, AppError> {
        self.click_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Click statistic not found", json!({ "id": id })))
    }

    /// Deletes a click event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no click matches the id.
    pub async fn remove(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.click_repository.delete(id).await?;

        if !deleted {
            return Err(AppError::not_found(
                "Click statistic not found",
                json!({ "id": id }),
            ));
        }

        Ok(())
    }

    /// Groups all recorded clicks by text label.
    pub async fn get_click_summary(&self) -> Result<Vec<ClickSummary>, AppError> {
        self.click_repository.summary().await
    }

    /// Groups one user's clicks by text label after re-validating the
    /// personal token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token does not belong to
    /// the user.
    pub async fn get_user_click_summary(
        &self,
        user_id: i64,
        personal_token: Uuid,
    ) -> Result<Vec<ClickSummary>, AppError> {
        self.verify_personal_token(user_id, personal_token).await?;

        self.click_repository.summary_for_user(user_id).await
    }

    /// Lists one user's clicks matching a text label, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token does not belong to
    /// the user and [`AppError::NotFound`] when no click carries the label.
    pub async fn find_clicks_by_text(
        &self,
        user_id: i64,
        text: &str,
        personal_token: Uuid,
    ) -> Result<Vec<ClickStatistic>, AppError> {
        self.verify_personal_token(user_id, personal_token).await?;

        let clicks = self
            .click_repository
            .find_by_user_and_text(user_id, text)
            .await?;

        if clicks.is_empty() {
            return Err(AppError::not_found(
                "No clicks found with this text for this user",
                json!({ "text": text }),
            ));
        }

        Ok(clicks)
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
