//! Repository trait for user account data access.

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for managing user accounts.
///
/// Provides CRUD operations plus the two secondary lookups the click-recording
/// paths depend on: by e-mail (login) and by personal token (anonymous click
/// submission).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_user.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists all users, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    /// Finds a user by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Finds a user by e-mail address.
    ///
    /// An absent e-mail is not an error; callers decide how to react.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Finds the user owning a personal token.
    ///
    /// An unknown token is not an error; callers decide how to react.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_personal_token(&self, token: Uuid) -> Result<Option<User>, AppError>;

    /// Creates a new user.
    ///
    /// Persists the supplied fields verbatim; password hashing and personal
    /// token generation are the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the e-mail or personal token is
    /// already taken. Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Partially updates a user.
    ///
    /// Only fields present in [`UserPatch`] are modified. Returns `Ok(None)`
    /// when no user matches the id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if an e-mail change collides with an
    /// existing account. Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: UserPatch) -> Result<Option<User>, AppError>;

    /// Deletes a user.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if the id was
    /// unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
