//! User account management service.

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use crate::domain::entities::{NewUser, Role, User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::hash_password;

/// Mutation input accepted by [`UserService::update`].
///
/// Carries the plaintext password; hashing happens inside the service so no
/// pre-hashed value can be smuggled through the update path.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
    pub role: Option<Role>,
}

/// Service for user CRUD and personal token validation.
pub struct UserService<R: UserRepository> {
    user_repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<R>) -> Self {
        Self { user_repository }
    }

    /// Lists all users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        self.user_repository.find_all().await
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user matches the id.
    pub async fn get(&self, id: i64) -> Result<User, AppError> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "id": id })))
    }

    /// Creates a user on behalf of an administrator.
    ///
    /// Hashes the password and assigns a fresh personal token, the same way
    /// self-service registration does.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the e-mail is already taken.
    pub async fn create(
        &self,
        name: String,
        email: String,
        password: &str,
        role: Role,
    ) -> Result<User, AppError> {
        let password_hash = hash_password(password).map_err(|e| {
            tracing::error!(error = %e, "Failed to hash password");
            AppError::internal("User creation failed", json!({}))
        })?;

        self.user_repository
            .create(NewUser {
                name,
                email,
                password_hash,
                personal_token: Uuid::new_v4(),
                role,
            })
            .await
    }

    /// Partially updates a user.
    ///
    /// A supplied password is re-hashed before it reaches the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user matches the id.
    /// Returns [`AppError::Conflict`] if an e-mail change collides.
    pub async fn update(&self, id: i64, update: UserUpdate) -> Result<User, AppError> {
        let password_hash = match update.password.as_deref() {
            Some(password) => Some(hash_password(password).map_err(|e| {
                tracing::error!(error = %e, "Failed to hash password");
                AppError::internal("User update failed", json!({}))
            })?),
            None => None,
        };

        let patch = UserPatch {
            name: update.name,
            email: update.email,
            password_hash,
            is_active: update.is_active,
            role: update.role,
        };

        self.user_repository
            .update(id, patch)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "id": id })))
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user matches the id.
    pub async fn remove(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.user_repository.delete(id).await?;

        if !deleted {
            return Err(AppError::not_found("User not found", json!({ "id": id })));
        }

        Ok(())
    }

    /// Validates that a personal token belongs to a user.
    ///
    /// The comparison is an exact equality check on the stored token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist and
    /// [`AppError::Unauthorized`] if the token does not match.
    pub async fn validate_personal_token(
        &self,
        user_id: i64,
        personal_token: Uuid,
    ) -> Result<(), AppError> {
        let user = self.get(user_id).await?;

        if user.personal_token != personal_token {
            return Err(AppError::unauthorized(
                "Personal token is not valid for this user",
                json!({ "userId": user_id }),
            ));
        }

        Ok(())
    }
}
