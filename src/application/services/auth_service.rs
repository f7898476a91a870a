//! Credential validation, registration, and session issuing.

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use crate::application::services::TokenService;
use crate::domain::entities::{NewUser, Role, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::{hash_password, verify_password};

/// Generic message returned for every credential failure.
///
/// Unknown e-mail and wrong password are deliberately indistinguishable so
/// the endpoint leaks nothing about which check failed.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Service orchestrating login, registration, and profile retrieval.
pub struct AuthService<R: UserRepository> {
    user_repository: Arc<R>,
    token_service: Arc<TokenService>,
}

impl<R: UserRepository> AuthService<R> {
    /// Creates a new authentication service.
    pub fn new(user_repository: Arc<R>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Checks an e-mail/password pair against stored credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with a generic message when the
    /// e-mail is unknown or the password does not match.
    pub async fn validate_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<User, AppError> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS, json!({})))?;

        let matches = verify_password(password, &user.password_hash).map_err(|e| {
            tracing::error!(error = %e, user_id = user.id, "Stored password hash is unreadable");
            AppError::internal("Credential verification failed", json!({}))
        })?;

        if !matches {
            return Err(AppError::unauthorized(INVALID_CREDENTIALS, json!({})));
        }

        Ok(user)
    }

    /// Authenticates a user and issues a session token.
    ///
    /// Returns the user record together with the signed token; the handler
    /// maps both into the wire response.
    ///
    /// # Errors
    ///
    /// See [`Self::validate_credentials`].
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String), AppError> {
        let user = self.validate_credentials(email, password).await?;
        let access_token = self.token_service.sign(&user)?;

        Ok((user, access_token))
    }

    /// Registers a new user and issues a session token.
    ///
    /// The duplicate-e-mail check runs before any hashing work. A fresh
    /// personal token is assigned at creation; new accounts always get the
    /// `user` role.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the e-mail is already registered.
    /// This mirrors the original service's behavior of conflating the
    /// duplicate with an authentication failure rather than a conflict.
    pub async fn register(
        &self,
        name: String,
        email: String,
        password: &str,
    ) -> Result<(User, String), AppError> {
        if self.user_repository.find_by_email(&email).await?.is_some() {
            return Err(AppError::unauthorized(
                "Email is already registered",
                json!({}),
            ));
        }

        let password_hash = hash_password(password).map_err(|e| {
            tracing::error!(error = %e, "Failed to hash password");
            AppError::internal("Registration failed", json!({}))
        })?;

        let user = self
            .user_repository
            .create(NewUser {
                name,
                email,
                password_hash,
                personal_token: Uuid::new_v4(),
                role: Role::User,
            })
            .await?;

        let access_token = self.token_service.sign(&user)?;

        Ok((user, access_token))
    }

    /// Loads the profile of the user identified by the session's subject.
    ///
    /// A missing user (e.g. deleted after the token was issued) is masked as
    /// Unauthorized instead of NotFound so the endpoint does not distinguish
    /// stale sessions from unknown ids.
    pub async fn get_profile(&self, user_id: i64) -> Result<User, AppError> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized("Unauthorized", json!({"reason": "Unknown session subject"}))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use chrono::Utc;

    fn token_service() -> Arc<TokenService> {
        Arc::new(TokenService::new("test-signing-secret", 60))
    }

    fn stored_user(email: &str, password: &str) -> User {
        let now = Utc::now();
        User {
            id: 1,
            name: "Alice".to_string(),
            email: email.to_string(),
            password_hash: hash_password(password).unwrap(),
            personal_token: Uuid::new_v4(),
            is_active: true,
            role: Role::User,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_login_success_issues_decodable_token() {
        let mut mock_repo = MockUserRepository::new();
        let user = stored_user("alice@example.com", "password123");

        mock_repo
            .expect_find_by_email()
            .withf(|email| email == "alice@example.com")
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let tokens = token_service();
        let service = AuthService::new(Arc::new(mock_repo), tokens.clone());

        let (user, access_token) = service
            .login("alice@example.com", "password123")
            .await
            .unwrap();

        let claims = tokens.verify(&access_token).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.role, Role::User);
    }

    #[tokio::test]
    async fn test_login_failures_share_one_message() {
        let mut mock_repo = MockUserRepository::new();
        let user = stored_user("alice@example.com", "password123");

        mock_repo
            .expect_find_by_email()
            .withf(|email| email == "nobody@example.com")
            .returning(|_| Ok(None));
        mock_repo
            .expect_find_by_email()
            .withf(|email| email == "alice@example.com")
            .returning(move |_| Ok(Some(user.clone())));

        let service = AuthService::new(Arc::new(mock_repo), token_service());

        let unknown = service
            .login("nobody@example.com", "password123")
            .await
            .unwrap_err();
        let mismatch = service
            .login("alice@example.com", "wrong-password")
            .await
            .unwrap_err();

        assert_eq!(unknown.to_string(), mismatch.to_string());
        assert!(matches!(unknown, AppError::Unauthorized { .. }));
        assert!(matches!(mismatch, AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_register_assigns_personal_token_and_hashes_password() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo.expect_find_by_email().returning(|_| Ok(None));
        mock_repo
            .expect_create()
            .withf(|new_user: &NewUser| {
                new_user.password_hash.starts_with("$argon2")
                    && new_user.password_hash != "password123"
                    && new_user.role == Role::User
            })
            .times(1)
            .returning(|new_user| {
                let now = Utc::now();
                Ok(User {
                    id: 7,
                    name: new_user.name,
                    email: new_user.email,
                    password_hash: new_user.password_hash,
                    personal_token: new_user.personal_token,
                    is_active: true,
                    role: new_user.role,
                    created_at: now,
                    updated_at: now,
                })
            });

        let tokens = token_service();
        let service = AuthService::new(Arc::new(mock_repo), tokens.clone());

        let (user, access_token) = service
            .register(
                "Bob".to_string(),
                "bob@example.com".to_string(),
                "password123",
            )
            .await
            .unwrap();

        assert_eq!(user.email, "bob@example.com");
        let claims = tokens.verify(&access_token).unwrap();
        assert_eq!(claims.sub, "7");
    }

    #[tokio::test]
    async fn test_register_duplicate_email_creates_nothing() {
        let mut mock_repo = MockUserRepository::new();
        let existing = stored_user("taken@example.com", "irrelevant");

        mock_repo
            .expect_find_by_email()
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo.expect_create().times(0);

        let service = AuthService::new(Arc::new(mock_repo), token_service());

        let err = service
            .register(
                "Eve".to_string(),
                "taken@example.com".to_string(),
                "password123",
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_profile_masks_missing_user_as_unauthorized() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));

        let service = AuthService::new(Arc::new(mock_repo), token_service());

        let err = service.get_profile(999).await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized { .. }));
    }
}
