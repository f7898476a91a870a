//! DTOs for registration, login, and profile endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::user::UserView;

/// Request to register a new account.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Request to authenticate with e-mail and password.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// Response returned by both registration and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserView,
    pub access_token: String,
}
