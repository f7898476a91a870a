//! Handlers for registration, login, and profile endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::auth::{AuthResponse, LoginRequest, RegisterRequest};
use crate::api::dto::user::{ProfileView, UserView};
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account and logs it in.
///
/// # Endpoint
///
/// `POST /auth/register`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Alice",
///   "email": "alice@example.com",
///   "password": "correct horse battery staple"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails and 401 Unauthorized when
/// the e-mail is already registered.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    payload.validate()?;

    let (user, access_token) = state
        .auth_service
        .register(payload.name, payload.email, &payload.password)
        .await?;

    tracing::info!(user_id = user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: UserView::from(&user),
            access_token,
        }),
    ))
}

/// Authenticates a user and issues a session token.
///
/// # Endpoint
///
/// `POST /auth/login`
///
/// # Errors
///
/// Returns 401 Unauthorized with a generic message on unknown e-mail or
/// password mismatch; the two cases are indistinguishable by design.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate()?;

    let (user, access_token) = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(AuthResponse {
        user: UserView::from(&user),
        access_token,
    }))
}

/// Returns the authenticated caller's profile, including the personal token.
///
/// # Endpoint
///
/// `GET /auth/profile`
pub async fn profile_handler(
    current: CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<ProfileView>, AppError> {
    let user = state.auth_service.get_profile(current.user_id).await?;

    Ok(Json(ProfileView::from(&user)))
}
