//! Handlers for user management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::user::{CreateUserRequest, UpdateUserRequest, UserView};
use crate::api::middleware::auth::CurrentUser;
use crate::application::services::UserUpdate;
use crate::domain::entities::Role;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all users.
///
/// # Endpoint
///
/// `GET /users` (admin only)
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserView>>, AppError> {
    let users = state.user_service.find_all().await?;

    Ok(Json(users.iter().map(UserView::from).collect()))
}

/// Retrieves a user by id.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no user matches the id.
pub async fn get_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserView>, AppError> {
    let user = state.user_service.get(id).await?;

    Ok(Json(UserView::from(&user)))
}

/// Creates a user directly, optionally with the admin role.
///
/// # Endpoint
///
/// `POST /users` (admin only)
///
/// # Errors
///
/// Returns 409 Conflict when the e-mail is already taken. Unlike
/// self-service registration, the admin path surfaces the collision as a
/// conflict instead of an authentication failure.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserView>), AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .create(
            payload.name,
            payload.email,
            &payload.password,
            payload.role.unwrap_or(Role::User),
        )
        .await?;

    tracing::info!(user_id = user.id, role = %user.role, "User created by admin");

    Ok((StatusCode::CREATED, Json(UserView::from(&user))))
}

/// Partially updates a user.
///
/// # Endpoint
///
/// `PUT /users/{id}`
///
/// # Authorization
///
/// Callers may update their own account; admins may update anyone.
/// Changing `role` or `isActive` requires the admin role regardless of
/// the target.
///
/// # Errors
///
/// Returns 403 Forbidden on an authorization violation and 404 Not Found
/// if no user matches the id.
pub async fn update_user_handler(
    Path(id): Path<i64>,
    current: CurrentUser,
    State(state): State<AppState>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserView>, AppError> {
    payload.validate()?;

    let is_admin = current.role == Role::Admin;

    if current.user_id != id && !is_admin {
        return Err(AppError::forbidden(
            "Users can only update their own account",
            json!({ "id": id }),
        ));
    }

    if (payload.role.is_some() || payload.is_active.is_some()) && !is_admin {
        return Err(AppError::forbidden(
            "Only admins can change role or active status",
            json!({ "id": id }),
        ));
    }

    let user = state
        .user_service
        .update(
            id,
            UserUpdate {
                name: payload.name,
                email: payload.email,
                password: payload.password,
                is_active: payload.is_active,
                role: payload.role,
            },
        )
        .await?;

    Ok(Json(UserView::from(&user)))
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /users/{id}` (admin only)
///
/// # Errors
///
/// Returns 404 Not Found if no user matches the id.
pub async fn delete_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.user_service.remove(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
