//! Role-based authorization middleware.
//!
//! Runs after [`super::auth`] has attached the session to the request.

use axum::{extract::Request, middleware::Next, response::Response};
use serde_json::json;

use crate::api::middleware::auth::CurrentUser;
use crate::domain::entities::Role;
use crate::error::AppError;

/// Admits the request only when the caller's role is in `allowed`.
///
/// An empty set admits any authenticated caller. A missing session (the
/// authentication middleware did not run) is rejected with Unauthorized;
/// an authenticated caller with the wrong role gets Forbidden.
pub async fn require(
    allowed: &'static [Role],
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if allowed.is_empty() {
        return Ok(next.run(req).await);
    }

    let user = req.extensions().get::<CurrentUser>().ok_or_else(|| {
        AppError::unauthorized("Unauthorized", json!({"reason": "Missing session"}))
    })?;

    if !allowed.contains(&user.role) {
        return Err(AppError::forbidden(
            "Insufficient permissions",
            json!({ "requiredRoles": allowed, "role": user.role }),
        ));
    }

    Ok(next.run(req).await)
}

/// Admits only admin callers. Applied per-route via `axum::middleware::from_fn`.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    require(&[Role::Admin], req, next).await
}
