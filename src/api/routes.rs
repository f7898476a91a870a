//! API route configuration.
//!
//! Routes are split by authentication requirement; the caller composes the
//! session guard on top of [`protected_routes`]. Admin-only methods carry
//! the role guard per route so it always runs after the session guard.

use crate::api::handlers::{
    click_summary_handler, create_click_statistic_handler, create_unique_click_statistic_handler,
    create_user_handler, delete_click_statistic_handler, delete_unique_click_statistic_handler,
    delete_user_handler, get_click_statistic_handler, get_unique_click_statistic_handler,
    get_user_handler, health_handler, list_click_statistics_handler,
    list_unique_click_statistics_handler, list_users_handler, login_handler,
    my_click_summary_handler, my_clicks_by_text_handler, my_clicks_handler, my_unique_clicks_handler,
    my_unique_summary_handler, my_unique_summary_with_token_handler, profile_handler,
    register_handler, simple_click_statistic_handler, simple_unique_click_statistic_handler,
    update_unique_click_statistic_handler, update_user_handler,
};
use crate::api::middleware::roles;
use crate::state::AppState;
use axum::{
    Router,
    handler::Handler,
    middleware::from_fn,
    routing::{get, post},
};

/// Routes reachable without a session token.
///
/// # Endpoints
///
/// - `POST /auth/register`                  - Create an account, returns a session token
/// - `POST /auth/login`                     - Authenticate, returns a session token
/// - `POST /click-statistics/simple`        - Record a click by personal token only
/// - `POST /unique-click-statistics/simple` - Record a counter click by personal token only
/// - `GET  /health`                         - Health check
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register_handler))
        .route("/auth/login", post(login_handler))
        .route(
            "/click-statistics/simple",
            post(simple_click_statistic_handler),
        )
        .route(
            "/unique-click-statistics/simple",
            post(simple_unique_click_statistic_handler),
        )
        .route("/health", get(health_handler))
}

/// Routes requiring a valid session token.
///
/// The session guard is applied by the caller; admin-only methods are
/// additionally wrapped with [`roles::require_admin`] here.
///
/// # Endpoints
///
/// - `GET    /auth/profile`                        - Caller's profile incl. personal token
/// - `GET    /users`                               - List users (admin)
/// - `POST   /users`                               - Create a user (admin)
/// - `GET    /users/{id}`                          - Fetch a user
/// - `PUT    /users/{id}`                          - Update self (admins: anyone)
/// - `DELETE /users/{id}`                          - Delete a user (admin)
/// - `POST   /click-statistics`                    - Record a click
/// - `GET    /click-statistics`                    - Full click log (admin)
/// - `GET    /click-statistics/my-clicks`          - Caller's clicks
/// - `GET    /click-statistics/summary/all`        - Global summary by text (admin)
/// - `POST   /click-statistics/summary/my-clicks`  - Caller's summary by text
/// - `POST   /click-statistics/my-clicks/by-text`  - Caller's clicks for one label
/// - `GET    /click-statistics/{id}`               - Fetch a click
/// - `DELETE /click-statistics/{id}`               - Delete a click (admin)
/// - (parallel surface under `/unique-click-statistics`, with `PUT` for update)
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/profile", get(profile_handler))
        .route(
            "/users",
            get(list_users_handler.layer(from_fn(roles::require_admin)))
                .post(create_user_handler.layer(from_fn(roles::require_admin))),
        )
        .route(
            "/users/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler.layer(from_fn(roles::require_admin))),
        )
        .route(
            "/click-statistics",
            post(create_click_statistic_handler)
                .get(list_click_statistics_handler.layer(from_fn(roles::require_admin))),
        )
        .route("/click-statistics/my-clicks", get(my_clicks_handler))
        .route(
            "/click-statistics/summary/all",
            get(click_summary_handler.layer(from_fn(roles::require_admin))),
        )
        .route(
            "/click-statistics/summary/my-clicks",
            post(my_click_summary_handler),
        )
        .route(
            "/click-statistics/my-clicks/by-text",
            post(my_clicks_by_text_handler),
        )
        .route(
            "/click-statistics/{id}",
            get(get_click_statistic_handler)
                .delete(delete_click_statistic_handler.layer(from_fn(roles::require_admin))),
        )
        .route(
            "/unique-click-statistics",
            post(create_unique_click_statistic_handler)
                .get(list_unique_click_statistics_handler.layer(from_fn(roles::require_admin))),
        )
        .route("/unique-click-statistics/me", get(my_unique_clicks_handler))
        .route(
            "/unique-click-statistics/me/summary",
            get(my_unique_summary_handler).post(my_unique_summary_with_token_handler),
        )
        .route(
            "/unique-click-statistics/{id}",
            get(get_unique_click_statistic_handler)
                .put(
                    update_unique_click_statistic_handler.layer(from_fn(roles::require_admin)),
                )
                .delete(
                    delete_unique_click_statistic_handler.layer(from_fn(roles::require_admin)),
                ),
        )
}
