//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /auth/*`                  - Registration and login (public)
//! - `GET  /health`                  - Health check (public)
//! - `POST /*/simple`                - Anonymous click submission by personal token (public)
//! - everything else                 - Session token required; admin methods role-checked
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Authentication** - Bearer session token, then per-route role guard
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the route tree with authentication, rate limiting, and tracing.
///
/// Exposed separately from [`app_router`] so tests can drive it without the
/// trailing-slash wrapper.
pub fn router(state: AppState, config: &Config) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let router = Router::new()
        .merge(api::routes::public_routes())
        .merge(protected)
        .with_state(state);

    let router = if config.behind_proxy {
        router.layer(rate_limit::proxied_layer(
            config.rate_limit_per_second,
            config.rate_limit_burst,
        ))
    } else {
        router.layer(rate_limit::layer(
            config.rate_limit_per_second,
            config.rate_limit_burst,
        ))
    };

    router.layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `config` - rate limit parameters and proxy deployment flag
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, config))
}
