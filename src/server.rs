//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, service wiring, and Axum server lifecycle.

use crate::application::services::{
    AuthService, ClickStatisticService, TokenService, UniqueClickStatisticService, UserService,
};
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgClickStatisticRepository, PgUniqueClickStatisticRepository, PgUserRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Repositories and services
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let pool_arc = Arc::new(pool.clone());
    let user_repository = Arc::new(PgUserRepository::new(pool_arc.clone()));
    let click_repository = Arc::new(PgClickStatisticRepository::new(pool_arc.clone()));
    let unique_repository = Arc::new(PgUniqueClickStatisticRepository::new(pool_arc.clone()));

    let token_service = Arc::new(TokenService::new(
        &config.jwt_secret,
        config.jwt_expires_in_minutes,
    ));
    let auth_service = Arc::new(AuthService::new(
        user_repository.clone(),
        token_service.clone(),
    ));
    let user_service = Arc::new(UserService::new(user_repository.clone()));
    let click_statistic_service = Arc::new(ClickStatisticService::new(
        click_repository,
        user_repository.clone(),
        unique_repository.clone(),
    ));
    let unique_click_statistic_service = Arc::new(UniqueClickStatisticService::new(
        unique_repository,
        user_repository,
    ));

    let state = AppState {
        auth_service,
        user_service,
        click_statistic_service,
        unique_click_statistic_service,
        token_service,
        db: pool,
    };

    let app = app_router(state, &config);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
