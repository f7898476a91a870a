//! Shared application state injected into request handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    AuthService, ClickStatisticService, TokenService, UniqueClickStatisticService, UserService,
};
use crate::infrastructure::persistence::{
    PgClickStatisticRepository, PgUniqueClickStatisticRepository, PgUserRepository,
};

/// Dependency container built once in `server::run` and cloned per request.
///
/// Services are constructed explicitly at startup and passed by reference
/// through Axum's state extraction; there is no ambient global wiring.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<PgUserRepository>>,
    pub user_service: Arc<UserService<PgUserRepository>>,
    pub click_statistic_service: Arc<
        ClickStatisticService<
            PgClickStatisticRepository,
            PgUserRepository,
            PgUniqueClickStatisticRepository,
        >,
    >,
    pub unique_click_statistic_service:
        Arc<UniqueClickStatisticService<PgUniqueClickStatisticRepository, PgUserRepository>>,
    pub token_service: Arc<TokenService>,
    pub db: PgPool,
}
