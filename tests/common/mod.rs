#![allow(dead_code)]

use axum::{Router, middleware};
use axum_test::TestServer;
use click_tracker::api;
use click_tracker::api::middleware::auth;
use click_tracker::application::services::{
    AuthService, ClickStatisticService, TokenService, UniqueClickStatisticService, UserService,
};
use click_tracker::infrastructure::persistence::{
    PgClickStatisticRepository, PgUniqueClickStatisticRepository, PgUserRepository,
};
use click_tracker::state::AppState;
use click_tracker::utils::password::hash_password;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "test-signing-secret";

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool_arc = Arc::new(pool.clone());

    let user_repo = Arc::new(PgUserRepository::new(pool_arc.clone()));
    let click_repo = Arc::new(PgClickStatisticRepository::new(pool_arc.clone()));
    let unique_repo = Arc::new(PgUniqueClickStatisticRepository::new(pool_arc.clone()));

    let token_service = Arc::new(TokenService::new(TEST_JWT_SECRET, 60));
    let auth_service = Arc::new(AuthService::new(user_repo.clone(), token_service.clone()));
    let user_service = Arc::new(UserService::new(user_repo.clone()));
    let click_statistic_service = Arc::new(ClickStatisticService::new(
        click_repo,
        user_repo.clone(),
        unique_repo.clone(),
    ));
    let unique_click_statistic_service =
        Arc::new(UniqueClickStatisticService::new(unique_repo, user_repo));

    AppState {
        auth_service,
        user_service,
        click_statistic_service,
        unique_click_statistic_service,
        token_service,
        db: pool,
    }
}

/// Full route tree with the session guard, without the rate limiter so tests
/// are not throttled and need no socket peer address.
pub fn test_app(state: AppState) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .merge(api::routes::public_routes())
        .merge(protected)
        .with_state(state)
}

pub fn test_server(pool: PgPool) -> TestServer {
    TestServer::new(test_app(create_test_state(pool))).unwrap()
}

/// Inserts a user directly and returns its id and personal token.
pub async fn create_test_user(
    pool: &PgPool,
    email: &str,
    password: &str,
    role: &str,
) -> (i64, Uuid) {
    let personal_token = Uuid::new_v4();
    let password_hash = hash_password(password).unwrap();

    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO users (name, email, password_hash, personal_token, role)
        VALUES ($1, $2, $3, $4, $5::user_role)
        RETURNING id
        "#,
    )
    .bind(email.split('@').next().unwrap())
    .bind(email)
    .bind(password_hash)
    .bind(personal_token)
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap();

    (id, personal_token)
}

/// Logs in through the API and returns the session token.
pub async fn login(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/auth/login")
        .json(&serde_json::json!({ "email": email, "password": password }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    json["access_token"].as_str().unwrap().to_string()
}

pub fn bearer(token: &str) -> axum::http::HeaderValue {
    axum::http::HeaderValue::from_str(&format!("Bearer {token}")).unwrap()
}

pub async fn insert_click(pool: &PgPool, user_id: i64, text: &str) {
    sqlx::query("INSERT INTO click_statistics (text, user_id) VALUES ($1, $2)")
        .bind(text)
        .bind(user_id)
        .execute(pool)
        .await
        .unwrap();
}
