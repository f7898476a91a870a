mod common;

use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use sqlx::PgPool;

#[sqlx::test]
async fn test_user_listing_is_admin_only(pool: PgPool) {
    let server = common::test_server(pool.clone());

    common::create_test_user(&pool, "user@example.com", "password123", "user").await;
    common::create_test_user(&pool, "admin@example.com", "password123", "admin").await;

    let user_token = common::login(&server, "user@example.com", "password123").await;
    let admin_token = common::login(&server, "admin@example.com", "password123").await;

    let response = server
        .get("/users")
        .add_header(AUTHORIZATION, common::bearer(&user_token))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);

    let response = server
        .get("/users")
        .add_header(AUTHORIZATION, common::bearer(&admin_token))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>().as_array().unwrap().len(),
        2
    );
}

#[sqlx::test]
async fn test_admin_create_duplicate_email_is_conflict(pool: PgPool) {
    let server = common::test_server(pool.clone());

    common::create_test_user(&pool, "taken@example.com", "password123", "user").await;
    common::create_test_user(&pool, "admin@example.com", "password123", "admin").await;

    let admin_token = common::login(&server, "admin@example.com", "password123").await;

    let response = server
        .post("/users")
        .add_header(AUTHORIZATION, common::bearer(&admin_token))
        .json(&serde_json::json!({
            "name": "Clone",
            "email": "taken@example.com",
            "password": "password123"
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[sqlx::test]
async fn test_admin_can_create_admin(pool: PgPool) {
    let server = common::test_server(pool.clone());

    common::create_test_user(&pool, "admin@example.com", "password123", "admin").await;
    let admin_token = common::login(&server, "admin@example.com", "password123").await;

    let response = server
        .post("/users")
        .add_header(AUTHORIZATION, common::bearer(&admin_token))
        .json(&serde_json::json!({
            "name": "Second Admin",
            "email": "admin2@example.com",
            "password": "password123",
            "role": "admin"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["role"], "admin");
}

#[sqlx::test]
async fn test_self_update_cannot_escalate_role(pool: PgPool) {
    let server = common::test_server(pool.clone());

    let (user_id, _) =
        common::create_test_user(&pool, "user@example.com", "password123", "user").await;
    let token = common::login(&server, "user@example.com", "password123").await;

    // Plain rename of own account works
    let response = server
        .put(&format!("/users/{user_id}"))
        .add_header(AUTHORIZATION, common::bearer(&token))
        .json(&serde_json::json!({ "name": "Renamed" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["name"], "Renamed");

    // Role escalation is forbidden for non-admins
    let response = server
        .put(&format!("/users/{user_id}"))
        .add_header(AUTHORIZATION, common::bearer(&token))
        .json(&serde_json::json!({ "role": "admin" }))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);

    let role: String = sqlx::query_scalar("SELECT role::text FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(role, "user");
}

#[sqlx::test]
async fn test_update_other_account_requires_admin(pool: PgPool) {
    let server = common::test_server(pool.clone());

    let (alice_id, _) =
        common::create_test_user(&pool, "alice@example.com", "password123", "user").await;
    common::create_test_user(&pool, "bob@example.com", "password123", "user").await;
    common::create_test_user(&pool, "admin@example.com", "password123", "admin").await;

    let bob_token = common::login(&server, "bob@example.com", "password123").await;
    let admin_token = common::login(&server, "admin@example.com", "password123").await;

    let response = server
        .put(&format!("/users/{alice_id}"))
        .add_header(AUTHORIZATION, common::bearer(&bob_token))
        .json(&serde_json::json!({ "name": "Hijacked" }))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);

    let response = server
        .put(&format!("/users/{alice_id}"))
        .add_header(AUTHORIZATION, common::bearer(&admin_token))
        .json(&serde_json::json!({ "role": "admin", "isActive": false }))
        .await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["role"], "admin");
    assert_eq!(json["isActive"], false);
}

#[sqlx::test]
async fn test_delete_user_round_trip(pool: PgPool) {
    let server = common::test_server(pool.clone());

    let (user_id, _) =
        common::create_test_user(&pool, "doomed@example.com", "password123", "user").await;
    common::create_test_user(&pool, "admin@example.com", "password123", "admin").await;

    let admin_token = common::login(&server, "admin@example.com", "password123").await;

    let response = server
        .delete(&format!("/users/{user_id}"))
        .add_header(AUTHORIZATION, common::bearer(&admin_token))
        .await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = server
        .get(&format!("/users/{user_id}"))
        .add_header(AUTHORIZATION, common::bearer(&admin_token))
        .await;
    response.assert_status_not_found();

    // Deleting again is a 404
    let response = server
        .delete(&format!("/users/{user_id}"))
        .add_header(AUTHORIZATION, common::bearer(&admin_token))
        .await;
    response.assert_status_not_found();
}
