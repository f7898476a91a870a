mod common;

use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use sqlx::PgPool;
use uuid::Uuid;

#[sqlx::test]
async fn test_simple_clicks_feed_raw_log_and_aggregate(pool: PgPool) {
    let server = common::test_server(pool.clone());

    let (_, personal_token) =
        common::create_test_user(&pool, "alice@example.com", "password123", "user").await;

    // Three anonymous clicks on the same label
    for _ in 0..3 {
        let response = server
            .post("/click-statistics/simple")
            .json(&serde_json::json!({ "text": "btn", "uuid": personal_token }))
            .await;
        response.assert_status(StatusCode::CREATED);
    }

    let token = common::login(&server, "alice@example.com", "password123").await;

    // Three raw rows
    let response = server
        .get("/click-statistics/my-clicks")
        .add_header(AUTHORIZATION, common::bearer(&token))
        .await;
    response.assert_status_ok();
    let raw = response.json::<serde_json::Value>();
    assert_eq!(raw.as_array().unwrap().len(), 3);

    // One aggregate row with count 3
    let response = server
        .get("/unique-click-statistics/me")
        .add_header(AUTHORIZATION, common::bearer(&token))
        .await;
    response.assert_status_ok();
    let aggregated = response.json::<serde_json::Value>();
    let rows = aggregated.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["text"], "btn");
    assert_eq!(rows[0]["count"], 3);
}

#[sqlx::test]
async fn test_simple_click_with_unknown_token_writes_nothing(pool: PgPool) {
    let server = common::test_server(pool.clone());

    let response = server
        .post("/click-statistics/simple")
        .json(&serde_json::json!({ "text": "btn", "uuid": Uuid::new_v4() }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM click_statistics")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test]
async fn test_authenticated_click_requires_own_token(pool: PgPool) {
    let server = common::test_server(pool.clone());

    common::create_test_user(&pool, "alice@example.com", "password123", "user").await;
    let token = common::login(&server, "alice@example.com", "password123").await;

    // Wrong personal token: rejected, nothing written
    let response = server
        .post("/click-statistics")
        .add_header(AUTHORIZATION, common::bearer(&token))
        .json(&serde_json::json!({ "text": "btn", "personalToken": Uuid::new_v4() }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM click_statistics")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);

    // Own token: accepted
    let profile = server
        .get("/auth/profile")
        .add_header(AUTHORIZATION, common::bearer(&token))
        .await;
    let personal_token = profile.json::<serde_json::Value>()["personalToken"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server
        .post("/click-statistics")
        .add_header(AUTHORIZATION, common::bearer(&token))
        .json(&serde_json::json!({ "text": "btn", "personalToken": personal_token }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["text"], "btn");
}

#[sqlx::test]
async fn test_full_log_is_admin_only(pool: PgPool) {
    let server = common::test_server(pool.clone());

    common::create_test_user(&pool, "user@example.com", "password123", "user").await;
    common::create_test_user(&pool, "admin@example.com", "password123", "admin").await;

    let user_token = common::login(&server, "user@example.com", "password123").await;
    let admin_token = common::login(&server, "admin@example.com", "password123").await;

    let response = server
        .get("/click-statistics")
        .add_header(AUTHORIZATION, common::bearer(&user_token))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);

    let response = server
        .get("/click-statistics")
        .add_header(AUTHORIZATION, common::bearer(&admin_token))
        .await;
    response.assert_status_ok();
}

#[sqlx::test]
async fn test_user_summary_groups_by_text(pool: PgPool) {
    let server = common::test_server(pool.clone());

    let (user_id, personal_token) =
        common::create_test_user(&pool, "alice@example.com", "password123", "user").await;

    common::insert_click(&pool, user_id, "btn_a").await;
    common::insert_click(&pool, user_id, "btn_a").await;
    common::insert_click(&pool, user_id, "btn_b").await;

    let token = common::login(&server, "alice@example.com", "password123").await;

    let response = server
        .post("/click-statistics/summary/my-clicks")
        .add_header(AUTHORIZATION, common::bearer(&token))
        .json(&serde_json::json!({ "personalToken": personal_token }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 2);

    // Ordered by count descending
    assert_eq!(rows[0]["text"], "btn_a");
    assert_eq!(rows[0]["count"], 2);
    assert!(rows[0].get("firstClick").is_some());
    assert!(rows[0].get("lastClick").is_some());
    assert_eq!(rows[1]["text"], "btn_b");
    assert_eq!(rows[1]["count"], 1);
}

#[sqlx::test]
async fn test_clicks_by_text_lookup(pool: PgPool) {
    let server = common::test_server(pool.clone());

    let (user_id, personal_token) =
        common::create_test_user(&pool, "alice@example.com", "password123", "user").await;

    common::insert_click(&pool, user_id, "btn_a").await;
    common::insert_click(&pool, user_id, "btn_a").await;

    let token = common::login(&server, "alice@example.com", "password123").await;

    let response = server
        .post("/click-statistics/my-clicks/by-text")
        .add_header(AUTHORIZATION, common::bearer(&token))
        .json(&serde_json::json!({ "text": "btn_a", "personalToken": personal_token }))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>().as_array().unwrap().len(),
        2
    );

    // Unknown label is a 404
    let response = server
        .post("/click-statistics/my-clicks/by-text")
        .add_header(AUTHORIZATION, common::bearer(&token))
        .json(&serde_json::json!({ "text": "missing", "personalToken": personal_token }))
        .await;
    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_fetch_and_delete_round_trip(pool: PgPool) {
    let server = common::test_server(pool.clone());

    let (_, personal_token) =
        common::create_test_user(&pool, "alice@example.com", "password123", "user").await;
    common::create_test_user(&pool, "admin@example.com", "password123", "admin").await;

    let created = server
        .post("/click-statistics/simple")
        .json(&serde_json::json!({ "text": "btn", "uuid": personal_token }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let id = created.json::<serde_json::Value>()["id"].as_i64().unwrap();

    let user_token = common::login(&server, "alice@example.com", "password123").await;
    let admin_token = common::login(&server, "admin@example.com", "password123").await;

    // Fetch returns the same record
    let response = server
        .get(&format!("/click-statistics/{id}"))
        .add_header(AUTHORIZATION, common::bearer(&user_token))
        .await;
    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["text"], "btn");

    // Delete is admin-only
    let response = server
        .delete(&format!("/click-statistics/{id}"))
        .add_header(AUTHORIZATION, common::bearer(&user_token))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);

    let response = server
        .delete(&format!("/click-statistics/{id}"))
        .add_header(AUTHORIZATION, common::bearer(&admin_token))
        .await;
    response.assert_status(StatusCode::NO_CONTENT);

    // Gone afterwards
    let response = server
        .get(&format!("/click-statistics/{id}"))
        .add_header(AUTHORIZATION, common::bearer(&user_token))
        .await;
    response.assert_status_not_found();
}
