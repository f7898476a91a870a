mod common;

use click_tracker::domain::entities::NewClickStatistic;
use click_tracker::domain::repositories::ClickStatisticRepository;
use click_tracker::infrastructure::persistence::PgClickStatisticRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_insert_and_fetch_round_trip(pool: PgPool) {
    let (user_id, _) =
        common::create_test_user(&pool, "alice@example.com", "password123", "user").await;
    let repo = PgClickStatisticRepository::new(Arc::new(pool));

    let created = repo
        .insert(NewClickStatistic {
            text: "btn".to_string(),
            user_id,
        })
        .await
        .unwrap();

    let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.text, "btn");
    assert_eq!(fetched.user_id, user_id);

    assert!(repo.delete(created.id).await.unwrap());
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    assert!(!repo.delete(created.id).await.unwrap());
}

#[sqlx::test]
async fn test_find_by_user_newest_first(pool: PgPool) {
    let (alice, _) =
        common::create_test_user(&pool, "alice@example.com", "password123", "user").await;
    let (bob, _) = common::create_test_user(&pool, "bob@example.com", "password123", "user").await;
    let repo = PgClickStatisticRepository::new(Arc::new(pool));

    for text in ["first", "second", "third"] {
        repo.insert(NewClickStatistic {
            text: text.to_string(),
            user_id: alice,
        })
        .await
        .unwrap();
    }
    repo.insert(NewClickStatistic {
        text: "other".to_string(),
        user_id: bob,
    })
    .await
    .unwrap();

    let clicks = repo.find_by_user(alice).await.unwrap();
    assert_eq!(clicks.len(), 3);
    assert!(clicks.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    assert!(clicks.iter().all(|c| c.user_id == alice));

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 4);
}

#[sqlx::test]
async fn test_summary_groups_and_orders_by_count(pool: PgPool) {
    let (alice, _) =
        common::create_test_user(&pool, "alice@example.com", "password123", "user").await;
    let (bob, _) = common::create_test_user(&pool, "bob@example.com", "password123", "user").await;
    let repo = PgClickStatisticRepository::new(Arc::new(pool));

    for _ in 0..3 {
        repo.insert(NewClickStatistic {
            text: "popular".to_string(),
            user_id: alice,
        })
        .await
        .unwrap();
    }
    repo.insert(NewClickStatistic {
        text: "rare".to_string(),
        user_id: alice,
    })
    .await
    .unwrap();
    repo.insert(NewClickStatistic {
        text: "popular".to_string(),
        user_id: bob,
    })
    .await
    .unwrap();

    // Global summary merges both users
    let summary = repo.summary().await.unwrap();
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].text, "popular");
    assert_eq!(summary[0].count, 4);
    assert!(summary[0].first_click <= summary[0].last_click);
    assert_eq!(summary[1].text, "rare");
    assert_eq!(summary[1].count, 1);

    // Per-user summary only sees that user's rows
    let alice_summary = repo.summary_for_user(alice).await.unwrap();
    assert_eq!(alice_summary.len(), 2);
    assert_eq!(alice_summary[0].count, 3);
}

#[sqlx::test]
async fn test_find_by_user_and_text(pool: PgPool) {
    let (alice, _) =
        common::create_test_user(&pool, "alice@example.com", "password123", "user").await;
    let repo = PgClickStatisticRepository::new(Arc::new(pool));

    for text in ["btn_a", "btn_a", "btn_b"] {
        repo.insert(NewClickStatistic {
            text: text.to_string(),
            user_id: alice,
        })
        .await
        .unwrap();
    }

    let matches = repo.find_by_user_and_text(alice, "btn_a").await.unwrap();
    assert_eq!(matches.len(), 2);

    let empty = repo.find_by_user_and_text(alice, "missing").await.unwrap();
    assert!(empty.is_empty());
}
