//! HTTP-level integration tests for the testimonials resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

/// Insert a testimonial row directly with an explicit created_at, so
/// ordering tests control the timeline.
async fn insert_at(pool: &PgPool, name: &str, created_at: &str) {
    let ts: chrono::DateTime<chrono::Utc> = created_at.parse().unwrap();
    sqlx::query(
        "INSERT INTO testimonials (id, name, role, content, rating, avatar_url, created_at)
         VALUES ($1, $2, '', 'content', 5, '', $3)",
    )
    .bind(reelcraft_core::types::new_record_id())
    .bind(name)
    .bind(ts)
    .execute(pool)
    .await
    .unwrap();
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_testimonial_applies_defaults(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/testimonials",
        serde_json::json!({"name": "Ana", "content": "Great work"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Ana");
    assert_eq!(json["role"], "");
    assert_eq!(json["avatar_url"], "");
    assert_eq!(json["rating"], 5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn partial_update_changes_only_submitted_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/testimonials",
            serde_json::json!({
                "name": "Ben",
                "role": "Founder",
                "content": "Solid team",
                "rating": 5,
                "avatar_url": "https://img.example.com/ben.png"
            }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/testimonials/{id}"),
        serde_json::json!({"rating": 4}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["rating"], 4);
    assert_eq!(json["name"], "Ben");
    assert_eq!(json["role"], "Founder");
    assert_eq!(json["content"], "Solid team");
    assert_eq!(json["avatar_url"], "https://img.example.com/ben.png");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_unknown_testimonial_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/testimonials/no-such-id",
        serde_json::json!({"rating": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_returns_newest_first(pool: PgPool) {
    insert_at(&pool, "oldest", "2026-01-01T10:00:00Z").await;
    insert_at(&pool, "middle", "2026-01-02T10:00:00Z").await;
    insert_at(&pool, "newest", "2026-01-03T10:00:00Z").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/testimonials").await).await;
    let names: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["newest", "middle", "oldest"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_testimonial_then_404_on_repeat(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/testimonials",
            serde_json::json!({"name": "Cy", "content": "Nice"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/testimonials/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/testimonials/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
