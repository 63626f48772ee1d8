//! HTTP-level integration tests for the video collections.
//!
//! Short and long videos mirror each other; the capacity and delete
//! contracts are exercised on short videos, with a smaller pass over long
//! videos to cover their divergent fields.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Short videos
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_short_video_applies_defaults(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/short-videos",
        serde_json::json!({"title": "Clip", "url": "https://cdn.example.com/clip.mp4"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Clip");
    assert_eq!(json["thumbnail_url"], "");
    assert_eq!(json["order"], 0);
    assert!(!json["id"].as_str().unwrap().is_empty());
    assert!(json["created_at"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn eleventh_short_video_is_rejected_and_count_unchanged(pool: PgPool) {
    for i in 0..10 {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/short-videos",
            serde_json::json!({"title": format!("Clip {i}"), "url": "https://v.example.com"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/short-videos",
        serde_json::json!({"title": "One too many", "url": "https://v.example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Maximum 10 short videos allowed");
    assert_eq!(json["code"], "CAPACITY_EXCEEDED");

    let app = common::build_test_app(pool);
    let listed = body_json(get(app, "/api/short-videos").await).await;
    assert_eq!(listed.as_array().unwrap().len(), 10);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn short_videos_list_ascending_by_order(pool: PgPool) {
    for (title, order) in [("third", 30), ("first", 10), ("second", 20)] {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/api/short-videos",
            serde_json::json!({"title": title, "url": "https://v.example.com", "order": order}),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/short-videos").await).await;
    let titles: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_short_video_twice_reports_not_found(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/short-videos",
            serde_json::json!({"title": "Clip", "url": "https://v.example.com"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/short-videos/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/short-videos/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_unknown_short_video_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/short-videos/no-such-id").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Long videos
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn long_video_accepts_bare_id_and_full_url_verbatim(pool: PgPool) {
    for youtube_id in ["dQw4w9WgXcQ", "https://www.youtube.com/watch?v=dQw4w9WgXcQ"] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/long-videos",
            serde_json::json!({"title": "Feature", "youtube_id": youtube_id}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        // Stored exactly as submitted, no normalization.
        assert_eq!(json["youtube_id"], youtube_id);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn long_video_cap_is_independent_of_short_videos(pool: PgPool) {
    for i in 0..10 {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/api/long-videos",
            serde_json::json!({"title": format!("Feature {i}"), "youtube_id": "abc"}),
        )
        .await;
    }

    // Long collection is full...
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/long-videos",
        serde_json::json!({"title": "Overflow", "youtube_id": "abc"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // ...but short videos still accept writes.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/short-videos",
        serde_json::json!({"title": "Clip", "url": "https://v.example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_unknown_long_video_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/long-videos/no-such-id").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
