//! HTTP-level tests for the drama catalog.

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use serde_json::json;

use common::{
    advance, build_test_app, delete, expect_data, expect_error, get, login_admin, login_user,
    post_json, put_json, test_config,
};
use drama_backend::workers::simulator::FixedOutcome;

fn app(seed: bool) -> axum::Router {
    build_test_app(test_config(20, seed), Arc::new(FixedOutcome::Succeed)).0
}

#[tokio::test]
async fn seeded_catalog_is_public() {
    let app = app(true);

    let page = expect_data(get(&app, "/api/v1/contents", None).await, StatusCode::OK).await;
    assert_eq!(page["total"], 2);
    assert_eq!(page["contents"][0]["id"], 1);
    assert_eq!(page["contents"][0]["title"], "City Romance");

    let item = expect_data(get(&app, "/api/v1/contents/2", None).await, StatusCode::OK).await;
    assert_eq!(item["genre"], "Fantasy");
}

#[tokio::test]
async fn create_fills_defaults_and_lists_newest_first() {
    let app = app(false);
    let token = login_admin(&app).await;

    let first = expect_data(
        post_json(&app, "/api/v1/contents", Some(&token), json!({ "title": "First" })).await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(first["id"], 1000);
    assert_eq!(first["duration"], 10);
    assert_eq!(first["season_price"], 8.0);
    assert_eq!(first["views"], 0);
    assert_eq!(first["script_content"], "");

    let second = expect_data(
        post_json(&app, "/api/v1/contents", Some(&token), json!({ "title": "Second" })).await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(second["id"], 1001);

    let page = expect_data(get(&app, "/api/v1/contents", None).await, StatusCode::OK).await;
    assert_eq!(page["contents"][0]["title"], "Second");
    assert_eq!(page["contents"][1]["title"], "First");

    // Deleting the first keeps the second under its original id.
    let response = delete(&app, "/api/v1/contents/1000", Some(&token)).await;
    assert_eq!(expect_data(response, StatusCode::OK).await["ok"], true);

    let page = expect_data(get(&app, "/api/v1/contents", None).await, StatusCode::OK).await;
    assert_eq!(page["total"], 1);
    assert_eq!(page["contents"][0]["id"], 1001);

    let response = get(&app, "/api/v1/contents/1000", None).await;
    assert_eq!(expect_error(response, StatusCode::NOT_FOUND).await, "not_found");

    // Deleting again still acknowledges.
    let response = delete(&app, "/api/v1/contents/1000", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn list_is_paginated() {
    let app = app(false);
    let token = login_admin(&app).await;
    for n in 0..3 {
        post_json(&app, "/api/v1/contents", Some(&token), json!({ "title": format!("Drama {n}") })).await;
    }

    let page = expect_data(
        get(&app, "/api/v1/contents?page=2&page_size=2", None).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(page["total"], 3);
    assert_eq!(page["page"], 2);
    assert_eq!(page["contents"].as_array().map(Vec::len), Some(1));
    assert_eq!(page["contents"][0]["title"], "Drama 0");

    let response = get(&app, "/api/v1/contents?page_size=0", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_merges_provided_fields() {
    let app = app(true);
    let token = login_admin(&app).await;

    let updated = expect_data(
        put_json(
            &app,
            "/api/v1/contents/1",
            Some(&token),
            json!({ "title": "City Romance II", "season_price": 12.5 }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["title"], "City Romance II");
    assert_eq!(updated["season_price"], 12.5);
    assert_eq!(updated["genre"], "Romance");
    assert_eq!(updated["episodes"].as_array().map(Vec::len), Some(3));

    let replaced = expect_data(
        put_json(
            &app,
            "/api/v1/contents/1",
            Some(&token),
            json!({ "episodes": [{ "episode": 7 }] }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(replaced["episodes"].as_array().map(Vec::len), Some(1));
    assert_eq!(replaced["episodes"][0]["title"], "Episode 7");

    let response = put_json(&app, "/api/v1/contents/999", Some(&token), json!({ "title": "x" })).await;
    assert_eq!(expect_error(response, StatusCode::NOT_FOUND).await, "not_found");
}

#[tokio::test]
async fn duplicate_episode_numbers_are_rejected() {
    let app = app(true);
    let token = login_admin(&app).await;

    let response = post_json(
        &app,
        "/api/v1/contents",
        Some(&token),
        json!({ "title": "Twins", "episodes": [{ "episode": 1 }, { "episode": 1 }] }),
    )
    .await;
    assert_eq!(expect_error(response, StatusCode::BAD_REQUEST).await, "validation");

    let response = put_json(
        &app,
        "/api/v1/contents/1",
        Some(&token),
        json!({ "episodes": [{ "episode": 2 }, { "episode": 2 }] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let item = expect_data(get(&app, "/api/v1/contents/1", None).await, StatusCode::OK).await;
    assert_eq!(item["episodes"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn season_falls_back_to_default_lineup() {
    let app = app(true);

    let season = expect_data(get(&app, "/api/v1/contents/1/season", None).await, StatusCode::OK).await;
    assert_eq!(season["content_id"], 1);
    assert_eq!(season["episodes"].as_array().map(Vec::len), Some(3));

    let season = expect_data(get(&app, "/api/v1/contents/2/season", None).await, StatusCode::OK).await;
    let episodes = season["episodes"].as_array().expect("episodes");
    assert_eq!(episodes.len(), 12);
    assert_eq!(episodes.iter().filter(|e| e["is_free"] == true).count(), 3);

    // The synthesized lineup is not persisted.
    let item = expect_data(get(&app, "/api/v1/contents/2", None).await, StatusCode::OK).await;
    assert_eq!(item["episodes"].as_array().map(Vec::len), Some(0));

    let response = get(&app, "/api/v1/contents/404/season", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn episode_video_can_be_set_directly() {
    let app = app(true);
    let token = login_admin(&app).await;

    let item = expect_data(
        put_json(
            &app,
            "/api/v1/contents/1/episodes/3/video",
            Some(&token),
            json!({ "video_url": "https://media.test/ep3.mp4" }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(item["episodes"][2]["video_url"], "https://media.test/ep3.mp4");

    let response = put_json(
        &app,
        "/api/v1/contents/1/episodes/9/video",
        Some(&token),
        json!({ "video_url": "https://media.test/ep9.mp4" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = put_json(
        &app,
        "/api/v1/contents/1/episodes/1/video",
        Some(&token),
        json!({ "video_url": "not a url" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test(start_paused = true)]
async fn transcode_publishes_cdn_url_after_delay() {
    let app = app(true);
    let token = login_admin(&app).await;

    let accepted = expect_data(
        post_json(
            &app,
            "/api/v1/contents/1/episodes/1/transcode",
            Some(&token),
            json!({ "video_url": "https://media.test/raw.mp4", "watermark": true }),
        )
        .await,
        StatusCode::ACCEPTED,
    )
    .await;
    assert!(accepted["task_id"].as_str().is_some_and(|id| id.starts_with("trans_")));

    advance(Duration::from_millis(1500)).await;
    let item = expect_data(get(&app, "/api/v1/contents/1", None).await, StatusCode::OK).await;
    assert!(item["episodes"][0]["video_url"].is_null());

    advance(Duration::from_millis(1000)).await;
    let item = expect_data(get(&app, "/api/v1/contents/1", None).await, StatusCode::OK).await;
    assert_eq!(item["episodes"][0]["video_url"], "https://cdn.media.test/raw.mp4");

    let response = post_json(
        &app,
        "/api/v1/contents/2/episodes/1/transcode",
        Some(&token),
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn writes_are_admin_only() {
    let app = app(true);

    let response = post_json(&app, "/api/v1/contents", None, json!({ "title": "Anon" })).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let token = login_user(&app, "viewer").await;
    let response = post_json(&app, "/api/v1/contents", Some(&token), json!({ "title": "Viewer" })).await;
    assert_eq!(expect_error(response, StatusCode::FORBIDDEN).await, "forbidden");

    let response = delete(&app, "/api/v1/contents/1", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
