//! HTTP-level tests for interactive story sessions.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use common::{build_test_app, expect_data, expect_error, get, login_user, post_json, test_config};
use drama_backend::workers::simulator::FixedOutcome;

fn app() -> axum::Router {
    build_test_app(test_config(20, true), Arc::new(FixedOutcome::Succeed)).0
}

#[tokio::test]
async fn playthrough_reaches_an_ending_and_resets() {
    let app = app();
    let token = login_user(&app, "reader").await;

    let start = expect_data(
        post_json(&app, "/api/v1/narrative", Some(&token), json!({ "content_id": 1 })).await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(start["current_branch_id"], 1);
    assert_eq!(start["available_choices"][0]["popularity_score"], 72.5);
    let id = start["session_id"].as_str().unwrap_or_default().to_string();

    let uri = format!("/api/v1/narrative/{id}/choices");
    let mid = expect_data(post_json(&app, &uri, Some(&token), json!({ "choice_index": 0 })).await, StatusCode::OK).await;
    assert_eq!(mid["current_branch_id"], 2);
    assert_eq!(mid["total_choices_made"], 1);

    let end = expect_data(post_json(&app, &uri, Some(&token), json!({ "choice_index": 1 })).await, StatusCode::OK).await;
    assert_eq!(end["current_branch_id"], 5);
    assert_eq!(end["is_ending"], true);
    assert_eq!(end["available_choices"].as_array().map(Vec::len), Some(0));

    let code = expect_error(
        post_json(&app, &uri, Some(&token), json!({ "choice_index": 0 })).await,
        StatusCode::CONFLICT,
    )
    .await;
    assert_eq!(code, "invalid_state");

    let reset = expect_data(
        post_json(&app, &format!("/api/v1/narrative/{id}/reset"), Some(&token), json!({})).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(reset["current_branch_id"], 1);
    assert_eq!(reset["total_choices_made"], 0);
}

#[tokio::test]
async fn sessions_are_private_to_their_owner() {
    let app = app();
    let owner = login_user(&app, "owner").await;
    let other = login_user(&app, "other").await;

    let start = expect_data(
        post_json(&app, "/api/v1/narrative", Some(&owner), json!({ "content_id": 2 })).await,
        StatusCode::CREATED,
    )
    .await;
    let uri = format!("/api/v1/narrative/{}", start["session_id"].as_str().unwrap_or_default());

    expect_data(get(&app, &uri, Some(&owner)).await, StatusCode::OK).await;
    let code = expect_error(get(&app, &uri, Some(&other)).await, StatusCode::NOT_FOUND).await;
    assert_eq!(code, "not_found");
}

#[tokio::test]
async fn start_needs_an_existing_drama() {
    let app = app();
    let token = login_user(&app, "lost").await;
    let code = expect_error(
        post_json(&app, "/api/v1/narrative", Some(&token), json!({ "content_id": 404 })).await,
        StatusCode::NOT_FOUND,
    )
    .await;
    assert_eq!(code, "not_found");
}
