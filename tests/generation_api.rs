//! HTTP-level tests for generation jobs, the simulated pipeline and the
//! daily quota. Time is paused so every stage lands deterministically.

mod common;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{
    advance, build_test_app, delete, expect_data, expect_error, get, login_admin, login_user,
    post_json, test_config, RESULT_URL,
};
use drama_backend::workers::simulator::{FixedOutcome, OutcomePolicy, GENERATION_ERROR};

/// Past the 6.5 s resolution of a first run.
const FIRST_RUN_DONE: Duration = Duration::from_millis(7000);
/// Past the 5 s resolution of a retry.
const RETRY_DONE: Duration = Duration::from_millis(5500);

/// Resolves jobs from a script of outcomes, succeeding once it runs out.
struct Scripted(Mutex<VecDeque<bool>>);

impl Scripted {
    fn new(outcomes: &[bool]) -> Arc<Self> {
        Arc::new(Self(Mutex::new(outcomes.iter().copied().collect())))
    }
}

impl OutcomePolicy for Scripted {
    fn should_fail(&self) -> bool {
        self.0
            .lock()
            .map(|mut queue| queue.pop_front().unwrap_or(false))
            .unwrap_or(false)
    }
}

async fn submit(app: &axum::Router, token: &str, content_id: i64, episode: u32) -> String {
    let response = post_json(
        app,
        "/api/v1/generation/tasks",
        Some(token),
        json!({ "content_id": content_id, "episode": episode }),
    )
    .await;
    let data = expect_data(response, StatusCode::ACCEPTED).await;
    data["task_id"].as_str().expect("task id").to_string()
}

async fn task(app: &axum::Router, token: &str, task_id: &str) -> Value {
    let response = get(app, &format!("/api/v1/generation/tasks/{task_id}"), Some(token)).await;
    expect_data(response, StatusCode::OK).await
}

async fn quota(app: &axum::Router, token: &str) -> Value {
    expect_data(get(app, "/api/v1/generation/quota", Some(token)).await, StatusCode::OK).await
}

#[tokio::test(start_paused = true)]
async fn submit_returns_pending_task_with_defaults() {
    let (app, _) = build_test_app(test_config(20, true), Arc::new(FixedOutcome::Succeed));
    let token = login_admin(&app).await;

    let task_id = submit(&app, &token, 1, 2).await;
    assert_eq!(task_id, "task_1");

    let job = task(&app, &token, &task_id).await;
    assert_eq!(job["status"], "PENDING");
    assert_eq!(job["progress"], 0);
    assert_eq!(job["style"], "urban");
    assert_eq!(job["duration"], 60);
    assert_eq!(job["voice"], "female");
    assert!(job.get("video_url").is_none());
    assert!(job.get("completed_at").is_none());

    assert_eq!(submit(&app, &token, 1, 3).await, "task_2");
}

#[tokio::test(start_paused = true)]
async fn done_job_patches_episode_and_charges_quota() {
    let (app, _) = build_test_app(test_config(20, true), Arc::new(FixedOutcome::Succeed));
    let token = login_admin(&app).await;

    let task_id = submit(&app, &token, 1, 2).await;

    advance(Duration::from_millis(500)).await;
    let job = task(&app, &token, &task_id).await;
    assert_eq!(job["status"], "RUNNING");
    assert_eq!(job["progress"], 10);

    advance(Duration::from_millis(1600)).await;
    assert_eq!(task(&app, &token, &task_id).await["progress"], 55);

    advance(Duration::from_millis(2000)).await;
    assert_eq!(task(&app, &token, &task_id).await["progress"], 85);

    advance(Duration::from_millis(2500)).await;
    let job = task(&app, &token, &task_id).await;
    assert_eq!(job["status"], "DONE");
    assert_eq!(job["progress"], 100);
    assert_eq!(job["video_url"], RESULT_URL);
    assert!(job["completed_at"].is_string());

    assert_eq!(quota(&app, &token).await["used_today"], 1);

    let content = expect_data(get(&app, "/api/v1/contents/1", None).await, StatusCode::OK).await;
    let episodes = content["episodes"].as_array().expect("episodes");
    assert_eq!(episodes[1]["episode"], 2);
    assert_eq!(episodes[1]["video_url"], RESULT_URL);
    assert!(episodes[0]["video_url"].is_null());
}

#[tokio::test(start_paused = true)]
async fn quota_admits_until_limit_then_rejects() {
    let (app, state) = build_test_app(test_config(2, true), Arc::new(FixedOutcome::Succeed));
    let token = login_admin(&app).await;

    submit(&app, &token, 1, 1).await;
    advance(FIRST_RUN_DONE).await;
    assert_eq!(quota(&app, &token).await["used_today"], 1);

    // One below the limit still admits, and nothing is charged until DONE.
    submit(&app, &token, 1, 2).await;
    assert_eq!(quota(&app, &token).await["used_today"], 1);
    advance(Duration::from_millis(4100)).await;
    assert_eq!(quota(&app, &token).await["used_today"], 1);
    advance(FIRST_RUN_DONE).await;

    let snapshot = quota(&app, &token).await;
    assert_eq!(snapshot["used_today"], 2);
    assert_eq!(snapshot["daily_limit"], 2);

    let response = post_json(
        &app,
        "/api/v1/generation/tasks",
        Some(&token),
        json!({ "content_id": 1, "episode": 3 }),
    )
    .await;
    assert_eq!(expect_error(response, StatusCode::TOO_MANY_REQUESTS).await, "quota_exceeded");

    assert_eq!(state.db.lock().await.jobs.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn pending_jobs_do_not_count_against_quota() {
    let (app, _) = build_test_app(test_config(1, true), Arc::new(FixedOutcome::Succeed));
    let token = login_admin(&app).await;

    // Admission only checks finished work, so both are accepted.
    submit(&app, &token, 1, 1).await;
    submit(&app, &token, 1, 2).await;
    advance(FIRST_RUN_DONE).await;

    // The counter never overshoots the ceiling.
    assert_eq!(quota(&app, &token).await["used_today"], 1);
}

#[tokio::test(start_paused = true)]
async fn failed_job_can_be_retried_to_done() {
    let (app, _) = build_test_app(test_config(20, true), Scripted::new(&[true, false]));
    let token = login_admin(&app).await;

    let task_id = submit(&app, &token, 1, 3).await;
    advance(FIRST_RUN_DONE).await;

    let job = task(&app, &token, &task_id).await;
    assert_eq!(job["status"], "FAILED");
    assert_eq!(job["error"], GENERATION_ERROR);
    assert_eq!(job["progress"], 85);
    assert_eq!(quota(&app, &token).await["used_today"], 0);

    let response = post_json(
        &app,
        &format!("/api/v1/generation/tasks/{task_id}/retry"),
        Some(&token),
        json!({}),
    )
    .await;
    assert_eq!(expect_data(response, StatusCode::OK).await["ok"], true);

    let job = task(&app, &token, &task_id).await;
    assert_eq!(job["status"], "PENDING");
    assert_eq!(job["progress"], 0);
    assert!(job.get("error").is_none());
    assert!(job.get("completed_at").is_none());

    advance(Duration::from_millis(2100)).await;
    let job = task(&app, &token, &task_id).await;
    assert_eq!(job["status"], "RUNNING");
    assert_eq!(job["progress"], 60);

    advance(RETRY_DONE - Duration::from_millis(2100)).await;
    let job = task(&app, &token, &task_id).await;
    assert_eq!(job["status"], "DONE");
    assert_eq!(job["video_url"], RESULT_URL);
    assert_eq!(quota(&app, &token).await["used_today"], 1);
}

#[tokio::test(start_paused = true)]
async fn retry_of_unfailed_job_is_rejected_without_mutation() {
    let (app, _) = build_test_app(test_config(20, true), Arc::new(FixedOutcome::Succeed));
    let token = login_admin(&app).await;

    let task_id = submit(&app, &token, 1, 1).await;
    advance(Duration::from_millis(2100)).await;

    let retry_uri = format!("/api/v1/generation/tasks/{task_id}/retry");
    let response = post_json(&app, &retry_uri, Some(&token), json!({})).await;
    assert_eq!(expect_error(response, StatusCode::CONFLICT).await, "invalid_state");

    let job = task(&app, &token, &task_id).await;
    assert_eq!(job["status"], "RUNNING");
    assert_eq!(job["progress"], 55);

    advance(FIRST_RUN_DONE).await;
    let response = post_json(&app, &retry_uri, Some(&token), json!({})).await;
    assert_eq!(expect_error(response, StatusCode::CONFLICT).await, "invalid_state");
    assert_eq!(task(&app, &token, &task_id).await["status"], "DONE");
}

#[tokio::test(start_paused = true)]
async fn unknown_task_is_not_found() {
    let (app, _) = build_test_app(test_config(20, true), Arc::new(FixedOutcome::Succeed));
    let token = login_admin(&app).await;

    let response = get(&app, "/api/v1/generation/tasks/task_404", Some(&token)).await;
    assert_eq!(expect_error(response, StatusCode::NOT_FOUND).await, "not_found");

    let response = post_json(&app, "/api/v1/generation/tasks/task_404/retry", Some(&token), json!({})).await;
    assert_eq!(expect_error(response, StatusCode::NOT_FOUND).await, "not_found");
}

#[tokio::test(start_paused = true)]
async fn list_is_newest_first_and_paginated() {
    let (app, _) = build_test_app(test_config(20, true), Arc::new(FixedOutcome::Succeed));
    let token = login_admin(&app).await;

    for episode in 1..=3 {
        submit(&app, &token, 1, episode).await;
    }

    let page = expect_data(
        get(&app, "/api/v1/generation/tasks?page=1&page_size=2", Some(&token)).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(page["total"], 3);
    let ids: Vec<&str> = page["jobs"]
        .as_array()
        .expect("jobs")
        .iter()
        .filter_map(|job| job["task_id"].as_str())
        .collect();
    assert_eq!(ids, ["task_3", "task_2"]);

    let page = expect_data(
        get(&app, "/api/v1/generation/tasks?page=2&page_size=2", Some(&token)).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(page["jobs"][0]["task_id"], "task_1");
    assert_eq!(page["jobs"].as_array().map(Vec::len), Some(1));

    let page = expect_data(
        get(&app, "/api/v1/generation/tasks?page=5&page_size=2", Some(&token)).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(page["jobs"].as_array().map(Vec::len), Some(0));
    assert_eq!(page["total"], 3);
}

#[tokio::test(start_paused = true)]
async fn job_finishes_after_its_content_is_deleted() {
    let (app, state) = build_test_app(test_config(20, true), Arc::new(FixedOutcome::Succeed));
    let token = login_admin(&app).await;

    let task_id = submit(&app, &token, 1, 1).await;
    advance(Duration::from_millis(1000)).await;

    let response = delete(&app, "/api/v1/contents/1", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    advance(FIRST_RUN_DONE).await;

    let job = task(&app, &token, &task_id).await;
    assert_eq!(job["status"], "DONE");
    assert_eq!(quota(&app, &token).await["used_today"], 1);
    assert!(state.db.lock().await.contents.iter().all(|item| item.id != 1));
}

#[tokio::test(start_paused = true)]
async fn submission_is_validated() {
    let (app, _) = build_test_app(test_config(20, true), Arc::new(FixedOutcome::Succeed));
    let token = login_admin(&app).await;

    let response = post_json(
        &app,
        "/api/v1/generation/tasks",
        Some(&token),
        json!({ "content_id": 1, "episode": 0 }),
    )
    .await;
    assert_eq!(expect_error(response, StatusCode::BAD_REQUEST).await, "validation");
}

#[tokio::test(start_paused = true)]
async fn any_signed_in_user_may_generate() {
    let (app, _) = build_test_app(test_config(20, true), Arc::new(FixedOutcome::Succeed));
    let token = login_user(&app, "viewer").await;

    assert_eq!(submit(&app, &token, 2, 1).await, "task_1");
}

#[tokio::test(start_paused = true)]
async fn generation_routes_require_a_token() {
    let (app, _) = build_test_app(test_config(20, true), Arc::new(FixedOutcome::Succeed));

    let response = get(&app, "/api/v1/generation/quota", None).await;
    assert_eq!(expect_error(response, StatusCode::UNAUTHORIZED).await, "unauthorized");

    let response = post_json(
        &app,
        "/api/v1/generation/tasks",
        Some("not-a-jwt"),
        json!({ "content_id": 1, "episode": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
