//! Integration tests for the `/api/v1/assessments` resource.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, get, send_json};
use serde_json::json;
use sqlx::SqlitePool;

use mindcheck_db::repositories::AssessmentRepo;

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn high_severity_submission_scores_and_persists(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = send_json(
        app,
        Method::POST,
        "/api/v1/assessments",
        json!({ "answers": ["yes", "yes", "yes", "yes", "no"] }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["severity"], "high");
    assert_eq!(json["severity_score"], 4);
    assert!(json["result"]
        .as_str()
        .unwrap()
        .contains("Professional support"));
    assert_eq!(json["remedies"].as_array().unwrap().len(), 5);

    let session_id = json["session_id"].as_str().unwrap().to_string();
    assert!(!session_id.is_empty());

    // One row persisted under the returned session token.
    let stored = AssessmentRepo::find_by_session(&pool, &session_id)
        .await
        .unwrap()
        .expect("assessment should be persisted");
    assert_eq!(stored.severity_score, 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn single_yes_submission_is_low_severity(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = send_json(
        app,
        Method::POST,
        "/api/v1/assessments",
        json!({ "answers": ["no", "no", "unsure", "no", "yes"] }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["severity"], "low");
    assert_eq!(json["severity_score"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn each_submission_gets_a_distinct_session_token(pool: SqlitePool) {
    let answers = json!({ "answers": ["yes", "no", "no", "no", "no"] });

    let app = common::build_test_app(pool.clone());
    let first = body_json(send_json(app, Method::POST, "/api/v1/assessments", answers.clone()).await)
        .await;
    let app = common::build_test_app(pool);
    let second =
        body_json(send_json(app, Method::POST, "/api/v1/assessments", answers).await).await;

    assert_ne!(first["session_id"], second["session_id"]);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn fewer_than_five_answers_is_rejected_before_any_write(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = send_json(
        app,
        Method::POST,
        "/api/v1/assessments",
        json!({ "answers": ["yes", "no", "yes"] }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    // No assessment row was created.
    assert!(AssessmentRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_answers_are_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = send_json(
        app,
        Method::POST,
        "/api/v1/assessments",
        json!({ "answers": [] }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(AssessmentRepo::list(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Read-back
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn stored_answers_round_trip_in_order(pool: SqlitePool) {
    let submitted = ["yes", "no", "unsure", "no", "yes"];

    let app = common::build_test_app(pool.clone());
    let response = send_json(
        app,
        Method::POST,
        "/api/v1/assessments",
        json!({ "answers": submitted }),
    )
    .await;
    let session_id = body_json(response).await["session_id"]
        .as_str()
        .unwrap()
        .to_string();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/assessments/{session_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["session_id"], session_id.as_str());
    assert_eq!(json["answers"], json!(submitted));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_session_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/assessments/not-a-session").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}
