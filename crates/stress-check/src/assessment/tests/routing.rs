use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::assessment::router::assessment_router;
use crate::assessment::service::AssessmentService;

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("serialize body")))
        .expect("request")
}

#[tokio::test]
async fn predict_stress_scores_locally() {
    let router = assessment_router(Arc::new(AssessmentService::local_only()));

    let response = router
        .oneshot(post_json("/api/predict-stress", json!(overloaded())))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["score"], json!(100));
    assert_eq!(payload["recommendations"].as_array().map(Vec::len), Some(6));
}

#[tokio::test]
async fn predict_stress_rejects_missing_answers() {
    let router = assessment_router(Arc::new(AssessmentService::local_only()));

    let response = router
        .oneshot(post_json("/api/predict-stress", json!({ "responses": [] })))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    let message = payload["error"].as_str().expect("error message");
    assert!(message.starts_with("Invalid input: "));
    assert!(message.contains("missing field `answers`"));
}

#[tokio::test]
async fn predict_stress_rejects_non_array_answers() {
    let router = assessment_router(Arc::new(AssessmentService::local_only()));

    let response = router
        .oneshot(post_json("/api/predict-stress", json!({ "answers": "7" })))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn null_values_score_as_neutral_without_rejecting_the_batch() {
    let router = assessment_router(Arc::new(AssessmentService::local_only()));
    let body = json!({
        "answers": [
            { "questionId": 1, "value": null },
            { "questionId": 2, "value": 4 }
        ]
    });

    let response = router
        .oneshot(post_json("/api/predict-stress", body))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    // Stress contributes nothing; four hours of sleep adds 20.
    assert_eq!(payload["score"], json!(20));
    let recommendations = payload["recommendations"].as_array().expect("recommendations");
    assert_eq!(recommendations.len(), 2);
    assert!(recommendations[1]
        .as_str()
        .is_some_and(|advice| advice.starts_with("You're getting 4 hours of sleep.")));
}

#[tokio::test]
async fn assessment_rejects_malformed_answers_as_bad_request() {
    let router = assessment_router(Arc::new(AssessmentService::local_only()));

    let response = router
        .oneshot(post_json(
            "/api/v1/assessments",
            json!({ "answers": [{ "value": 3 }] }),
        ))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .is_some_and(|message| message.contains("questionId")));
}

#[tokio::test]
async fn assessment_reports_source_and_level() {
    let service = service_with(Arc::new(FailingScorer::default()), true);
    let router = assessment_router(Arc::new(service));

    let response = router
        .oneshot(post_json("/api/v1/assessments", json!(calm_routine())))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["score"], json!(50));
    assert_eq!(payload["level"], json!("moderate"));
    assert_eq!(payload["source"], json!("local"));
    assert!(payload.get("advisory").is_none());
    assert!(payload["breakdown"].is_array());
}

#[tokio::test]
async fn questions_lists_the_questionnaire() {
    let router = assessment_router(Arc::new(AssessmentService::local_only()));

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/questions")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let questions = payload.as_array().expect("question list");
    assert_eq!(questions.len(), 5);
    assert_eq!(questions[1]["type"], json!("scale"));
    assert_eq!(questions[1]["step"], json!(0.5));
    assert_eq!(questions[3]["options"][0], json!("Poor"));
}
