use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::debug;

use super::answers::AnswerSet;
use super::questions::QUESTIONNAIRE;
use super::scoring::PredictionResult;
use super::service::{Assessment, AssessmentService};
use crate::error::AppError;

/// Router builder exposing the questionnaire, the local scorer and full assessments.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/predict-stress", post(predict_stress_handler))
        .route("/api/v1/assessments", post(assessment_handler))
        .route("/api/v1/questions", get(questions_handler))
        .with_state(service)
}

fn answers_from(payload: Result<Json<AnswerSet>, JsonRejection>) -> Result<AnswerSet, AppError> {
    let Json(answers) = payload.map_err(|rejection| {
        debug!(error = %rejection.body_text(), "rejected answer payload");
        AppError::from(rejection)
    })?;
    Ok(answers)
}

/// Local rule-table scoring; this is the endpoint other instances call as their remote scorer.
pub(crate) async fn predict_stress_handler(
    State(service): State<Arc<AssessmentService>>,
    payload: Result<Json<AnswerSet>, JsonRejection>,
) -> Result<Json<PredictionResult>, AppError> {
    let answers = answers_from(payload)?;
    Ok(Json(service.score_locally(&answers).result))
}

pub(crate) async fn assessment_handler(
    State(service): State<Arc<AssessmentService>>,
    payload: Result<Json<AnswerSet>, JsonRejection>,
) -> Result<Json<Assessment>, AppError> {
    let answers = answers_from(payload)?;
    Ok(Json(service.assess(&answers).await))
}

pub(crate) async fn questions_handler() -> Response {
    (StatusCode::OK, Json(QUESTIONNAIRE.to_vec())).into_response()
}
