use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::assessment::answers::{Answer, AnswerSet};
use crate::assessment::questions::{
    CURRENT_STRESS, EXERCISE_SESSIONS, RELAXATION, SLEEP_HOURS, WORK_LIFE_BALANCE,
};
use crate::assessment::remote::{RemoteScorer, RemoteScorerError};
use crate::assessment::scoring::PredictionResult;
use crate::assessment::service::AssessmentService;
use crate::config::ScoringConfig;

pub(super) fn answers(
    stress: f64,
    sleep: f64,
    exercise: f64,
    balance: &str,
    relaxation: &str,
) -> AnswerSet {
    AnswerSet::new(vec![
        Answer::numeric(CURRENT_STRESS, stress),
        Answer::numeric(SLEEP_HOURS, sleep),
        Answer::numeric(EXERCISE_SESSIONS, exercise),
        Answer::label(WORK_LIFE_BALANCE, balance),
        Answer::label(RELAXATION, relaxation),
    ])
}

/// Stressed but otherwise well-rested and active.
pub(super) fn calm_routine() -> AnswerSet {
    answers(10.0, 8.0, 7.0, "Excellent", "Daily")
}

/// Every rule fires.
pub(super) fn overloaded() -> AnswerSet {
    answers(10.0, 4.0, 0.0, "Poor", "Never")
}

pub(super) fn scoring_config(local_fallback: bool) -> ScoringConfig {
    ScoringConfig {
        remote_url: None,
        remote_timeout: Duration::from_millis(100),
        local_fallback,
    }
}

pub(super) fn service_with(remote: Arc<dyn RemoteScorer>, local_fallback: bool) -> AssessmentService {
    AssessmentService::new(Some(remote), &scoring_config(local_fallback))
}

pub(super) fn remote_result() -> PredictionResult {
    PredictionResult {
        score: 42,
        recommendations: vec!["Take a walk after lunch.".to_string()],
    }
}

/// Returns a fixed result and counts calls.
#[derive(Default)]
pub(super) struct FixedScorer {
    pub(super) result: Option<PredictionResult>,
    calls: AtomicUsize,
}

impl FixedScorer {
    pub(super) fn returning(result: PredictionResult) -> Self {
        Self {
            result: Some(result),
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteScorer for FixedScorer {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn predict(&self, _answers: &AnswerSet) -> Result<PredictionResult, RemoteScorerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result
            .clone()
            .ok_or_else(|| RemoteScorerError::Malformed("empty body".to_string()))
    }
}

/// Always answers with a server error.
#[derive(Default)]
pub(super) struct FailingScorer {
    calls: AtomicUsize,
}

impl FailingScorer {
    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteScorer for FailingScorer {
    fn name(&self) -> &str {
        "failing"
    }

    async fn predict(&self, _answers: &AnswerSet) -> Result<PredictionResult, RemoteScorerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(RemoteScorerError::Status {
            status: 500,
            body: "Model prediction failed".to_string(),
        })
    }
}

/// Never answers within any reasonable timeout.
pub(super) struct HangingScorer;

#[async_trait]
impl RemoteScorer for HangingScorer {
    fn name(&self) -> &str {
        "hanging"
    }

    async fn predict(&self, _answers: &AnswerSet) -> Result<PredictionResult, RemoteScorerError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(remote_result())
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
