use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use super::answers::AnswerSet;
use super::remote::{validate, HttpRemoteScorer, RemoteScorer, RemoteScorerError};
use super::scoring::{PredictionResult, RuleEvaluation, RuleScorer, ScoreComponent, StressLevel};
use crate::config::ScoringConfig;

/// Advisory surfaced when neither scorer produced a result.
pub const ASSESSMENT_UNAVAILABLE: &str =
    "There was a problem analyzing your responses. Please try again.";

/// Which path produced an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    Remote,
    Local,
    Unavailable,
}

/// Prediction plus the context needed to present it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    #[serde(flatten)]
    pub result: PredictionResult,
    /// Absent when no scorer produced a result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<StressLevel>,
    pub source: ScoreSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub breakdown: Vec<ScoreComponent>,
    pub assessed_at: DateTime<Utc>,
}

impl Assessment {
    fn remote(result: PredictionResult) -> Self {
        Self {
            level: Some(result.level()),
            result,
            source: ScoreSource::Remote,
            advisory: None,
            breakdown: Vec::new(),
            assessed_at: Utc::now(),
        }
    }

    fn local(evaluation: RuleEvaluation) -> Self {
        Self {
            level: Some(evaluation.result.level()),
            result: evaluation.result,
            source: ScoreSource::Local,
            advisory: None,
            breakdown: evaluation.components,
            assessed_at: Utc::now(),
        }
    }

    fn unavailable() -> Self {
        Self {
            result: PredictionResult::unavailable(),
            level: None,
            source: ScoreSource::Unavailable,
            advisory: Some(ASSESSMENT_UNAVAILABLE.to_string()),
            breakdown: Vec::new(),
            assessed_at: Utc::now(),
        }
    }
}

/// Remote-first scoring with the local rule table as fallback.
///
/// Each call is independent: one remote attempt bounded by `timeout`, then,
/// only once that attempt has failed, the local rules. No retries, no caching.
#[derive(Clone)]
pub struct AssessmentService {
    remote: Option<Arc<dyn RemoteScorer>>,
    scorer: RuleScorer,
    timeout: Duration,
    local_fallback: bool,
}

impl AssessmentService {
    pub fn new(remote: Option<Arc<dyn RemoteScorer>>, config: &ScoringConfig) -> Self {
        Self {
            remote,
            scorer: RuleScorer,
            timeout: config.remote_timeout,
            local_fallback: config.local_fallback,
        }
    }

    pub fn local_only() -> Self {
        Self::new(None, &ScoringConfig::default())
    }

    /// Builds the HTTP remote scorer when a URL is configured.
    pub fn from_config(config: &ScoringConfig) -> Result<Self, RemoteScorerError> {
        let remote = match &config.remote_url {
            Some(url) => {
                let scorer = HttpRemoteScorer::new(url.clone(), config.remote_timeout)?;
                Some(Arc::new(scorer) as Arc<dyn RemoteScorer>)
            }
            None => None,
        };
        Ok(Self::new(remote, config))
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    pub async fn predict(&self, answers: &AnswerSet) -> PredictionResult {
        self.assess(answers).await.result
    }

    pub async fn assess(&self, answers: &AnswerSet) -> Assessment {
        match self.attempt_remote(answers).await {
            Ok(result) => {
                info!(score = result.score, "assessment scored remotely");
                Assessment::remote(result)
            }
            Err(RemoteScorerError::NotConfigured) => {
                debug!("no remote scorer configured; scoring locally");
                Assessment::local(self.score_locally(answers))
            }
            Err(reason) if self.local_fallback => {
                warn!(error = %reason, "remote scorer failed; falling back to local rules");
                let assessment = Assessment::local(self.score_locally(answers));
                info!(score = assessment.result.score, "assessment scored by fallback");
                assessment
            }
            Err(reason) => {
                error!(error = %reason, "remote scorer failed and local fallback is disabled");
                Assessment::unavailable()
            }
        }
    }

    pub fn score_locally(&self, answers: &AnswerSet) -> RuleEvaluation {
        self.scorer.evaluate(answers)
    }

    async fn attempt_remote(
        &self,
        answers: &AnswerSet,
    ) -> Result<PredictionResult, RemoteScorerError> {
        let remote = self.remote.as_ref().ok_or(RemoteScorerError::NotConfigured)?;
        debug!(scorer = remote.name(), answers = answers.len(), "requesting remote score");

        match tokio::time::timeout(self.timeout, remote.predict(answers)).await {
            Ok(outcome) => outcome.and_then(validate),
            Err(_) => Err(RemoteScorerError::Timeout(self.timeout)),
        }
    }
}
