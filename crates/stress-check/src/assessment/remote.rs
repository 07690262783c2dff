use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::answers::AnswerSet;
use super::scoring::PredictionResult;

/// Out-of-process scorer consulted before the local rule table.
#[async_trait]
pub trait RemoteScorer: Send + Sync {
    fn name(&self) -> &str;

    async fn predict(&self, answers: &AnswerSet) -> Result<PredictionResult, RemoteScorerError>;
}

/// Reasons a remote attempt is abandoned in favor of the fallback.
#[derive(Debug, thiserror::Error)]
pub enum RemoteScorerError {
    #[error("remote scorer not configured")]
    NotConfigured,
    #[error("remote scorer unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),
    #[error("remote scorer returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("remote scorer returned a malformed result: {0}")]
    Malformed(String),
    #[error("remote scorer did not answer within {0:?}")]
    Timeout(Duration),
}

/// Checks the result shape a remote scorer must honor.
pub fn validate(result: PredictionResult) -> Result<PredictionResult, RemoteScorerError> {
    if result.score > PredictionResult::MAX_SCORE {
        return Err(RemoteScorerError::Malformed(format!(
            "score {} outside 0-{}",
            result.score,
            PredictionResult::MAX_SCORE
        )));
    }
    if result.recommendations.is_empty() {
        return Err(RemoteScorerError::Malformed(
            "no recommendations returned".to_string(),
        ));
    }
    Ok(result)
}

/// JSON-over-HTTP scorer speaking the `/api/predict-stress` contract.
#[derive(Clone)]
pub struct HttpRemoteScorer {
    client: Client,
    endpoint: String,
}

impl HttpRemoteScorer {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, RemoteScorerError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl RemoteScorer for HttpRemoteScorer {
    fn name(&self) -> &str {
        &self.endpoint
    }

    async fn predict(&self, answers: &AnswerSet) -> Result<PredictionResult, RemoteScorerError> {
        let response = self.client.post(&self.endpoint).json(answers).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteScorerError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        let result: PredictionResult = serde_json::from_slice(&body)
            .map_err(|err| RemoteScorerError::Malformed(err.to_string()))?;

        debug!(endpoint = %self.endpoint, score = result.score, "remote scorer answered");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_scores_above_range() {
        let result = PredictionResult {
            score: 101,
            recommendations: vec!["rest".to_string()],
        };
        assert!(matches!(
            validate(result),
            Err(RemoteScorerError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_empty_recommendations() {
        let result = PredictionResult {
            score: 40,
            recommendations: Vec::new(),
        };
        assert!(matches!(
            validate(result),
            Err(RemoteScorerError::Malformed(_))
        ));
    }

    #[test]
    fn passes_well_formed_results_through() {
        let result = PredictionResult {
            score: 100,
            recommendations: vec!["rest".to_string()],
        };
        assert_eq!(validate(result.clone()).expect("valid"), result);
    }
}
