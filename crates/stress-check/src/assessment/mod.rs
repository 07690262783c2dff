//! Stress questionnaire scoring.
//!
//! Answers are validated against the static questionnaire, scored with a fixed
//! weight table, and turned into ordered advice. [`AssessmentService`] asks an
//! optional remote scorer first and falls back to the same rules locally.

pub mod answers;
pub mod questions;
pub mod remote;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use answers::{Answer, AnswerSet, AnswerValue, Response, ResponseSheet};
pub use questions::{question, Question, QuestionKind, QUESTIONNAIRE};
pub use remote::{HttpRemoteScorer, RemoteScorer, RemoteScorerError};
pub use router::assessment_router;
pub use scoring::{
    score, PredictionResult, RuleEvaluation, RuleScorer, ScoreComponent, StressLevel,
};
pub use service::{Assessment, AssessmentService, ScoreSource, ASSESSMENT_UNAVAILABLE};
