pub mod recommendations;
mod rules;

use super::answers::AnswerSet;
use serde::{Deserialize, Serialize};

/// Score and advice returned to the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub score: u8,
    pub recommendations: Vec<String>,
}

impl PredictionResult {
    pub const MAX_SCORE: u8 = 100;

    /// Safe default when no scorer could produce a result.
    pub fn unavailable() -> Self {
        Self {
            score: 0,
            recommendations: Vec::new(),
        }
    }

    pub fn level(&self) -> StressLevel {
        StressLevel::from_score(self.score)
    }
}

/// Banding shown alongside the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressLevel {
    Low,
    Moderate,
    High,
}

impl StressLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=30 => Self::Low,
            31..=60 => Self::Moderate,
            _ => Self::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StressLevel::Low => "Low",
            StressLevel::Moderate => "Moderate",
            StressLevel::High => "High",
        }
    }
}

/// Contribution of one answered question, kept for audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub question_id: u32,
    pub contribution: f64,
    pub notes: String,
}

/// Local rule-table output with the trail that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleEvaluation {
    pub result: PredictionResult,
    pub raw_total: f64,
    pub components: Vec<ScoreComponent>,
}

/// Stateless scorer applying the fixed weight table.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleScorer;

impl RuleScorer {
    pub fn evaluate(&self, answers: &AnswerSet) -> RuleEvaluation {
        let sheet = answers.sheet();
        let (components, raw_total) = rules::score_sheet(&sheet);

        // Raw totals reach 150; clamp before rounding.
        let score = raw_total
            .clamp(0.0, f64::from(PredictionResult::MAX_SCORE))
            .round() as u8;
        let recommendations = recommendations::recommend(score, &sheet);

        RuleEvaluation {
            result: PredictionResult {
                score,
                recommendations,
            },
            raw_total,
            components,
        }
    }

    pub fn score(&self, answers: &AnswerSet) -> PredictionResult {
        self.evaluate(answers).result
    }
}

/// Scores answers with the local rule table.
pub fn score(answers: &AnswerSet) -> PredictionResult {
    RuleScorer.score(answers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_bands_break_after_thirty_and_sixty() {
        assert_eq!(StressLevel::from_score(0), StressLevel::Low);
        assert_eq!(StressLevel::from_score(30), StressLevel::Low);
        assert_eq!(StressLevel::from_score(31), StressLevel::Moderate);
        assert_eq!(StressLevel::from_score(60), StressLevel::Moderate);
        assert_eq!(StressLevel::from_score(61), StressLevel::High);
        assert_eq!(StressLevel::from_score(PredictionResult::MAX_SCORE), StressLevel::High);
    }
}
