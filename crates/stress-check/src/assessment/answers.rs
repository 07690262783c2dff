use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::questions::{question, QuestionKind};

/// Raw answer payload as submitted by the questionnaire.
///
/// Anything that is neither a number nor a string lands in `Other` and is
/// scored as a mismatch instead of failing the whole batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Numeric(f64),
    Label(String),
    Other(serde_json::Value),
}

impl Default for AnswerValue {
    fn default() -> Self {
        Self::Other(serde_json::Value::Null)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: u32,
    #[serde(default)]
    pub value: AnswerValue,
}

impl Answer {
    pub fn numeric(question_id: u32, value: f64) -> Self {
        Self {
            question_id,
            value: AnswerValue::Numeric(value),
        }
    }

    pub fn label(question_id: u32, value: impl Into<String>) -> Self {
        Self {
            question_id,
            value: AnswerValue::Label(value.into()),
        }
    }
}

/// Complete batch of answers, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerSet {
    pub answers: Vec<Answer>,
}

impl AnswerSet {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self { answers }
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn sheet(&self) -> ResponseSheet {
        ResponseSheet::from_answers(&self.answers)
    }
}

impl FromIterator<Answer> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// An answer checked against the kind of the question it references.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Numeric answer, already clamped into the scale range.
    Scale(f64),
    Choice(String),
    /// Value type does not fit the question kind; contributes nothing.
    Mismatched,
}

/// Validated answers keyed by question id. Later answers replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseSheet {
    responses: BTreeMap<u32, Response>,
}

impl ResponseSheet {
    pub fn from_answers(answers: &[Answer]) -> Self {
        let mut responses = BTreeMap::new();

        for answer in answers {
            let Some(question) = question(answer.question_id) else {
                debug!(
                    question_id = answer.question_id,
                    "ignoring answer to unknown question"
                );
                continue;
            };

            let response = match &answer.value {
                AnswerValue::Numeric(value) if value.is_finite() => {
                    question.clamp(*value).map(Response::Scale)
                }
                AnswerValue::Label(label) if matches!(question.kind, QuestionKind::Choice { .. }) => {
                    if !question.has_option(label) {
                        debug!(
                            question_id = answer.question_id,
                            label = %label,
                            "label is not one of the question options"
                        );
                    }
                    Some(Response::Choice(label.clone()))
                }
                _ => None,
            };

            let response = response.unwrap_or_else(|| {
                debug!(
                    question_id = answer.question_id,
                    value = ?answer.value,
                    "answer type does not match question kind"
                );
                Response::Mismatched
            });

            responses.insert(answer.question_id, response);
        }

        Self { responses }
    }

    pub fn get(&self, question_id: u32) -> Option<&Response> {
        self.responses.get(&question_id)
    }

    pub fn scale(&self, question_id: u32) -> Option<f64> {
        match self.responses.get(&question_id) {
            Some(Response::Scale(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn choice(&self, question_id: u32) -> Option<&str> {
        match self.responses.get(&question_id) {
            Some(Response::Choice(label)) => Some(label.as_str()),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &Response)> {
        self.responses.iter().map(|(id, response)| (*id, response))
    }
}
