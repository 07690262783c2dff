use serde::Serialize;

pub const CURRENT_STRESS: u32 = 1;
pub const SLEEP_HOURS: u32 = 2;
pub const EXERCISE_SESSIONS: u32 = 3;
pub const WORK_LIFE_BALANCE: u32 = 4;
pub const RELAXATION: u32 = 5;

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    Scale { min: f64, max: f64, step: f64 },
    Choice { options: &'static [&'static str] },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Question {
    pub id: u32,
    pub prompt: &'static str,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl Question {
    /// Clamps a numeric answer into the declared scale range.
    pub fn clamp(&self, value: f64) -> Option<f64> {
        match self.kind {
            QuestionKind::Scale { min, max, .. } => Some(value.clamp(min, max)),
            QuestionKind::Choice { .. } => None,
        }
    }

    pub fn has_option(&self, label: &str) -> bool {
        match self.kind {
            QuestionKind::Choice { options } => options.contains(&label),
            QuestionKind::Scale { .. } => false,
        }
    }
}

pub const QUESTIONNAIRE: [Question; 5] = [
    Question {
        id: CURRENT_STRESS,
        prompt: "How would you rate your current stress level?",
        kind: QuestionKind::Scale {
            min: 0.0,
            max: 10.0,
            step: 1.0,
        },
    },
    Question {
        id: SLEEP_HOURS,
        prompt: "How many hours of sleep did you get last night?",
        kind: QuestionKind::Scale {
            min: 0.0,
            max: 12.0,
            step: 0.5,
        },
    },
    Question {
        id: EXERCISE_SESSIONS,
        prompt: "How many times did you exercise this week?",
        kind: QuestionKind::Scale {
            min: 0.0,
            max: 7.0,
            step: 1.0,
        },
    },
    Question {
        id: WORK_LIFE_BALANCE,
        prompt: "How would you describe your work-life balance?",
        kind: QuestionKind::Choice {
            options: &["Poor", "Fair", "Good", "Excellent"],
        },
    },
    Question {
        id: RELAXATION,
        prompt: "How often do you practice relaxation techniques?",
        kind: QuestionKind::Choice {
            options: &["Never", "Rarely", "Sometimes", "Often", "Daily"],
        },
    },
];

pub fn question(id: u32) -> Option<&'static Question> {
    QUESTIONNAIRE.iter().find(|question| question.id == id)
}
