use crate::infra::assessment_service;
use clap::Args;
use std::path::PathBuf;
use stress_check::assessment::questions::{
    CURRENT_STRESS, EXERCISE_SESSIONS, RELAXATION, SLEEP_HOURS, WORK_LIFE_BALANCE,
};
use stress_check::assessment::{
    Answer, AnswerSet, Assessment, QuestionKind, ScoreSource, QUESTIONNAIRE,
};
use stress_check::config::AppConfig;
use stress_check::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// JSON file holding {"answers": [{"questionId": 1, "value": 7}, ...]}
    #[arg(long, conflicts_with_all = ["stress", "sleep", "exercise", "balance", "relaxation"])]
    pub(crate) answers_file: Option<PathBuf>,
    /// Current stress level (0-10)
    #[arg(long)]
    pub(crate) stress: Option<f64>,
    /// Hours of sleep last night (0-12)
    #[arg(long)]
    pub(crate) sleep: Option<f64>,
    /// Exercise sessions this week (0-7)
    #[arg(long)]
    pub(crate) exercise: Option<f64>,
    /// Work-life balance (Poor, Fair, Good, Excellent)
    #[arg(long)]
    pub(crate) balance: Option<String>,
    /// Relaxation frequency (Never, Rarely, Sometimes, Often, Daily)
    #[arg(long)]
    pub(crate) relaxation: Option<String>,
    /// Remote scorer URL. Defaults to STRESS_REMOTE_URL.
    #[arg(long)]
    pub(crate) remote_url: Option<String>,
    /// Print the assessment as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl AssessArgs {
    fn answer_set(&self) -> Result<AnswerSet, AppError> {
        if let Some(path) = &self.answers_file {
            let raw = std::fs::read_to_string(path)?;
            return Ok(serde_json::from_str(&raw)?);
        }

        let mut answers = Vec::new();
        let scales = [
            (CURRENT_STRESS, self.stress),
            (SLEEP_HOURS, self.sleep),
            (EXERCISE_SESSIONS, self.exercise),
        ];
        for (question_id, value) in scales {
            if let Some(value) = value {
                answers.push(Answer::numeric(question_id, value));
            }
        }
        let choices = [
            (WORK_LIFE_BALANCE, &self.balance),
            (RELAXATION, &self.relaxation),
        ];
        for (question_id, label) in choices {
            if let Some(label) = label {
                answers.push(Answer::label(question_id, label.clone()));
            }
        }

        Ok(AnswerSet::new(answers))
    }
}

pub(crate) async fn run_assessment(args: AssessArgs) -> Result<(), AppError> {
    let answers = args.answer_set()?;

    let mut config = AppConfig::load()?;
    if let Some(url) = args.remote_url.clone() {
        config.scoring.remote_url = Some(url);
    }

    let service = assessment_service(&config.scoring)?;
    let assessment = service.assess(&answers).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        print!("{}", render_assessment(&assessment));
    }
    Ok(())
}

pub(crate) fn render_assessment(assessment: &Assessment) -> String {
    let mut out = String::new();

    if let Some(advisory) = &assessment.advisory {
        out.push_str(&format!("Assessment incomplete: {advisory}\n"));
        return out;
    }

    let source = match assessment.source {
        ScoreSource::Remote => "remote scorer",
        ScoreSource::Local => "local rules",
        ScoreSource::Unavailable => "unavailable",
    };
    let level = assessment.level.map_or("n/a", |level| level.label());
    out.push_str(&format!(
        "Stress score: {}/100 ({}) via {}\n",
        assessment.result.score, level, source
    ));

    if !assessment.breakdown.is_empty() {
        out.push_str("Contributions:\n");
        for component in &assessment.breakdown {
            out.push_str(&format!(
                "  - Q{}: {:+.1} ({})\n",
                component.question_id, component.contribution, component.notes
            ));
        }
    }

    out.push_str("Recommendations:\n");
    for (index, recommendation) in assessment.result.recommendations.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", index + 1, recommendation));
    }
    out
}

pub(crate) fn run_questions() {
    for question in &QUESTIONNAIRE {
        let answer_hint = match question.kind {
            QuestionKind::Scale { min, max, step } => format!("{min}-{max}, step {step}"),
            QuestionKind::Choice { options } => options.join(" / "),
        };
        println!("{}. {} [{}]", question.id, question.prompt, answer_hint);
    }
}
