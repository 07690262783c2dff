use super::super::answers::{Response, ResponseSheet};
use super::super::questions::{
    CURRENT_STRESS, EXERCISE_SESSIONS, RELAXATION, SLEEP_HOURS, WORK_LIFE_BALANCE,
};
use super::ScoreComponent;

const BALANCE_WEIGHTS: [(&str, f64); 4] = [
    ("Poor", 20.0),
    ("Fair", 15.0),
    ("Good", 7.0),
    ("Excellent", 0.0),
];
const UNKNOWN_BALANCE_WEIGHT: f64 = 10.0;

const RELAXATION_WEIGHTS: [(&str, f64); 5] = [
    ("Never", 15.0),
    ("Rarely", 10.0),
    ("Sometimes", 7.0),
    ("Often", 3.0),
    ("Daily", 0.0),
];
const UNKNOWN_RELAXATION_WEIGHT: f64 = 7.0;

pub(crate) fn score_sheet(sheet: &ResponseSheet) -> (Vec<ScoreComponent>, f64) {
    let mut components = Vec::new();
    let mut raw_total = 0.0;

    for (question_id, response) in sheet.iter() {
        let Some(component) = contribution(question_id, response) else {
            continue;
        };
        raw_total += component.contribution;
        components.push(component);
    }

    (components, raw_total)
}

fn contribution(question_id: u32, response: &Response) -> Option<ScoreComponent> {
    let (contribution, notes) = match (question_id, response) {
        (_, Response::Mismatched) => (0.0, "answer type does not fit the question".to_string()),
        (CURRENT_STRESS, Response::Scale(rating)) => {
            (rating * 5.0, format!("self-rated stress {rating} of 10"))
        }
        (SLEEP_HOURS, Response::Scale(hours)) => (
            (40.0 - hours * 5.0).max(0.0),
            format!("{hours} hours of sleep"),
        ),
        (EXERCISE_SESSIONS, Response::Scale(sessions)) => (
            (25.0 - sessions * 3.5).max(0.0),
            format!("{sessions} exercise sessions this week"),
        ),
        (WORK_LIFE_BALANCE, Response::Choice(label)) => (
            lookup(&BALANCE_WEIGHTS, label, UNKNOWN_BALANCE_WEIGHT),
            format!("work-life balance rated {label}"),
        ),
        (RELAXATION, Response::Choice(label)) => (
            lookup(&RELAXATION_WEIGHTS, label, UNKNOWN_RELAXATION_WEIGHT),
            format!("relaxes {label}"),
        ),
        _ => return None,
    };

    Some(ScoreComponent {
        question_id,
        contribution,
        notes,
    })
}

fn lookup(table: &[(&str, f64)], label: &str, unknown: f64) -> f64 {
    table
        .iter()
        .find(|(option, _)| *option == label)
        .map(|(_, weight)| *weight)
        .unwrap_or(unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(question_id: u32, response: Response) -> f64 {
        contribution(question_id, &response)
            .map(|component| component.contribution)
            .expect("known question contributes")
    }

    #[test]
    fn scale_formulas_match_table() {
        assert_eq!(single(CURRENT_STRESS, Response::Scale(10.0)), 50.0);
        assert_eq!(single(SLEEP_HOURS, Response::Scale(4.0)), 20.0);
        assert_eq!(single(SLEEP_HOURS, Response::Scale(10.0)), 0.0);
        assert_eq!(single(EXERCISE_SESSIONS, Response::Scale(2.0)), 18.0);
        assert_eq!(single(EXERCISE_SESSIONS, Response::Scale(7.0)), 0.0);
    }

    #[test]
    fn choice_labels_fall_back_to_unknown_weights() {
        assert_eq!(single(WORK_LIFE_BALANCE, Response::Choice("Excellent".into())), 0.0);
        assert_eq!(single(WORK_LIFE_BALANCE, Response::Choice("Okay".into())), 10.0);
        assert_eq!(single(RELAXATION, Response::Choice("Daily".into())), 0.0);
        assert_eq!(single(RELAXATION, Response::Choice("Weekly".into())), 7.0);
    }

    #[test]
    fn mismatched_answers_contribute_nothing() {
        assert_eq!(single(CURRENT_STRESS, Response::Mismatched), 0.0);
        assert_eq!(single(RELAXATION, Response::Mismatched), 0.0);
    }
}
