use super::super::answers::ResponseSheet;
use super::super::questions::{EXERCISE_SESSIONS, RELAXATION, SLEEP_HOURS, WORK_LIFE_BALANCE};

pub const BREATHING: &str = "Practice deep breathing for 5 minutes each day to activate your parasympathetic nervous system.";
pub const PROFESSIONAL_SUPPORT: &str = "Your stress levels are high. Consider talking to a mental health professional for personalized support.";
pub const EXERCISE: &str = "Regular physical activity helps reduce stress. Aim for at least 3 days of exercise per week, even if it's just a 30-minute walk.";
pub const BOUNDARIES: &str = "Improve your work-life balance by setting boundaries. Consider scheduling dedicated time for relaxation and non-work activities.";
pub const RELAXATION_TECHNIQUES: &str = "Start incorporating relaxation techniques into your routine. Try meditation, progressive muscle relaxation, or guided imagery for 10 minutes daily.";

const HIGH_STRESS_THRESHOLD: u8 = 60;
const RECOMMENDED_SLEEP_HOURS: f64 = 7.0;
const RECOMMENDED_EXERCISE_SESSIONS: f64 = 3.0;

pub fn sleep_advice(hours: f64) -> String {
    format!(
        "You're getting {hours} hours of sleep. Try to increase your sleep to 7-8 hours per night for better stress management."
    )
}

/// Baseline advice first, then each triggered rule in question order.
pub(crate) fn recommend(score: u8, sheet: &ResponseSheet) -> Vec<String> {
    let mut recommendations = vec![BREATHING.to_string()];

    if score > HIGH_STRESS_THRESHOLD {
        recommendations.push(PROFESSIONAL_SUPPORT.to_string());
    }

    if let Some(hours) = sheet.scale(SLEEP_HOURS) {
        if hours < RECOMMENDED_SLEEP_HOURS {
            recommendations.push(sleep_advice(hours));
        }
    }

    if let Some(sessions) = sheet.scale(EXERCISE_SESSIONS) {
        if sessions < RECOMMENDED_EXERCISE_SESSIONS {
            recommendations.push(EXERCISE.to_string());
        }
    }

    if matches!(sheet.choice(WORK_LIFE_BALANCE), Some("Poor" | "Fair")) {
        recommendations.push(BOUNDARIES.to_string());
    }

    if matches!(sheet.choice(RELAXATION), Some("Never" | "Rarely")) {
        recommendations.push(RELAXATION_TECHNIQUES.to_string());
    }

    recommendations
}
