use std::fmt;

// ---------------------------------------------------------------------------
// Single-record score prediction
// ---------------------------------------------------------------------------

/// Final scores at or above this classify as Pass.
pub const PASS_THRESHOLD: f64 = 50.0;

const MIN_ATTENDANCE_PCT: f64 = 75.0;
const MIN_STUDY_HOURS_WEEK: f64 = 6.0;
const MIN_SUBJECT_AVG: f64 = 60.0;

const NO_ALERTS: &str = "No alerts. Keep going!";

/// The seven user-entered fields, independent of any loaded table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionInput {
    pub math: f64,
    pub science: f64,
    pub english: f64,
    pub attendance_pct: f64,
    pub study_hours_week: f64,
    pub class_tests_avg: f64,
    pub previous_term_avg: f64,
}

impl Default for PredictionInput {
    fn default() -> Self {
        Self {
            math: 70.0,
            science: 70.0,
            english: 70.0,
            attendance_pct: 80.0,
            study_hours_week: 8.0,
            class_tests_avg: 70.0,
            previous_term_avg: 68.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassFail {
    Pass,
    Fail,
}

impl fmt::Display for PassFail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassFail::Pass => write!(f, "Pass"),
            PassFail::Fail => write!(f, "Fail"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub subject_avg: f64,
    pub final_score: f64,
    pub pass_fail: PassFail,
    /// Advisory messages in rule order; carries the placeholder when no
    /// rule fires, so it is never empty.
    pub alerts: Vec<String>,
}

impl PredictionResult {
    /// True when the only message is the no-alert placeholder.
    pub fn is_clear(&self) -> bool {
        self.alerts.len() == 1 && self.alerts[0] == NO_ALERTS
    }
}

/// Heuristic expected-score rule: subject average blended with attendance,
/// class tests, and the previous term. Pure — same input, same output.
pub fn predict(input: &PredictionInput) -> PredictionResult {
    let subject_avg = (input.math + input.science + input.english) / 3.0;
    let final_score = (subject_avg
        + input.attendance_pct / 2.0
        + input.class_tests_avg / 2.0
        + input.previous_term_avg)
        / 3.0;
    let pass_fail = if final_score >= PASS_THRESHOLD {
        PassFail::Pass
    } else {
        PassFail::Fail
    };

    let mut alerts = Vec::new();
    if input.attendance_pct < MIN_ATTENDANCE_PCT {
        alerts.push("Low attendance: High risk of failure.".to_string());
    }
    if input.study_hours_week < MIN_STUDY_HOURS_WEEK {
        alerts.push("Study hours are low. Try +2 hrs/week.".to_string());
    }
    if subject_avg < MIN_SUBJECT_AVG {
        alerts.push("Weak subject scores. Practice more.".to_string());
    }
    if alerts.is_empty() {
        alerts.push(NO_ALERTS.to_string());
    }

    PredictionResult {
        subject_avg,
        final_score,
        pass_fail,
        alerts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example_matches_hand_computation() {
        // subject_avg = 70, final = (70 + 40 + 35 + 68) / 3 = 71.0
        let result = predict(&PredictionInput::default());
        assert!((result.subject_avg - 70.0).abs() < 1e-9);
        assert!((result.final_score - 71.0).abs() < 1e-9);
        assert_eq!(result.pass_fail, PassFail::Pass);
    }

    #[test]
    fn threshold_is_inclusive() {
        // 50 + 40/2 + 40/2 + 60 = 150, /3 = exactly 50.0
        let input = PredictionInput {
            math: 50.0,
            science: 50.0,
            english: 50.0,
            attendance_pct: 40.0,
            study_hours_week: 10.0,
            class_tests_avg: 40.0,
            previous_term_avg: 60.0,
        };
        let result = predict(&input);
        assert_eq!(result.final_score, 50.0);
        assert_eq!(result.pass_fail, PassFail::Pass);
    }

    #[test]
    fn just_below_threshold_fails() {
        let input = PredictionInput {
            math: 50.0,
            science: 50.0,
            english: 50.0,
            attendance_pct: 40.0,
            study_hours_week: 10.0,
            class_tests_avg: 40.0,
            previous_term_avg: 59.9,
        };
        assert_eq!(predict(&input).pass_fail, PassFail::Fail);
    }

    #[test]
    fn healthy_input_gets_the_placeholder_only() {
        let result = predict(&PredictionInput::default());
        assert_eq!(result.alerts, vec![NO_ALERTS.to_string()]);
        assert!(result.is_clear());
    }

    #[test]
    fn each_alert_fires_independently() {
        let low_attendance = PredictionInput {
            attendance_pct: 74.9,
            ..Default::default()
        };
        assert_eq!(
            predict(&low_attendance).alerts,
            vec!["Low attendance: High risk of failure.".to_string()]
        );

        let low_study = PredictionInput {
            study_hours_week: 5.0,
            ..Default::default()
        };
        assert_eq!(
            predict(&low_study).alerts,
            vec!["Study hours are low. Try +2 hrs/week.".to_string()]
        );

        let weak_subjects = PredictionInput {
            math: 50.0,
            science: 55.0,
            english: 50.0,
            ..Default::default()
        };
        assert_eq!(
            predict(&weak_subjects).alerts,
            vec!["Weak subject scores. Practice more.".to_string()]
        );
    }

    #[test]
    fn all_alerts_keep_rule_order() {
        let input = PredictionInput {
            math: 30.0,
            science: 30.0,
            english: 30.0,
            attendance_pct: 50.0,
            study_hours_week: 2.0,
            class_tests_avg: 30.0,
            previous_term_avg: 30.0,
        };
        let result = predict(&input);
        assert_eq!(result.pass_fail, PassFail::Fail);
        assert_eq!(
            result.alerts,
            vec![
                "Low attendance: High risk of failure.".to_string(),
                "Study hours are low. Try +2 hrs/week.".to_string(),
                "Weak subject scores. Practice more.".to_string(),
            ]
        );
    }

    #[test]
    fn predict_is_pure() {
        let input = PredictionInput {
            math: 61.2,
            science: 58.4,
            english: 72.9,
            attendance_pct: 77.0,
            study_hours_week: 6.5,
            class_tests_avg: 64.0,
            previous_term_avg: 59.5,
        };
        assert_eq!(predict(&input), predict(&input));
    }
}
