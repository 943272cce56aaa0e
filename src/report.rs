//! Result presentation
//!
//! Pure formatting of a submission echo and a prediction into the
//! user-facing report text. No computation happens here; the label is taken
//! from the prediction as returned by the classifier. Writing the text to
//! the output surface is the caller's job.

use std::fmt::Write;

use itertools::Itertools;

use crate::classifier::{Prediction, RiskLabel};
use crate::collector::{QUESTIONNAIRE, RawAnswers};
use crate::models::SurveyResponse;

/// Recommendations shown with a high-risk result
pub const HIGH_RISK_ADVICE: &[&str] = &[
    "Please consult a healthcare provider for a proper check-up.",
    "Maintain a healthy diet, reduce salt intake, and exercise regularly.",
    "Monitor your blood pressure frequently.",
];

/// Recommendations shown with a low-risk result
pub const LOW_RISK_ADVICE: &[&str] = &[
    "Keep up with your healthy lifestyle habits!",
    "Get regular health check-ups.",
    "Stay active and eat balanced meals.",
];

/// Format the echoed submission, one labeled line per question
#[must_use]
pub fn input_summary(survey: &SurveyResponse) -> String {
    let answers = survey_answers(survey);
    let body = QUESTIONNAIRE
        .iter()
        .filter_map(|question| {
            answers
                .get(question.field)
                .map(|answer| format!("  {}: {answer}", question.prompt))
        })
        .join("\n");
    format!("Patient Input Data\n{body}\n")
}

/// Format the prediction and its recommendation block
#[must_use]
pub fn render(prediction: &Prediction) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Prediction");
    let _ = writeln!(
        out,
        "  Probability of Hypertension: {:.2}%",
        prediction.probability * 100.0
    );
    let _ = writeln!(out, "  Predicted Class: {}", prediction.label);
    let _ = writeln!(out);

    match prediction.label {
        RiskLabel::HighRisk => {
            let _ = writeln!(out, "High Risk of Hypertension");
        }
        RiskLabel::LowRisk => {
            let _ = writeln!(out, "Low Risk of Hypertension");
        }
    }
    let _ = writeln!(out, "Recommendations:");
    let advice = match prediction.label {
        RiskLabel::HighRisk => HIGH_RISK_ADVICE,
        RiskLabel::LowRisk => LOW_RISK_ADVICE,
    };
    for line in advice {
        let _ = writeln!(out, "  - {line}");
    }
    out
}

fn survey_answers(survey: &SurveyResponse) -> RawAnswers {
    use crate::collector::fields;
    [
        (fields::AGE, survey.age.to_string()),
        (fields::SEX, survey.sex.to_string()),
        (fields::TRIBE, survey.tribe.to_string()),
        (fields::PHYSICAL_ACTIVITY, survey.physical_activity.to_string()),
        (fields::BMI_CATEGORY, survey.bmi_category.to_string()),
        (fields::GEN_HEALTH, survey.general_health.to_string()),
        (fields::PHYSICAL_HEALTH, survey.physical_health_days.to_string()),
        (fields::MENTAL_HEALTH, survey.mental_health_days.to_string()),
        (fields::SLEEP_TIME, survey.sleep_time_hours.to_string()),
        (fields::ALCOHOL_DRINKING, survey.alcohol_drinking.to_string()),
        (fields::SMOKING, survey.smoking.to_string()),
        (fields::SKIN_CANCER, survey.skin_cancer.to_string()),
        (fields::DIABETIC, survey.diabetic.to_string()),
        (fields::DIFF_WALKING, survey.diff_walking.to_string()),
        (fields::ASTHMA, survey.asthma.to_string()),
        (fields::KIDNEY_DISEASE, survey.kidney_disease.to_string()),
        (fields::STROKE, survey.stroke.to_string()),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}
