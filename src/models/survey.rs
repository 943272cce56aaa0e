//! Survey response model
//!
//! This module contains the typed record for one completed screening form.
//! A `SurveyResponse` is the boundary between the presentation surface and
//! the encoder: the collector only constructs one after every answer has
//! been validated, so the encoder can assume in-domain values throughout.

use crate::models::types::{AgeBucket, BmiCategory, GeneralHealth, Sex, Tribe, YesNo};

/// Inclusive upper bound for the physical/mental bad-day counts
pub const MAX_HEALTH_DAYS: u8 = 30;
/// Inclusive lower bound for nightly sleep hours
pub const MIN_SLEEP_HOURS: u8 = 2;
/// Inclusive upper bound for nightly sleep hours
pub const MAX_SLEEP_HOURS: u8 = 16;

/// One validated screening submission
///
/// Ephemeral: constructed fresh per interaction, consumed once by the
/// encoder, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyResponse {
    /// Age bucket of the respondent
    pub age: AgeBucket,
    /// Sex of the respondent
    pub sex: Sex,
    /// Tribe of the respondent
    pub tribe: Tribe,
    /// Whether the respondent gets regular physical activity
    pub physical_activity: YesNo,
    /// BMI category
    pub bmi_category: BmiCategory,
    /// Self-reported general health
    pub general_health: GeneralHealth,
    /// Days of poor physical health in the last 30, in [0, 30]
    pub physical_health_days: u8,
    /// Days of poor mental health in the last 30, in [0, 30]
    pub mental_health_days: u8,
    /// Nightly sleep hours, in [2, 16]
    pub sleep_time_hours: u8,
    /// Whether the respondent drinks alcohol
    pub alcohol_drinking: YesNo,
    /// Whether the respondent smokes
    pub smoking: YesNo,
    /// History of skin cancer
    pub skin_cancer: YesNo,
    /// Whether the respondent is diabetic
    pub diabetic: YesNo,
    /// Difficulty walking or climbing stairs
    pub diff_walking: YesNo,
    /// Whether the respondent has asthma
    pub asthma: YesNo,
    /// History of kidney disease
    pub kidney_disease: YesNo,
    /// History of stroke
    pub stroke: YesNo,
}
