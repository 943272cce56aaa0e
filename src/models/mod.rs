//! Domain models for the screening form
//!
//! The enum types mirror the fixed choice sets of the questionnaire; the
//! `SurveyResponse` record holds one validated submission.

pub mod survey;
pub mod types;

pub use survey::{MAX_HEALTH_DAYS, MAX_SLEEP_HOURS, MIN_SLEEP_HOURS, SurveyResponse};
pub use types::{
    AgeBucket, BmiCategory, DayBand, GeneralHealth, Sex, Tribe, UnknownChoice, YesNo,
};
