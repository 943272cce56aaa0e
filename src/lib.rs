//! A Rust library for hypertension risk screening: collects a fixed
//! health questionnaire, encodes the answers into the feature vector a
//! pre-trained binary classifier expects, and formats the resulting risk
//! label, probability, and recommendations.

pub mod classifier;
pub mod collector;
pub mod config;
pub mod encode;
pub mod error;
pub mod models;
pub mod report;
pub mod schema;

// Re-export the most common types for easier use
// Core types
pub use config::ScreeningConfig;
pub use error::{Result, ScreeningError};
pub use models::SurveyResponse;

// Encoding
pub use encode::{FeatureVector, encode};
pub use schema::{FeatureSchema, SchemaCompatibilityReport, SchemaIssue};

// Collection
pub use collector::{QUESTIONNAIRE, RawAnswers, answers_from_json, collect_interactive, parse_answers};

// Classification
pub use classifier::{LogisticModel, Prediction, RiskLabel, RiskModel, load_model};
