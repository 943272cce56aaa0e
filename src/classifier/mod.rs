//! Risk classification
//!
//! The trained classifier is an external capability behind the [`RiskModel`]
//! trait: stateless, reentrant, one prediction per call. The concrete
//! implementation here scores a logistic-regression artifact loaded from a
//! JSON file at process start. Training and evaluation live elsewhere; this
//! module only consumes the serialized result.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ScreeningConfig;
use crate::encode::FeatureVector;
use crate::error::{Result, ScreeningError};
use crate::schema::FeatureSchema;

/// Binary risk label for a screening prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLabel {
    /// The positive class
    HighRisk,
    /// The negative class
    LowRisk,
}

impl RiskLabel {
    /// Label as shown to the user
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HighRisk => "High Risk",
            Self::LowRisk => "Low Risk",
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one encoded submission
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Predicted risk label
    pub label: RiskLabel,
    /// Probability of the high-risk class, in [0, 1]
    pub probability: f64,
}

/// A trained binary risk classifier
///
/// Implementations look feature values up by schema name, never by
/// position. Calls are side-effect-free, so a loaded model may be shared
/// across interactions.
pub trait RiskModel {
    /// Feature names this model was trained on
    fn feature_names(&self) -> Vec<String>;

    /// Probability of the high-risk class for an encoded submission
    fn predict_probability(&self, features: &FeatureVector) -> Result<f64>;

    /// Classify an encoded submission
    fn predict(&self, features: &FeatureVector) -> Result<Prediction>;
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Logistic-regression model deserialized from a JSON artifact
///
/// The artifact carries an intercept, per-feature coefficients keyed by
/// schema feature name, and the decision threshold for the high-risk label.
/// The format is otherwise opaque and unversioned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    /// Intercept term
    pub intercept: f64,
    /// Coefficients keyed by feature name
    pub weights: BTreeMap<String, f64>,
    /// Probability at or above which the label is high risk
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    0.5
}

impl LogisticModel {
    /// Load a model artifact from disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            ScreeningError::ClassifierUnavailable(format!(
                "cannot read model artifact {}: {e}",
                path.display()
            ))
        })?;
        let model: Self = serde_json::from_str(&text).map_err(|e| {
            ScreeningError::ClassifierUnavailable(format!(
                "cannot parse model artifact {}: {e}",
                path.display()
            ))
        })?;
        log::info!(
            "loaded model artifact {} ({} features, threshold {})",
            path.display(),
            model.weights.len(),
            model.threshold
        );
        Ok(model)
    }

    fn score(&self, features: &FeatureVector) -> Result<f64> {
        let mut z = self.intercept;
        for (name, weight) in &self.weights {
            let value = features.get(name).ok_or_else(|| {
                ScreeningError::SchemaMismatch(format!(
                    "model weight for unknown feature '{name}'"
                ))
            })?;
            z += weight * value;
        }
        Ok(sigmoid(z))
    }
}

impl RiskModel for LogisticModel {
    fn feature_names(&self) -> Vec<String> {
        self.weights.keys().cloned().collect()
    }

    fn predict_probability(&self, features: &FeatureVector) -> Result<f64> {
        self.score(features)
    }

    fn predict(&self, features: &FeatureVector) -> Result<Prediction> {
        let probability = self.score(features)?;
        let label = if probability >= self.threshold {
            RiskLabel::HighRisk
        } else {
            RiskLabel::LowRisk
        };
        Ok(Prediction { label, probability })
    }
}

/// Load the configured model artifact and check it against the schema
///
/// The schema check runs before the first prediction so a drifted artifact
/// fails fast instead of silently scoring wrong features. With
/// `fail_on_schema_mismatch` off the issues are logged and the model is
/// returned anyway.
pub fn load_model(config: &ScreeningConfig) -> Result<LogisticModel> {
    let model = LogisticModel::from_path(&config.model_path)?;

    if config.validate_schema {
        let report = FeatureSchema::canonical().check_model(&model.feature_names());
        if !report.compatible {
            for issue in &report.issues {
                log::warn!("schema issue: {}", issue.description);
            }
            if config.fail_on_schema_mismatch {
                return report.into_result().map(|()| model);
            }
        }
    }

    Ok(model)
}
