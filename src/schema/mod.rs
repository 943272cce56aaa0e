//! The classifier feature schema
//!
//! The feature name set is the wire contract with the trained model: a
//! drifted name silently produces wrong predictions, not a runtime error.
//! This module makes that contract an explicit, ordered schema that a loaded
//! model is checked against before the first prediction.

use std::collections::HashSet;
use std::fmt;

use itertools::Itertools;

use crate::error::{Result, ScreeningError};

/// Value domain of a single classifier feature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureDomain {
    /// 0/1 indicator
    Binary,
    /// Consecutive integer codes from 0 through `max`
    Ordinal {
        /// Largest code in the domain
        max: i32,
    },
    /// Raw integer count within an inclusive range
    Count {
        /// Inclusive lower bound
        min: i32,
        /// Inclusive upper bound
        max: i32,
    },
}

impl FeatureDomain {
    /// Whether a value lies inside this domain
    #[must_use]
    pub fn contains(self, value: i32) -> bool {
        match self {
            Self::Binary => value == 0 || value == 1,
            Self::Ordinal { max } => (0..=max).contains(&value),
            Self::Count { min, max } => (min..=max).contains(&value),
        }
    }
}

impl fmt::Display for FeatureDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary => write!(f, "binary"),
            Self::Ordinal { max } => write!(f, "ordinal 0..={max}"),
            Self::Count { min, max } => write!(f, "count {min}..={max}"),
        }
    }
}

/// A single feature the classifier expects
#[derive(Debug, Clone)]
pub struct FeatureDef {
    /// Feature name, exactly as the model was trained on it
    pub name: &'static str,
    /// Description of the feature
    pub description: &'static str,
    /// Value domain of the feature
    pub domain: FeatureDomain,
}

/// The ordered feature schema the classifier was trained on
///
/// Single source of truth for the feature names; the encoder and every
/// model implementation are validated against it.
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    defs: Vec<FeatureDef>,
}

impl FeatureSchema {
    /// The canonical screening schema, in artifact order
    #[must_use]
    pub fn canonical() -> Self {
        use FeatureDomain::{Binary, Count, Ordinal};
        let defs = vec![
            FeatureDef { name: "Smoking", description: "Smokes", domain: Binary },
            FeatureDef { name: "AlcoholDrinking", description: "Drinks alcohol", domain: Binary },
            FeatureDef { name: "Stroke", description: "History of stroke", domain: Binary },
            FeatureDef { name: "DiffWalking", description: "Difficulty walking", domain: Binary },
            FeatureDef { name: "Sex", description: "Male is 1, Female is 0", domain: Binary },
            FeatureDef { name: "Diabetic", description: "Diabetic", domain: Binary },
            FeatureDef {
                name: "PhysicalActivity",
                description: "Gets regular physical activity",
                domain: Binary,
            },
            FeatureDef {
                name: "SleepTime",
                description: "Nightly sleep hours, copied unmodified",
                domain: Count { min: 2, max: 16 },
            },
            FeatureDef { name: "Asthma", description: "Has asthma", domain: Binary },
            FeatureDef { name: "KidneyDisease", description: "Kidney disease", domain: Binary },
            FeatureDef { name: "SkinCancer", description: "History of skin cancer", domain: Binary },
            FeatureDef {
                name: "BMI_category_Normal",
                description: "BMI category is Normal",
                domain: Binary,
            },
            FeatureDef {
                name: "BMI_category_Overweight",
                description: "BMI category is Overweight",
                domain: Binary,
            },
            FeatureDef {
                name: "BMI_category_Obese",
                description: "BMI category is Obese",
                domain: Binary,
            },
            FeatureDef { name: "Tribe_Ibibio", description: "Tribe is Ibibio", domain: Binary },
            FeatureDef { name: "Tribe_Igbo", description: "Tribe is Igbo", domain: Binary },
            FeatureDef {
                name: "Tribe_Other",
                description: "Tribe is Hausa Fulani or Other",
                domain: Binary,
            },
            FeatureDef { name: "Tribe_Tiv", description: "Tribe is Tiv", domain: Binary },
            FeatureDef { name: "Tribe_Yoruba", description: "Tribe is Yoruba", domain: Binary },
            FeatureDef {
                name: "AgeCategory_encoded",
                description: "Age bucket rank, 18-24 through 80+",
                domain: Ordinal { max: 12 },
            },
            FeatureDef {
                name: "GenHealth_encoded",
                description: "General health rank, Poor through Excellent",
                domain: Ordinal { max: 4 },
            },
            FeatureDef {
                name: "PhysicalHealth_Category_encoded",
                description: "Physical bad-day severity band",
                domain: Ordinal { max: 3 },
            },
            FeatureDef {
                name: "MentalHealth_Category_encoded",
                description: "Mental bad-day severity band",
                domain: Ordinal { max: 3 },
            },
        ];
        Self { defs }
    }

    /// Number of features in the schema
    #[must_use]
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Whether the schema is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Feature definitions in schema order
    #[must_use]
    pub fn defs(&self) -> &[FeatureDef] {
        &self.defs
    }

    /// Feature names in schema order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.defs.iter().map(|def| def.name)
    }

    /// Look up a feature definition by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FeatureDef> {
        self.defs.iter().find(|def| def.name == name)
    }

    /// Whether the schema contains a feature with the given name
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Check a loaded model's reported feature names against this schema
    ///
    /// Comparison is by name set, not position, since models look features
    /// up by name. Both directions are checked: a schema feature the model
    /// does not carry, and a model feature the schema does not know.
    #[must_use]
    pub fn check_model(&self, model_features: &[String]) -> SchemaCompatibilityReport {
        let known: HashSet<&str> = self.names().collect();
        let reported: HashSet<&str> = model_features.iter().map(String::as_str).collect();

        let mut issues = Vec::new();
        for name in self.names() {
            if !reported.contains(name) {
                issues.push(SchemaIssue {
                    feature: name.to_string(),
                    description: format!("schema feature '{name}' missing from model"),
                });
            }
        }
        for name in model_features {
            if !known.contains(name.as_str()) {
                issues.push(SchemaIssue {
                    feature: name.clone(),
                    description: format!("model feature '{name}' not in schema"),
                });
            }
        }

        SchemaCompatibilityReport { compatible: issues.is_empty(), issues }
    }
}

/// Result of checking a model against the feature schema
#[derive(Debug)]
pub struct SchemaCompatibilityReport {
    /// Whether the model matches the schema exactly
    pub compatible: bool,
    /// List of incompatibility issues, if any
    pub issues: Vec<SchemaIssue>,
}

impl SchemaCompatibilityReport {
    /// Convert the report into a hard failure on any incompatibility
    pub fn into_result(self) -> Result<()> {
        if self.compatible {
            Ok(())
        } else {
            let detail = self.issues.iter().map(|issue| issue.description.as_str()).join("; ");
            Err(ScreeningError::SchemaMismatch(detail))
        }
    }
}

/// A single schema compatibility issue
#[derive(Debug)]
pub struct SchemaIssue {
    /// The feature the issue concerns
    pub feature: String,
    /// Description of the incompatibility
    pub description: String,
}
