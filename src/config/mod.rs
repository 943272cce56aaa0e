//! Configuration for a screening session.

use std::path::PathBuf;

/// Configuration for a screening session
#[derive(Debug, Clone)]
pub struct ScreeningConfig {
    /// Path to the serialized model artifact
    pub model_path: PathBuf,
    /// Whether to check the model's features against the schema at startup
    pub validate_schema: bool,
    /// Whether a schema mismatch aborts startup
    pub fail_on_schema_mismatch: bool,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("hypertension_model.json"),
            validate_schema: true,
            fail_on_schema_mismatch: true,
        }
    }
}
