use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VsmError};

/// Scale constant K used by `idf[i] = log10(K / freq[i])`.
/// Fixed, not the live document count.
pub const DEFAULT_IDF_SCALE: f64 = 2048.0;

/// Rocchio weight applied to the top document when expanding a query
pub const DEFAULT_FEEDBACK_WEIGHT: f64 = 0.5;

/// What to do with a query term that is not in the vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownTermPolicy {
    /// fail the query with `VsmError::UnknownTerm`
    #[default]
    Reject,
    /// skip the term, the rest of the query still counts
    Drop,
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// K in `log10(K / freq)`
    pub idf_scale: f64,
    /// floor for `freq[i]` before the IDF ratio.
    /// `None` keeps zero frequencies a hard error.
    pub min_frequency: Option<f64>,
    /// weight of the top document in the refined query
    pub feedback_weight: f64,
    pub unknown_terms: UnknownTermPolicy,
    pub max_documents: Option<usize>,
    pub max_vocabulary: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            idf_scale: DEFAULT_IDF_SCALE,
            min_frequency: None,
            feedback_weight: DEFAULT_FEEDBACK_WEIGHT,
            unknown_terms: UnknownTermPolicy::Reject,
            max_documents: None,
            max_vocabulary: None,
        }
    }
}

impl EngineConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.idf_scale.is_finite() || self.idf_scale <= 0.0 {
            return Err(VsmError::Config(format!(
                "idf_scale must be a positive finite number, got {}",
                self.idf_scale
            )));
        }
        if !self.feedback_weight.is_finite() || self.feedback_weight < 0.0 {
            return Err(VsmError::Config(format!(
                "feedback_weight must be a non-negative finite number, got {}",
                self.feedback_weight
            )));
        }
        if let Some(floor) = self.min_frequency {
            if !floor.is_finite() || floor <= 0.0 {
                return Err(VsmError::Config(format!(
                    "min_frequency must be a positive finite number, got {}",
                    floor
                )));
            }
        }
        Ok(())
    }
}
