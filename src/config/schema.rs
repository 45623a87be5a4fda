use serde::{Deserialize, Serialize};

use crate::grading::{GradePolicy, Weighting, WeightingError};

/// Top-level configuration file.
///
/// Example YAML:
/// ```yaml
/// weighting:
///   midterm1: 20
///   midterm2: 30
///   final_exam: 50
/// color: false
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Starting grade weighting, as raw percentages (default: 25/25/50)
    #[serde(default)]
    pub weighting: Option<WeightingConfig>,

    /// Force colors on or off (default: on when stdout is a terminal)
    #[serde(default)]
    pub color: Option<bool>,
}

/// Raw weighting values. Normalized to fractions when the policy is built,
/// so `{1, 1, 2}` and `{25, 25, 50}` are equivalent.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WeightingConfig {
    pub midterm1: f64,
    pub midterm2: f64,
    pub final_exam: f64,
}

impl Default for WeightingConfig {
    fn default() -> Self {
        Self {
            midterm1: 25.0,
            midterm2: 25.0,
            final_exam: 50.0,
        }
    }
}

impl Config {
    /// Build the grading policy the session starts with
    pub fn grade_policy(&self) -> Result<GradePolicy, WeightingError> {
        match &self.weighting {
            Some(w) => Ok(GradePolicy::new(Weighting::normalized(
                w.midterm1,
                w.midterm2,
                w.final_exam,
            )?)),
            None => Ok(GradePolicy::default()),
        }
    }
}
