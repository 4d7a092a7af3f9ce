use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_UNITS: f64 = 20.0;
pub const DEFAULT_UNDERLOAD_THRESHOLD: f64 = 15.0;
pub const DEFAULT_VARIATION_THRESHOLD: f64 = 0.5;
pub const DEFAULT_EXCLUDED_MARKERS: [&str; 3] = ["HK", "PE", "NSTP"];

/// Scoring policy.
///
/// Controls which courses are left out of the average and the bounds the
/// validator enforces. Every field is optional and falls back to the
/// built-in default.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   max_units: 20
///   underload_threshold: 15
///   variation_threshold: 0.5
///   excluded_markers: ["HK", "PE", "NSTP"]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringPolicy {
    /// Upper bound (inclusive) for a course's units; the lower bound is an
    /// exclusive zero.
    #[serde(default)]
    pub max_units: Option<f64>,

    /// Total credited units below which the underload notice applies.
    #[serde(default)]
    pub underload_threshold: Option<f64>,

    /// Grade spread above which insights show best and worst separately.
    #[serde(default)]
    pub variation_threshold: Option<f64>,

    /// Case-insensitive substrings that exclude a course by name.
    /// Matching is substring based, so "SPEECH" matches "PE".
    #[serde(default)]
    pub excluded_markers: Option<Vec<String>>,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            max_units: Some(DEFAULT_MAX_UNITS),
            underload_threshold: Some(DEFAULT_UNDERLOAD_THRESHOLD),
            variation_threshold: Some(DEFAULT_VARIATION_THRESHOLD),
            excluded_markers: Some(
                DEFAULT_EXCLUDED_MARKERS
                    .iter()
                    .map(|m| m.to_string())
                    .collect(),
            ),
        }
    }
}

impl ScoringPolicy {
    pub fn max_units(&self) -> f64 {
        self.max_units.unwrap_or(DEFAULT_MAX_UNITS)
    }

    pub fn underload_threshold(&self) -> f64 {
        self.underload_threshold
            .unwrap_or(DEFAULT_UNDERLOAD_THRESHOLD)
    }

    pub fn variation_threshold(&self) -> f64 {
        self.variation_threshold
            .unwrap_or(DEFAULT_VARIATION_THRESHOLD)
    }

    /// Upper-cased exclusion markers.
    pub fn excluded_markers(&self) -> Vec<String> {
        match &self.excluded_markers {
            Some(markers) => markers.iter().map(|m| m.to_uppercase()).collect(),
            None => DEFAULT_EXCLUDED_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}
