use super::config::ScoringPolicy;
use super::error::ScoringError;
use super::exclusion::is_active;
use crate::course::CourseEntry;

pub const MIN_GRADE: f64 = 1.0;
pub const MAX_GRADE: f64 = 5.0;

pub(crate) fn in_grade_range(value: f64) -> bool {
    (MIN_GRADE..=MAX_GRADE).contains(&value)
}

/// Check a course list before scoring. Stops at the first problem found.
///
/// Only active courses (graded, not excluded) are inspected: blank
/// placeholder rows and excluded courses never fail validation.
pub fn validate(entries: &[CourseEntry], policy: &ScoringPolicy) -> Result<(), ScoringError> {
    let academic: Vec<&CourseEntry> = entries.iter().filter(|e| is_active(e, policy)).collect();

    let has_numeric = academic
        .iter()
        .filter_map(|e| e.numeric_grade())
        .any(in_grade_range);
    if !has_numeric {
        return Err(ScoringError::NoNumericGrade);
    }

    if let Some(entry) = academic
        .iter()
        .find(|e| e.numeric_grade().is_some_and(|g| !in_grade_range(g)))
    {
        return Err(ScoringError::InvalidGrade(entry.label()));
    }

    let max_units = policy.max_units();
    // Written as a negated range check so NaN units fail too.
    if let Some(entry) = academic
        .iter()
        .find(|e| !(e.units > 0.0 && e.units <= max_units))
    {
        return Err(ScoringError::InvalidUnits {
            label: entry.label(),
            max_units,
        });
    }

    Ok(())
}

/// Validate the scoring policy at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_policy(policy: &ScoringPolicy) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(max) = policy.max_units {
        if !max.is_finite() || max <= 0.0 {
            errors.push(format!(
                "scoring.max_units: must be a positive number, got {}",
                max
            ));
        }
    }

    if let Some(threshold) = policy.underload_threshold {
        if !threshold.is_finite() || threshold < 0.0 {
            errors.push(format!(
                "scoring.underload_threshold: must be non-negative, got {}",
                threshold
            ));
        }
    }

    if let Some(threshold) = policy.variation_threshold {
        if !threshold.is_finite() || threshold < 0.0 {
            errors.push(format!(
                "scoring.variation_threshold: must be non-negative, got {}",
                threshold
            ));
        }
    }

    if let Some(ref markers) = policy.excluded_markers {
        for (i, marker) in markers.iter().enumerate() {
            if marker.trim().is_empty() {
                errors.push(format!(
                    "scoring.excluded_markers[{}]: must not be blank",
                    i
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
