use super::config::ScoringPolicy;
use super::error::ScoringError;
use super::exclusion::{is_active, is_excluded};
use super::insights::{select_insights, Insights};
use super::standing::{classify, Standing};
use super::validation::validate;
use crate::course::CourseEntry;
use serde::Serialize;
use tracing::{debug, warn};

/// Raw weighted-average figures over the active courses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    /// Full precision; rounding is left to the display layer.
    pub average: f64,
    pub total_weighted: f64,
    pub total_units: f64,
    pub active_count: usize,
    pub excluded_count: usize,
    /// Rows with no grade chosen yet
    pub pending_count: usize,
}

/// Everything the result card shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub average: f64,
    pub standing: Standing,
    pub total_units: f64,
    pub active_count: usize,
    pub excluded_count: usize,
    pub pending_count: usize,
    pub insights: Option<Insights>,
    /// Fewer credited units than the underload threshold
    pub underloaded: bool,
}

impl ScoreReport {
    /// Honors need an honors-tier standing and either a full load or an
    /// underload permit.
    pub fn honors_eligible(&self, has_permit: bool) -> bool {
        self.standing.is_honor() && (!self.underloaded || has_permit)
    }
}

/// Compute the weighted average of the active courses.
///
/// S and U grades add their units to the denominator but nothing to the
/// numerator. Callers should run [`validate`] first; a zero unit total is
/// still reported as an error rather than producing NaN.
pub fn compute(
    entries: &[CourseEntry],
    policy: &ScoringPolicy,
) -> Result<AggregateResult, ScoringError> {
    let mut total_weighted = 0.0;
    let mut total_units = 0.0;
    let mut active_count = 0;
    let mut excluded_count = 0;
    let mut pending_count = 0;

    for entry in entries {
        if is_excluded(entry, policy) {
            excluded_count += 1;
            continue;
        }
        if entry.grade.is_none() {
            pending_count += 1;
            continue;
        }
        active_count += 1;
        total_units += entry.units;
        if let Some(grade) = entry.numeric_grade() {
            total_weighted += grade * entry.units;
        }
    }

    if total_units == 0.0 {
        warn!(active_count, "active courses total zero units");
        return Err(ScoringError::DivisionByZero);
    }

    Ok(AggregateResult {
        average: total_weighted / total_units,
        total_weighted,
        total_units,
        active_count,
        excluded_count,
        pending_count,
    })
}

/// Validate, compute, classify and pick insights in one pass.
pub fn evaluate(
    entries: &[CourseEntry],
    policy: &ScoringPolicy,
) -> Result<ScoreReport, ScoringError> {
    validate(entries, policy)?;
    let aggregate = compute(entries, policy)?;
    let standing = classify(aggregate.average);

    let active: Vec<&CourseEntry> = entries.iter().filter(|e| is_active(e, policy)).collect();
    let insights = select_insights(&active, policy.variation_threshold());

    debug!(
        average = aggregate.average,
        total_units = aggregate.total_units,
        active = aggregate.active_count,
        excluded = aggregate.excluded_count,
        standing = standing.label(),
        "evaluated course list"
    );

    Ok(ScoreReport {
        average: aggregate.average,
        standing,
        total_units: aggregate.total_units,
        active_count: aggregate.active_count,
        excluded_count: aggregate.excluded_count,
        pending_count: aggregate.pending_count,
        insights,
        underloaded: aggregate.total_units < policy.underload_threshold(),
    })
}
