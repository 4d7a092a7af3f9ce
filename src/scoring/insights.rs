use crate::course::CourseEntry;
use serde::Serialize;

/// Best and worst performing courses for the result card.
///
/// When grades are spread out (`has_variation`), `best` is the lowest
/// grade and `worst` the highest. When they are clustered, `best` is the
/// single highest-impact course and `worst` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub best: CourseEntry,
    pub worst: Option<CourseEntry>,
    pub has_variation: bool,
}

/// Pick insight courses from the active set.
///
/// Only named courses with a numeric grade are considered. Ties go to the
/// earliest course, except that in the clustered case a tie on grade is
/// broken by higher units first.
pub fn select_insights(active: &[&CourseEntry], variation_threshold: f64) -> Option<Insights> {
    let pool: Vec<(&CourseEntry, f64)> = active
        .iter()
        .filter(|e| !e.name.trim().is_empty())
        .filter_map(|e| e.numeric_grade().map(|g| (*e, g)))
        .collect();

    let (first, rest) = pool.split_first()?;

    let min_grade = pool.iter().map(|(_, g)| *g).fold(f64::INFINITY, f64::min);
    let max_grade = pool
        .iter()
        .map(|(_, g)| *g)
        .fold(f64::NEG_INFINITY, f64::max);
    let has_variation = (max_grade - min_grade) > variation_threshold;

    if has_variation {
        let mut best = first;
        let mut worst = first;
        for candidate in rest {
            if candidate.1 < best.1 {
                best = candidate;
            }
            if candidate.1 > worst.1 {
                worst = candidate;
            }
        }
        Some(Insights {
            best: best.0.clone(),
            worst: Some(worst.0.clone()),
            has_variation,
        })
    } else {
        let best = rest.iter().fold(first, |best, current| {
            if current.1 < best.1 || (current.1 == best.1 && current.0.units > best.0.units) {
                current
            } else {
                best
            }
        });
        Some(Insights {
            best: best.0.clone(),
            worst: None,
            has_variation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::{CourseId, Grade};

    fn course(id: u32, name: &str, units: f64, grade: Grade) -> CourseEntry {
        CourseEntry::new(CourseId(id), name, units, Some(grade))
    }

    #[test]
    fn test_clustered_prefers_more_units() {
        let a = course(1, "A", 3.0, Grade::Numeric(2.0));
        let b = course(2, "B", 5.0, Grade::Numeric(2.0));
        let insights = select_insights(&[&a, &b], 0.5).unwrap();
        assert!(!insights.has_variation);
        assert_eq!(insights.best.id, CourseId(2));
        assert!(insights.worst.is_none());
    }

    #[test]
    fn test_clustered_full_tie_keeps_earliest() {
        let a = course(1, "A", 3.0, Grade::Numeric(1.5));
        let b = course(2, "B", 3.0, Grade::Numeric(1.5));
        let insights = select_insights(&[&a, &b], 0.5).unwrap();
        assert_eq!(insights.best.id, CourseId(1));
    }

    #[test]
    fn test_clustered_lower_grade_beats_units() {
        let a = course(1, "A", 5.0, Grade::Numeric(1.75));
        let b = course(2, "B", 1.0, Grade::Numeric(1.5));
        let insights = select_insights(&[&a, &b], 0.5).unwrap();
        assert_eq!(insights.best.id, CourseId(2));
    }

    #[test]
    fn test_spread_exactly_at_threshold_is_clustered() {
        let a = course(1, "A", 3.0, Grade::Numeric(1.5));
        let b = course(2, "B", 3.0, Grade::Numeric(2.0));
        let insights = select_insights(&[&a, &b], 0.5).unwrap();
        assert!(!insights.has_variation);
    }

    #[test]
    fn test_variation_best_and_worst() {
        let a = course(1, "A", 3.0, Grade::Numeric(2.0));
        let b = course(2, "B", 3.0, Grade::Numeric(1.0));
        let c = course(3, "C", 3.0, Grade::Numeric(3.0));
        let insights = select_insights(&[&a, &b, &c], 0.5).unwrap();
        assert!(insights.has_variation);
        assert_eq!(insights.best.id, CourseId(2));
        assert_eq!(insights.worst.unwrap().id, CourseId(3));
    }

    #[test]
    fn test_variation_ties_keep_first_occurrence() {
        let a = course(1, "A", 3.0, Grade::Numeric(1.0));
        let b = course(2, "B", 5.0, Grade::Numeric(1.0));
        let c = course(3, "C", 3.0, Grade::Numeric(3.0));
        let d = course(4, "D", 5.0, Grade::Numeric(3.0));
        let insights = select_insights(&[&a, &b, &c, &d], 0.5).unwrap();
        assert_eq!(insights.best.id, CourseId(1));
        assert_eq!(insights.worst.unwrap().id, CourseId(3));
    }

    #[test]
    fn test_anonymous_and_non_numeric_skipped() {
        let anon = course(1, "  ", 3.0, Grade::Numeric(1.0));
        let pass = course(2, "KAS 1", 3.0, Grade::Satisfactory);
        let named = course(3, "MATH 21", 3.0, Grade::Numeric(2.5));
        let insights = select_insights(&[&anon, &pass, &named], 0.5).unwrap();
        assert_eq!(insights.best.id, CourseId(3));
        assert!(!insights.has_variation);
    }

    #[test]
    fn test_empty_pool_is_none() {
        let anon = course(1, "", 3.0, Grade::Numeric(1.0));
        let pass = course(2, "KAS 1", 3.0, Grade::Satisfactory);
        assert!(select_insights(&[&anon, &pass], 0.5).is_none());
        assert!(select_insights(&[], 0.5).is_none());
    }
}
