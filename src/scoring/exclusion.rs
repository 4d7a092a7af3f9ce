use super::config::ScoringPolicy;
use crate::course::{CourseEntry, Grade};

/// Whether a course is left out of the average entirely.
///
/// A course is excluded when its upper-cased name contains any policy
/// marker (HK, PE, NSTP by default) or when it is marked INC or DRP.
/// S and U grades are not excluded here; they stay active but carry no
/// numeric weight.
pub fn is_excluded(entry: &CourseEntry, policy: &ScoringPolicy) -> bool {
    let name = entry.name.to_uppercase();
    let by_name = policy
        .excluded_markers()
        .iter()
        .any(|marker| !marker.is_empty() && name.contains(marker.as_str()));

    by_name || matches!(entry.grade, Some(Grade::Incomplete) | Some(Grade::Dropped))
}

/// Whether a course counts toward the average: graded and not excluded.
pub fn is_active(entry: &CourseEntry, policy: &ScoringPolicy) -> bool {
    entry.grade.is_some() && !is_excluded(entry, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::CourseId;

    fn course(name: &str, grade: Option<Grade>) -> CourseEntry {
        CourseEntry::new(CourseId(1), name, 3.0, grade)
    }

    #[test]
    fn test_name_markers_case_insensitive() {
        let policy = ScoringPolicy::default();
        assert!(is_excluded(&course("pe101", Some(Grade::Numeric(1.0))), &policy));
        assert!(is_excluded(&course("PE101", Some(Grade::Numeric(1.0))), &policy));
        assert!(is_excluded(&course("Nstp 1", Some(Grade::Numeric(1.0))), &policy));
        assert!(is_excluded(&course("hk 12", Some(Grade::Numeric(1.0))), &policy));
    }

    #[test]
    fn test_substring_match_quirk() {
        // "SPEECH" contains "PE"
        let policy = ScoringPolicy::default();
        assert!(is_excluded(&course("Speech 1", Some(Grade::Numeric(1.0))), &policy));
    }

    #[test]
    fn test_inc_and_drp_excluded() {
        let policy = ScoringPolicy::default();
        assert!(is_excluded(&course("MATH 21", Some(Grade::Incomplete)), &policy));
        assert!(is_excluded(&course("MATH 21", Some(Grade::Dropped)), &policy));
    }

    #[test]
    fn test_s_and_u_not_excluded() {
        let policy = ScoringPolicy::default();
        assert!(!is_excluded(&course("KAS 1", Some(Grade::Satisfactory)), &policy));
        assert!(!is_excluded(&course("KAS 1", Some(Grade::Unsatisfactory)), &policy));
    }

    #[test]
    fn test_blank_name_not_excluded() {
        let policy = ScoringPolicy::default();
        assert!(!is_excluded(&course("", Some(Grade::Numeric(2.0))), &policy));
    }

    #[test]
    fn test_custom_markers() {
        let policy = ScoringPolicy {
            excluded_markers: Some(vec!["rotc".to_string()]),
            ..ScoringPolicy::default()
        };
        assert!(is_excluded(&course("ROTC 1", Some(Grade::Numeric(1.0))), &policy));
        assert!(!is_excluded(&course("PE 1", Some(Grade::Numeric(1.0))), &policy));
    }

    #[test]
    fn test_ungraded_is_not_active() {
        let policy = ScoringPolicy::default();
        assert!(!is_active(&course("MATH 21", None), &policy));
        assert!(is_active(&course("MATH 21", Some(Grade::Satisfactory)), &policy));
    }
}
