use serde::{Deserialize, Serialize};
use std::fmt;

/// Academic standing tier derived from the weighted average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Standing {
    UniversityScholar,
    CollegeScholar,
    HonorRoll,
    GoodStanding,
    NeedsImprovement,
}

impl Standing {
    /// All tiers, best first.
    pub const ALL: [Standing; 5] = [
        Standing::UniversityScholar,
        Standing::CollegeScholar,
        Standing::HonorRoll,
        Standing::GoodStanding,
        Standing::NeedsImprovement,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Standing::UniversityScholar => "University Scholar",
            Standing::CollegeScholar => "College Scholar",
            Standing::HonorRoll => "Honor Roll",
            Standing::GoodStanding => "Good Standing",
            Standing::NeedsImprovement => "Needs Improvement",
        }
    }

    /// Human-readable band for the standings table.
    pub fn band(&self) -> &'static str {
        match self {
            Standing::UniversityScholar => "<= 1.45",
            Standing::CollegeScholar => "> 1.45 & <= 1.75",
            Standing::HonorRoll => "> 1.75 & <= 2.00",
            Standing::GoodStanding => "> 2.00 & <= 3.00",
            Standing::NeedsImprovement => "> 3.00",
        }
    }

    /// Tiers that count as academic honors.
    pub fn is_honor(&self) -> bool {
        matches!(
            self,
            Standing::UniversityScholar | Standing::CollegeScholar | Standing::HonorRoll
        )
    }
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map an average onto its standing. Boundary values belong to the better
/// tier. Total over all inputs; NaN falls through to Needs Improvement.
pub fn classify(average: f64) -> Standing {
    match average {
        a if a <= 1.45 => Standing::UniversityScholar,
        a if a <= 1.75 => Standing::CollegeScholar,
        a if a <= 2.00 => Standing::HonorRoll,
        a if a <= 3.00 => Standing::GoodStanding,
        _ => Standing::NeedsImprovement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(1.00), Standing::UniversityScholar);
        assert_eq!(classify(1.45), Standing::UniversityScholar);
        assert_eq!(classify(1.4501), Standing::CollegeScholar);
        assert_eq!(classify(1.75), Standing::CollegeScholar);
        assert_eq!(classify(1.7501), Standing::HonorRoll);
        assert_eq!(classify(2.00), Standing::HonorRoll);
        assert_eq!(classify(2.0001), Standing::GoodStanding);
        assert_eq!(classify(3.00), Standing::GoodStanding);
        assert_eq!(classify(3.0001), Standing::NeedsImprovement);
        assert_eq!(classify(5.00), Standing::NeedsImprovement);
    }

    #[test]
    fn test_classify_outside_scale() {
        assert_eq!(classify(-3.0), Standing::UniversityScholar);
        assert_eq!(classify(0.0), Standing::UniversityScholar);
        assert_eq!(classify(42.0), Standing::NeedsImprovement);
        assert_eq!(classify(f64::INFINITY), Standing::NeedsImprovement);
        assert_eq!(classify(f64::NEG_INFINITY), Standing::UniversityScholar);
        assert_eq!(classify(f64::NAN), Standing::NeedsImprovement);
    }

    #[test]
    fn test_honor_tiers() {
        let honors: Vec<Standing> = Standing::ALL
            .iter()
            .copied()
            .filter(Standing::is_honor)
            .collect();
        assert_eq!(
            honors,
            vec![
                Standing::UniversityScholar,
                Standing::CollegeScholar,
                Standing::HonorRoll
            ]
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(Standing::HonorRoll.to_string(), "Honor Roll");
        assert_eq!(Standing::NeedsImprovement.label(), "Needs Improvement");
    }
}
