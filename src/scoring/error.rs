use std::fmt;

/// Reasons a course list cannot be scored. All are recoverable: the user
/// fixes the input and tries again.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoringError {
    /// No academic course carries a usable numeric grade.
    NoNumericGrade,
    /// An academic course has a numeric grade outside 1.00 to 5.00.
    InvalidGrade(String),
    /// An academic course's units fall outside (0, max_units].
    InvalidUnits { label: String, max_units: f64 },
    /// Active courses total zero units.
    DivisionByZero,
}

impl fmt::Display for ScoringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringError::NoNumericGrade => {
                write!(f, "At least one academic course needs a numeric grade")
            }
            ScoringError::InvalidGrade(label) => {
                write!(f, "{}: grade must be between 1.00 and 5.00", label)
            }
            ScoringError::InvalidUnits { label, max_units } => write!(
                f,
                "{}: units must be greater than 0 and at most {}",
                label, max_units
            ),
            ScoringError::DivisionByZero => {
                write!(f, "Active courses have no credited units to average over")
            }
        }
    }
}

impl std::error::Error for ScoringError {}
