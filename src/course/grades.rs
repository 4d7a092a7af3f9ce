use super::types::Grade;

/// A selectable grade with its descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeOption {
    pub grade: Grade,
    pub description: &'static str,
}

const fn numeric(value: f64, description: &'static str) -> GradeOption {
    GradeOption {
        grade: Grade::Numeric(value),
        description,
    }
}

/// The standard grade scale, best first, followed by the non-numeric codes.
pub const GRADE_OPTIONS: [GradeOption; 15] = [
    numeric(1.00, "Excellent"),
    numeric(1.25, "Very Good"),
    numeric(1.50, "Very Good"),
    numeric(1.75, "Good"),
    numeric(2.00, "Good"),
    numeric(2.25, "Satisfactory"),
    numeric(2.50, "Satisfactory"),
    numeric(2.75, "Fair"),
    numeric(3.00, "Pass"),
    numeric(4.00, "Conditional Pass"),
    numeric(5.00, "Fail"),
    GradeOption {
        grade: Grade::Satisfactory,
        description: "Satisfactory (ungraded)",
    },
    GradeOption {
        grade: Grade::Unsatisfactory,
        description: "Unsatisfactory (ungraded)",
    },
    GradeOption {
        grade: Grade::Incomplete,
        description: "Incomplete",
    },
    GradeOption {
        grade: Grade::Dropped,
        description: "Dropped",
    },
];

/// Look up the descriptor for a grade if it is on the standard scale.
pub fn describe(grade: &Grade) -> Option<&'static str> {
    GRADE_OPTIONS
        .iter()
        .find(|opt| match (opt.grade, grade) {
            (Grade::Numeric(a), Grade::Numeric(b)) => (a - b).abs() < 1e-9,
            (a, b) => a == *b,
        })
        .map(|opt| opt.description)
}
