pub mod grades;
pub mod roster;
pub mod types;

pub use grades::{describe, GradeOption, GRADE_OPTIONS};
pub use roster::{CourseField, Roster, RosterError, DEFAULT_UNITS};
pub use types::{CourseEntry, CourseId, CourseRow, CoursesFile, Grade, GradeParseError};
