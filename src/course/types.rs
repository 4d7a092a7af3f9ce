use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a course row within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub u32);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A course grade on the inverted 1.00 (best) to 5.00 (worst) scale,
/// or one of the non-numeric codes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Grade {
    Numeric(f64),
    /// S: passed, ungraded
    Satisfactory,
    /// U: failed, ungraded
    Unsatisfactory,
    /// INC
    Incomplete,
    /// DRP
    Dropped,
}

impl Grade {
    pub fn numeric_value(&self) -> Option<f64> {
        match self {
            Grade::Numeric(n) => Some(*n),
            _ => None,
        }
    }

    /// Canonical text form: two decimals for numbers, the code otherwise.
    pub fn code(&self) -> String {
        match self {
            Grade::Numeric(n) => format!("{:.2}", n),
            Grade::Satisfactory => "S".to_string(),
            Grade::Unsatisfactory => "U".to_string(),
            Grade::Incomplete => "INC".to_string(),
            Grade::Dropped => "DRP".to_string(),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradeParseError(pub String);

impl fmt::Display for GradeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid grade '{}': expected a number or one of S, U, INC, DRP",
            self.0
        )
    }
}

impl std::error::Error for GradeParseError {}

impl FromStr for Grade {
    type Err = GradeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_uppercase().as_str() {
            "S" => Ok(Grade::Satisfactory),
            "U" => Ok(Grade::Unsatisfactory),
            "INC" => Ok(Grade::Incomplete),
            "DRP" => Ok(Grade::Dropped),
            _ => match trimmed.parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(Grade::Numeric(n)),
                _ => Err(GradeParseError(s.to_string())),
            },
        }
    }
}

impl Serialize for Grade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Grade::Numeric(n) => serializer.serialize_f64(*n),
            other => serializer.serialize_str(&other.code()),
        }
    }
}

struct GradeVisitor;

impl<'de> Visitor<'de> for GradeVisitor {
    type Value = Grade;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a numeric grade or one of S, U, INC, DRP")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Grade, E> {
        if v.is_finite() {
            Ok(Grade::Numeric(v))
        } else {
            Err(E::custom(GradeParseError(v.to_string())))
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Grade, E> {
        Ok(Grade::Numeric(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Grade, E> {
        Ok(Grade::Numeric(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Grade, E> {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Grade {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(GradeVisitor)
    }
}

/// One user-entered course row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseEntry {
    pub id: CourseId,
    pub name: String,
    pub units: f64,
    /// `None` until the user picks a grade
    pub grade: Option<Grade>,
}

impl CourseEntry {
    pub fn new(id: CourseId, name: impl Into<String>, units: f64, grade: Option<Grade>) -> Self {
        Self {
            id,
            name: name.into(),
            units,
            grade,
        }
    }

    /// The name shown to the user, falling back to "Subject N" for blank rows.
    pub fn label(&self) -> String {
        if self.name.trim().is_empty() {
            format!("Subject {}", self.id)
        } else {
            self.name.clone()
        }
    }

    pub fn numeric_grade(&self) -> Option<f64> {
        self.grade.as_ref().and_then(Grade::numeric_value)
    }
}

/// A course row as written in a courses file (ids are assigned on load).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CourseRow {
    #[serde(default)]
    pub name: String,
    pub units: f64,
    #[serde(default)]
    pub grade: Option<Grade>,
}

/// Top-level shape of a courses file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoursesFile {
    pub courses: Vec<CourseRow>,
}
