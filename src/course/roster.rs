use super::types::{CourseEntry, CourseId, CourseRow, Grade};
use std::fmt;
use tracing::debug;

/// Units given to newly added rows.
pub const DEFAULT_UNITS: f64 = 3.0;

const PLACEHOLDER_ROWS: usize = 3;

/// A single-field edit applied to a course row.
#[derive(Debug, Clone, PartialEq)]
pub enum CourseField {
    Name(String),
    Units(f64),
    Grade(Option<Grade>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RosterError {
    NotFound(CourseId),
    LastEntry,
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::NotFound(id) => write!(f, "No course with id {}", id),
            RosterError::LastEntry => write!(f, "At least one course row must remain"),
        }
    }
}

impl std::error::Error for RosterError {}

/// The session's ordered, mutable list of course rows.
///
/// Ids come from a monotonic counter, so a removed row's id is never
/// handed out again.
#[derive(Debug, Clone)]
pub struct Roster {
    entries: Vec<CourseEntry>,
    next_id: u32,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    /// Start a session with three blank placeholder rows.
    pub fn new() -> Self {
        let mut roster = Self {
            entries: Vec::new(),
            next_id: 1,
        };
        for _ in 0..PLACEHOLDER_ROWS {
            roster.add();
        }
        roster
    }

    /// Build a roster from courses-file rows, numbering them from 1.
    pub fn from_rows(rows: Vec<CourseRow>) -> Self {
        let mut roster = Self {
            entries: Vec::with_capacity(rows.len()),
            next_id: 1,
        };
        for row in rows {
            roster.add_course(row.name, row.units, row.grade);
        }
        roster
    }

    pub fn entries(&self) -> &[CourseEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: CourseId) -> Option<&CourseEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Append a blank row and return its id.
    pub fn add(&mut self) -> CourseId {
        self.add_course(String::new(), DEFAULT_UNITS, None)
    }

    pub fn add_course(
        &mut self,
        name: impl Into<String>,
        units: f64,
        grade: Option<Grade>,
    ) -> CourseId {
        let id = CourseId(self.next_id);
        self.next_id += 1;
        self.entries.push(CourseEntry::new(id, name, units, grade));
        debug!(id = id.0, "added course row");
        id
    }

    /// Remove a row. The last remaining row cannot be removed.
    pub fn remove(&mut self, id: CourseId) -> Result<CourseEntry, RosterError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(RosterError::NotFound(id))?;
        if self.entries.len() <= 1 {
            return Err(RosterError::LastEntry);
        }
        debug!(id = id.0, "removed course row");
        Ok(self.entries.remove(index))
    }

    pub fn update(&mut self, id: CourseId, field: CourseField) -> Result<(), RosterError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(RosterError::NotFound(id))?;
        match field {
            CourseField::Name(name) => entry.name = name,
            CourseField::Units(units) => entry.units = units,
            CourseField::Grade(grade) => entry.grade = grade,
        }
        debug!(id = id.0, "updated course row");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_three_placeholders() {
        let roster = Roster::new();
        assert_eq!(roster.len(), 3);
        let ids: Vec<u32> = roster.entries().iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(roster
            .entries()
            .iter()
            .all(|e| e.name.is_empty() && e.units == DEFAULT_UNITS && e.grade.is_none()));
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut roster = Roster::new();
        roster.remove(CourseId(3)).unwrap();
        let id = roster.add();
        assert_eq!(id, CourseId(4));
        assert!(roster.get(CourseId(3)).is_none());
    }

    #[test]
    fn test_cannot_remove_last_entry() {
        let mut roster = Roster::from_rows(vec![CourseRow {
            name: "MATH 21".to_string(),
            units: 4.0,
            grade: None,
        }]);
        assert_eq!(roster.remove(CourseId(1)), Err(RosterError::LastEntry));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut roster = Roster::new();
        assert_eq!(
            roster.remove(CourseId(42)),
            Err(RosterError::NotFound(CourseId(42)))
        );
    }

    #[test]
    fn test_update_fields() {
        let mut roster = Roster::new();
        roster
            .update(CourseId(2), CourseField::Name("CHEM 16".to_string()))
            .unwrap();
        roster.update(CourseId(2), CourseField::Units(5.0)).unwrap();
        roster
            .update(CourseId(2), CourseField::Grade(Some(Grade::Numeric(1.75))))
            .unwrap();

        let entry = roster.get(CourseId(2)).unwrap();
        assert_eq!(entry.name, "CHEM 16");
        assert_eq!(entry.units, 5.0);
        assert_eq!(entry.grade, Some(Grade::Numeric(1.75)));
    }

    #[test]
    fn test_update_unknown_id() {
        let mut roster = Roster::new();
        let result = roster.update(CourseId(9), CourseField::Units(1.0));
        assert_eq!(result, Err(RosterError::NotFound(CourseId(9))));
    }

    #[test]
    fn test_from_rows_preserves_order() {
        let roster = Roster::from_rows(vec![
            CourseRow {
                name: "A".to_string(),
                units: 3.0,
                grade: Some(Grade::Numeric(1.0)),
            },
            CourseRow {
                name: "B".to_string(),
                units: 2.0,
                grade: Some(Grade::Satisfactory),
            },
        ]);
        assert_eq!(roster.entries()[0].name, "A");
        assert_eq!(roster.entries()[1].id, CourseId(2));
    }
}
