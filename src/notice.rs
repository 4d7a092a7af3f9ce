//! Short user-facing messages describing the outcome of a calculation.
//!
//! The engine only hands back results; whoever drives it turns them into
//! notices and decides how (and for how long) to show them.

use crate::scoring::{ScoreReport, ScoringError};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoticeVariant {
    Success,
    Fail,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn from_error(error: &ScoringError) -> Self {
        let title = match error {
            ScoringError::NoNumericGrade => "Incomplete Information",
            ScoringError::InvalidGrade(_) => "Invalid Grade Range",
            ScoringError::InvalidUnits { .. } => "Invalid Units",
            ScoringError::DivisionByZero => "Nothing to Average",
        };
        Self {
            title: title.to_string(),
            description: error.to_string(),
            variant: NoticeVariant::Fail,
        }
    }

    pub fn calculated(report: &ScoreReport) -> Self {
        let excluded = if report.excluded_count > 0 {
            format!(" ({} course/s excluded).", report.excluded_count)
        } else {
            ".".to_string()
        };
        Self {
            title: "GWA Calculated Successfully!".to_string(),
            description: format!(
                "Your GWA is {:.2} - {}{}",
                report.average, report.standing, excluded
            ),
            variant: NoticeVariant::Success,
        }
    }
}

/// Receiver for notices.
pub trait NoticeSink {
    fn notify(&mut self, notice: Notice);
}

impl NoticeSink for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}
