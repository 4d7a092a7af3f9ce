use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::course::{describe, CourseEntry, GRADE_OPTIONS};
use crate::notice::{Notice, NoticeVariant};
use crate::scoring::{is_excluded, ScoreReport, ScoringPolicy, Standing};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a course name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Units without a trailing ".0" for whole numbers ("3", "2.5")
pub fn format_units(units: f64) -> String {
    if units.fract() == 0.0 && units.abs() < 1e15 {
        format!("{:.0}", units)
    } else {
        format!("{}", units)
    }
}

pub fn format_average(average: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, average)
}

fn paint_standing(standing: Standing, text: &str, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }
    match standing {
        Standing::UniversityScholar => text.yellow().bold().to_string(),
        Standing::CollegeScholar => text.yellow().to_string(),
        Standing::HonorRoll => text.green().to_string(),
        Standing::GoodStanding => text.blue().to_string(),
        Standing::NeedsImprovement => text.red().to_string(),
    }
}

/// One "label: value" line of the result card, values aligned.
fn field(label: &str, value: impl std::fmt::Display) -> String {
    format!("  {:<17} {}", format!("{}:", label), value)
}

fn format_insight_line(label: &str, entry: &CourseEntry) -> String {
    let grade = entry
        .numeric_grade()
        .map(|g| format!("{:.2}", g))
        .unwrap_or_default();
    field(
        label,
        format!("{}  {}  ({} units)", entry.label(), grade, format_units(entry.units)),
    )
}

/// Format the result card for a computed report.
///
/// `has_permit` only matters for the underload notice wording.
pub fn format_report(
    report: &ScoreReport,
    decimals: usize,
    has_permit: bool,
    use_colors: bool,
) -> String {
    let mut lines = Vec::new();

    let title = "Your GWA Result";
    lines.push(if use_colors {
        title.bold().to_string()
    } else {
        title.to_string()
    });

    let average = format_average(report.average, decimals);
    lines.push(field(
        "GWA",
        paint_standing(report.standing, &average, use_colors),
    ));
    lines.push(field(
        "Standing",
        paint_standing(report.standing, report.standing.label(), use_colors),
    ));
    lines.push(field("Total Units", format!("{:.2}", report.total_units)));
    let course_word = if report.active_count == 1 {
        "Academic Course"
    } else {
        "Academic Courses"
    };
    lines.push(field(course_word, report.active_count));
    if report.excluded_count > 0 {
        lines.push(field(
            "Excluded",
            format!("{} course/s", report.excluded_count),
        ));
    }
    if report.pending_count > 0 {
        lines.push(field(
            "Ungraded",
            format!("{} row/s skipped", report.pending_count),
        ));
    }

    if let Some(ref insights) = report.insights {
        lines.push(String::new());
        let heading = "Performance Insights";
        lines.push(if use_colors {
            heading.bold().to_string()
        } else {
            heading.to_string()
        });
        let best_label = if insights.has_variation {
            "Best Performance"
        } else {
            "Highest Impact"
        };
        lines.push(format_insight_line(best_label, &insights.best));
        if let Some(ref worst) = insights.worst {
            lines.push(format_insight_line("Needs Attention", worst));
        }
    }

    if report.underloaded {
        lines.push(String::new());
        let heading = "Underload Notice";
        lines.push(if use_colors {
            heading.bold().to_string()
        } else {
            heading.to_string()
        });
        lines.push(
            "  You are enrolled in fewer credited units than a full load. Unless you have an"
                .to_string(),
        );
        lines.push("  official underload permit, you are not eligible for academic honors.".to_string());
        if report.standing.is_honor() {
            let eligibility = if report.honors_eligible(has_permit) {
                "Underload permit on file: honors eligibility kept."
            } else {
                "Not eligible for honors without an underload permit."
            };
            lines.push(format!("  {}", eligibility));
        }
    }

    lines.join("\n")
}

/// Format the course rows as a table: id, name, units, grade, status.
pub fn format_roster_table(
    entries: &[CourseEntry],
    policy: &ScoringPolicy,
    use_colors: bool,
) -> String {
    if entries.is_empty() {
        return "No courses.".to_string();
    }

    // Id (4) + units (6) + grade (5) + status (9) + separators
    let fixed_width = 4 + 6 + 5 + 9 + 2 * 4;
    let name_width = match get_terminal_width() {
        Some(width) if width > fixed_width + 10 => (width - fixed_width).min(40),
        Some(_) => 20,
        None => 40,
    };

    entries
        .iter()
        .map(|entry| {
            let name = if entry.name.trim().is_empty() {
                "(unnamed)".to_string()
            } else {
                truncate_name(&entry.name, name_width)
            };
            let grade = entry
                .grade
                .map(|g| g.code())
                .unwrap_or_else(|| "-".to_string());
            let status = if is_excluded(entry, policy) {
                "excluded"
            } else if entry.grade.is_none() {
                "ungraded"
            } else {
                "counted"
            };
            let id_str = format!("{:>3}.", entry.id.0);
            let row = format!(
                "{:<name_width$}  {:>6}  {:>5}  ",
                name,
                format_units(entry.units),
                grade,
                name_width = name_width
            );

            if use_colors {
                let status = match status {
                    "excluded" => status.yellow().to_string(),
                    "ungraded" => status.dimmed().to_string(),
                    _ => status.green().to_string(),
                };
                format!("{} {}{}", id_str.dimmed(), row, status)
            } else {
                format!("{} {}{}", id_str, row, status)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the standing bands, best first.
pub fn format_standings_table(use_colors: bool) -> String {
    Standing::ALL
        .iter()
        .map(|standing| {
            format!(
                "{:<18} {}",
                standing.band(),
                paint_standing(*standing, standing.label(), use_colors)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the selectable grades with their descriptors.
pub fn format_grade_options() -> String {
    GRADE_OPTIONS
        .iter()
        .map(|opt| format!("{:>5}  {}", opt.grade.code(), opt.description))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Describe a grade for a single-line echo ("1.75 (Good)")
pub fn format_grade(entry: &CourseEntry) -> String {
    match entry.grade {
        Some(grade) => match describe(&grade) {
            Some(desc) => format!("{} ({})", grade, desc),
            None => grade.to_string(),
        },
        None => "-".to_string(),
    }
}

pub fn format_notice(notice: &Notice, use_colors: bool) -> String {
    if use_colors {
        let title = match notice.variant {
            NoticeVariant::Success => notice.title.green().bold().to_string(),
            NoticeVariant::Fail => notice.title.red().bold().to_string(),
        };
        format!("{} {}", title, notice.description)
    } else {
        format!("{} {}", notice.title, notice.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::{CourseId, Grade};
    use crate::scoring::{evaluate, Insights};

    fn course(id: u32, name: &str, units: f64, grade: Option<Grade>) -> CourseEntry {
        CourseEntry::new(CourseId(id), name, units, grade)
    }

    fn sample_report() -> ScoreReport {
        ScoreReport {
            average: 1.53333,
            standing: Standing::CollegeScholar,
            total_units: 15.0,
            active_count: 5,
            excluded_count: 1,
            pending_count: 0,
            insights: Some(Insights {
                best: course(1, "MATH 21", 4.0, Some(Grade::Numeric(1.0))),
                worst: Some(course(2, "CHEM 16", 3.0, Some(Grade::Numeric(2.5)))),
                has_variation: true,
            }),
            underloaded: false,
        }
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_units(3.0), "3");
        assert_eq!(format_units(2.5), "2.5");
    }

    #[test]
    fn test_format_average_precision() {
        assert_eq!(format_average(1.53333, 4), "1.5333");
        assert_eq!(format_average(1.53333, 2), "1.53");
    }

    #[test]
    fn test_format_report_plain() {
        let result = format_report(&sample_report(), 4, false, false);
        assert!(result.contains("GWA:              1.5333"));
        assert!(result.contains("College Scholar"));
        assert!(result.contains("Total Units:      15.00"));
        assert!(result.contains("Academic Courses: 5"));
        assert!(result.contains("Excluded:         1 course/s"));
        assert!(result.contains("Best Performance"));
        assert!(result.contains("Needs Attention"));
        assert!(result.contains("CHEM 16  2.50  (3 units)"));
        assert!(!result.contains("Underload Notice"));
    }

    #[test]
    fn test_format_report_highest_impact() {
        let mut report = sample_report();
        report.insights = Some(Insights {
            best: course(1, "MATH 21", 4.0, Some(Grade::Numeric(1.0))),
            worst: None,
            has_variation: false,
        });
        let result = format_report(&report, 4, false, false);
        assert!(result.contains("Highest Impact"));
        assert!(!result.contains("Needs Attention"));
    }

    #[test]
    fn test_format_report_underload() {
        let entries = vec![course(1, "MATH 21", 3.0, Some(Grade::Numeric(1.0)))];
        let report = evaluate(&entries, &ScoringPolicy::default()).unwrap();
        let result = format_report(&report, 4, false, false);
        assert!(result.contains("Academic Course:  1"));
        assert!(result.contains("Underload Notice"));
        assert!(result.contains("Not eligible for honors"));

        let with_permit = format_report(&report, 4, true, false);
        assert!(with_permit.contains("honors eligibility kept"));
    }

    #[test]
    fn test_format_roster_table() {
        let entries = vec![
            course(1, "MATH 21", 4.0, Some(Grade::Numeric(1.25))),
            course(2, "PE 2", 2.0, Some(Grade::Numeric(1.0))),
            course(3, "", 3.0, None),
        ];
        let result = format_roster_table(&entries, &ScoringPolicy::default(), false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("  1. MATH 21"));
        assert!(lines[0].contains("1.25"));
        assert!(lines[0].ends_with("counted"));
        assert!(lines[1].ends_with("excluded"));
        assert!(lines[2].contains("(unnamed)"));
        assert!(lines[2].ends_with("ungraded"));
    }

    #[test]
    fn test_truncate_name() {
        assert_eq!(truncate_name("Short", 10), "Short");
        assert_eq!(truncate_name("Mathematical Analysis", 10), "Mathema...");
        assert_eq!(truncate_name("Analysis", 3), "Ana");
    }

    #[test]
    fn test_format_standings_table() {
        let result = format_standings_table(false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("<= 1.45"));
        assert!(lines[0].contains("University Scholar"));
        assert!(lines[4].contains("Needs Improvement"));
    }

    #[test]
    fn test_format_grade_options() {
        let result = format_grade_options();
        assert!(result.contains(" 1.00  Excellent"));
        assert!(result.contains("  INC  Incomplete"));
        assert_eq!(result.lines().count(), 15);
    }

    #[test]
    fn test_format_grade() {
        let entry = course(1, "X", 3.0, Some(Grade::Numeric(1.75)));
        assert_eq!(format_grade(&entry), "1.75 (Good)");
        assert_eq!(format_grade(&course(2, "X", 3.0, None)), "-");
    }
}
