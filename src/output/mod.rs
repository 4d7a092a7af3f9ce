pub mod formatter;

pub use formatter::{
    format_average, format_grade, format_grade_options, format_notice, format_report,
    format_roster_table, format_standings_table, format_units, should_use_colors,
};
