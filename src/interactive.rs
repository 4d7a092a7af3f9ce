//! Line-oriented course editor: edit rows, then `calc` to score them.

use anyhow::Result;
use std::fmt;

use crate::course::{CourseField, CourseId, Grade, Roster, DEFAULT_UNITS};
use crate::notice::{Notice, NoticeSink};
use crate::output;
use crate::prompt::{prompt, prompt_with_default};
use crate::scoring::{evaluate, ScoringPolicy};

const HELP: &str = "\
Commands:
  ls                              list course rows
  add [name]                      add a course row
  set <id> name <text>            rename a course
  set <id> units <number>         change units
  set <id> grade <grade|none>     set grade (1.00-5.00, S, U, INC, DRP)
  rm <id>                         remove a course row
  calc                            compute your GWA
  grades                          show the grade scale
  standings                       show the standing bands
  help                            show this help
  quit                            exit";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    List,
    Add(Option<String>),
    Set(CourseId, CourseField),
    Remove(CourseId),
    Calc,
    Grades,
    Standings,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandError(pub String);

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for CommandError {}

fn parse_id(s: Option<&str>) -> Result<CourseId, CommandError> {
    let s = s.ok_or_else(|| CommandError("Missing course id".to_string()))?;
    s.parse::<u32>()
        .map(CourseId)
        .map_err(|_| CommandError(format!("Invalid course id '{}'", s)))
}

/// Parse `none`, `-` or an empty string as "no grade".
pub fn parse_grade_input(s: &str) -> Result<Option<Grade>, CommandError> {
    let s = s.trim();
    if s.is_empty() || s == "-" || s.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    s.parse::<Grade>()
        .map(Some)
        .map_err(|e| CommandError(e.to_string()))
}

pub fn parse_command(line: &str) -> Result<SessionCommand, CommandError> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head.to_lowercase().as_str() {
        "ls" | "list" => Ok(SessionCommand::List),
        "add" => Ok(SessionCommand::Add(if rest.is_empty() {
            None
        } else {
            Some(rest.to_string())
        })),
        "rm" | "remove" => Ok(SessionCommand::Remove(parse_id(
            rest.split_whitespace().next(),
        )?)),
        "set" => {
            let mut parts = rest.splitn(3, char::is_whitespace);
            let id = parse_id(parts.next())?;
            let field = parts
                .next()
                .ok_or_else(|| CommandError("Missing field: name, units or grade".to_string()))?;
            let value = parts.next().unwrap_or("").trim();
            let field = match field.to_lowercase().as_str() {
                "name" => CourseField::Name(value.to_string()),
                "units" => CourseField::Units(
                    value
                        .parse::<f64>()
                        .map_err(|_| CommandError(format!("Invalid units '{}'", value)))?,
                ),
                "grade" => CourseField::Grade(parse_grade_input(value)?),
                other => return Err(CommandError(format!("Unknown field '{}'", other))),
            };
            Ok(SessionCommand::Set(id, field))
        }
        "calc" | "c" => Ok(SessionCommand::Calc),
        "grades" => Ok(SessionCommand::Grades),
        "standings" => Ok(SessionCommand::Standings),
        "help" | "?" => Ok(SessionCommand::Help),
        "quit" | "q" | "exit" => Ok(SessionCommand::Quit),
        "" => Err(CommandError("Type 'help' for commands".to_string())),
        other => Err(CommandError(format!("Unknown command '{}'", other))),
    }
}

/// Prints notices to stdout as they arrive.
pub struct ConsoleNotices {
    pub use_colors: bool,
}

impl NoticeSink for ConsoleNotices {
    fn notify(&mut self, notice: Notice) {
        println!("{}", output::format_notice(&notice, self.use_colors));
    }
}

/// Settings for an interactive session.
pub struct SessionOptions {
    pub policy: ScoringPolicy,
    pub decimals: usize,
    pub has_permit: bool,
    pub use_colors: bool,
}

fn prompt_new_course(roster: &mut Roster, name: String) -> Result<CourseId> {
    let units = loop {
        let input = prompt_with_default("  Units", &output::format_units(DEFAULT_UNITS))?;
        match input.parse::<f64>() {
            Ok(v) if v.is_finite() => break v,
            _ => println!("  Invalid units '{}'. Try again.", input),
        }
    };
    let grade = loop {
        let input = prompt("  Grade (blank for none): ")?.unwrap_or_default();
        match parse_grade_input(&input) {
            Ok(g) => break g,
            Err(e) => println!("  {}. Try again.", e),
        }
    };
    Ok(roster.add_course(name, units, grade))
}

/// Run the editor until `quit` or end of input, starting from `roster`.
pub fn run_session(mut roster: Roster, options: &SessionOptions) -> Result<()> {
    let mut notices = ConsoleNotices {
        use_colors: options.use_colors,
    };

    println!("GWA Calculator. Type 'help' for commands.");
    println!();
    println!(
        "{}",
        output::format_roster_table(roster.entries(), &options.policy, options.use_colors)
    );

    loop {
        let line = match prompt("> ")? {
            Some(line) => line,
            None => break,
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            SessionCommand::List => println!(
                "{}",
                output::format_roster_table(roster.entries(), &options.policy, options.use_colors)
            ),
            SessionCommand::Add(name) => {
                let id = match name {
                    Some(name) => prompt_new_course(&mut roster, name)?,
                    None => roster.add(),
                };
                println!("Added course {}", id);
            }
            SessionCommand::Set(id, field) => match roster.update(id, field) {
                Ok(()) => {
                    if let Some(entry) = roster.get(id) {
                        println!(
                            "{}: {} units, grade {}",
                            entry.label(),
                            output::format_units(entry.units),
                            output::format_grade(entry)
                        );
                    }
                }
                Err(e) => println!("{}", e),
            },
            SessionCommand::Remove(id) => match roster.remove(id) {
                Ok(entry) => println!("Removed {}", entry.label()),
                Err(e) => println!("{}", e),
            },
            SessionCommand::Calc => match evaluate(roster.entries(), &options.policy) {
                Ok(report) => {
                    notices.notify(Notice::calculated(&report));
                    println!();
                    println!(
                        "{}",
                        output::format_report(
                            &report,
                            options.decimals,
                            options.has_permit,
                            options.use_colors
                        )
                    );
                    println!();
                }
                Err(e) => notices.notify(Notice::from_error(&e)),
            },
            SessionCommand::Grades => println!("{}", output::format_grade_options()),
            SessionCommand::Standings => {
                println!("{}", output::format_standings_table(options.use_colors))
            }
            SessionCommand::Help => println!("{}", HELP),
            SessionCommand::Quit => break,
        }
    }

    Ok(())
}
