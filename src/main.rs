use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use gwa_calc::course::{CoursesFile, Roster};
use gwa_calc::interactive::{run_session, ConsoleNotices, SessionOptions};
use gwa_calc::notice::{Notice, NoticeSink};

const EXIT_SUCCESS: i32 = 0;
const EXIT_SCORING: i32 = 1;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Edit courses interactively (default if no subcommand)
    Interactive {
        /// You hold an official underload permit
        #[arg(long)]
        underload_permit: bool,
    },
    /// Compute the GWA for a YAML or JSON courses file
    Calc {
        /// Courses file ("courses:" list of name/units/grade)
        file: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// You hold an official underload permit
        #[arg(long)]
        underload_permit: bool,
    },
    /// Show the academic standing bands
    Standings,
    /// Show the grade scale
    Grades,
    /// Create a config file interactively
    Init {
        /// Where to write the config (defaults to ~/.config/gwa-calc/config.yaml)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "gwa-calc")]
#[command(about = "General weighted average and academic standing calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/gwa-calc/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Read a courses file; `.json` goes through serde_json, anything else is YAML.
fn load_courses(path: &Path) -> Result<CoursesFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read courses file at {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let courses: CoursesFile = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse courses: invalid JSON in {}", path.display()))?
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse courses: invalid YAML in {}", path.display()))?
    };
    Ok(courses)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Interactive {
        underload_permit: false,
    });
    let use_colors = gwa_calc::output::should_use_colors();

    if let Commands::Init { path } = &command {
        if let Err(e) = gwa_calc::config::run_init_wizard(path.clone()) {
            eprintln!("Init failed: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let config = match gwa_calc::config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring policy at startup
    let policy = config.scoring();
    if let Err(errors) = gwa_calc::scoring::validate_policy(&policy) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }
    debug!(
        max_units = policy.max_units(),
        underload_threshold = policy.underload_threshold(),
        "scoring policy ready"
    );

    match command {
        Commands::Interactive { underload_permit } => {
            let options = SessionOptions {
                policy,
                decimals: config.display_decimals(),
                has_permit: underload_permit,
                use_colors,
            };
            if let Err(e) = run_session(Roster::new(), &options) {
                eprintln!("Session error: {:#}", e);
                std::process::exit(EXIT_INPUT);
            }
        }
        Commands::Calc {
            file,
            json,
            underload_permit,
        } => {
            let courses = match load_courses(&file) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Input error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };
            let roster = Roster::from_rows(courses.courses);
            debug!(rows = roster.len(), "loaded courses");

            let mut notices = ConsoleNotices { use_colors };
            let report = match gwa_calc::scoring::evaluate(roster.entries(), &policy) {
                Ok(r) => r,
                Err(e) => {
                    if json {
                        eprintln!("{}", e);
                    } else {
                        notices.notify(Notice::from_error(&e));
                    }
                    std::process::exit(EXIT_SCORING);
                }
            };

            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Failed to serialize report: {}", e);
                        std::process::exit(EXIT_SCORING);
                    }
                }
            } else {
                println!(
                    "{}",
                    gwa_calc::output::format_report(
                        &report,
                        config.display_decimals(),
                        underload_permit,
                        use_colors
                    )
                );
            }
        }
        Commands::Standings => {
            println!("{}", gwa_calc::output::format_standings_table(use_colors));
        }
        Commands::Grades => {
            println!("{}", gwa_calc::output::format_grade_options());
        }
        // Runs before config is loaded
        Commands::Init { .. } => {}
    }

    std::process::exit(EXIT_SUCCESS);
}
