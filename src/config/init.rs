use anyhow::Result;
use std::path::PathBuf;

use super::{get_config_path, save_config, Config, DEFAULT_DISPLAY_DECIMALS};
use crate::prompt::{prompt_with_default, prompt_yes_no};
use crate::scoring::{validate_policy, ScoringPolicy};

/// Keep asking until the input parses as a number accepted by `check`.
fn prompt_number(message: &str, default: f64, check: impl Fn(f64) -> bool) -> Result<f64> {
    loop {
        let input = prompt_with_default(message, &default.to_string())?;
        match input.parse::<f64>() {
            Ok(v) if v.is_finite() && check(v) => return Ok(v),
            _ => println!("  Invalid value '{}'. Try again.", input),
        }
    }
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    println!("GWA Calc Configuration Wizard");
    println!("=============================");
    println!();

    let defaults = ScoringPolicy::default();
    let configure = prompt_yes_no("Configure scoring policy? (n accepts defaults)", false)?;

    let scoring = if configure {
        println!();
        println!("Courses with more units than this fail validation.");
        let max_units = prompt_number("Maximum units per course", defaults.max_units(), |v| v > 0.0)?;

        println!();
        println!("Below this many credited units you need an underload permit to qualify for honors.");
        let underload_threshold = prompt_number(
            "Underload threshold (units)",
            defaults.underload_threshold(),
            |v| v >= 0.0,
        )?;

        println!();
        println!("Courses whose name contains any of these markers are left out of the average.");
        println!("Matching is case-insensitive and substring based.");
        let markers = prompt_with_default(
            "Excluded markers (comma separated)",
            &defaults.excluded_markers().join(","),
        )?;
        let excluded_markers: Vec<String> = markers
            .split(',')
            .map(|m| m.trim().to_uppercase())
            .filter(|m| !m.is_empty())
            .collect();

        ScoringPolicy {
            max_units: Some(max_units),
            underload_threshold: Some(underload_threshold),
            variation_threshold: defaults.variation_threshold,
            excluded_markers: Some(excluded_markers),
        }
    } else {
        defaults
    };

    if let Err(errors) = validate_policy(&scoring) {
        for error in errors {
            println!("  - {}", error);
        }
        anyhow::bail!("Scoring policy is invalid; nothing written");
    }

    println!();
    let display_decimals = loop {
        let input = prompt_with_default(
            "Decimal places for the average",
            &DEFAULT_DISPLAY_DECIMALS.to_string(),
        )?;
        match input.parse::<usize>() {
            Ok(v) if v <= 10 => break v,
            _ => println!("  Invalid: must be a whole number from 0 to 10. Try again."),
        }
    };

    let default_config_path = match default_path {
        Some(p) => p,
        None => get_config_path()?,
    };
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    let config = Config {
        scoring: Some(scoring),
        display_decimals: Some(display_decimals),
    };
    save_config(&config_path, &config)?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `gwa-calc` to get started.");

    Ok(())
}
