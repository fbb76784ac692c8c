//! CLI command handlers.
//!
//! Each handler has a string-returning core (`execute_*`) and a thin wrapper
//! that prints the result and maps errors to an exit code.

use std::path::Path;
use std::process::ExitCode;

use crate::catalog::{list_dice, DieKind};
use crate::config::AppConfig;
use crate::engine::{simulate_die, FaceSampler, SimRng};
use crate::error::DiceResult;
use crate::report::FrequencyTable;

use super::output::{
    print_help, print_version, render_catalog, render_catalog_json, render_roll,
    render_summary_json,
};
use super::{Args, Command};

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Roll {
            die,
            rolls,
            config_path,
            json,
        } => run_roll(
            die.as_deref(),
            rolls.as_deref(),
            config_path.as_deref(),
            json,
        ),
        Command::List { json } => run_list(json),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Roll a die and print the result.
#[must_use]
pub fn run_roll(
    die: Option<&str>,
    rolls: Option<&str>,
    config_path: Option<&Path>,
    json: bool,
) -> ExitCode {
    let result = load_config(config_path)
        .and_then(|config| execute_roll(&config, die, rolls, json, SimRng::from_entropy()));

    match result {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Print the die catalog.
#[must_use]
pub fn run_list(json: bool) -> ExitCode {
    match execute_list(json) {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Load the configuration file, or the defaults when none is given.
///
/// # Errors
///
/// Returns error if the file cannot be read, parsed or validated.
pub fn load_config(path: Option<&Path>) -> DiceResult<AppConfig> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            AppConfig::load(path)
        }
        None => Ok(AppConfig::default()),
    }
}

/// Resolve the die and roll count, simulate, and render the output.
///
/// Missing arguments fall back to the configured defaults; the raw roll count
/// is clamped by [`crate::config::InputConfig::clamp_rolls`].
///
/// # Errors
///
/// Returns error if the die name is unknown or output encoding fails.
pub fn execute_roll<S: FaceSampler>(
    config: &AppConfig,
    die: Option<&str>,
    rolls: Option<&str>,
    json: bool,
    sampler: S,
) -> DiceResult<String> {
    let kind = match die {
        Some(name) => name.parse::<DieKind>()?,
        None => config.simulation.default_die,
    };
    let total_rolls = rolls.map_or(config.simulation.default_rolls, |raw| {
        config.input.clamp_rolls(raw)
    });

    let summary = simulate_die(kind, total_rolls, sampler)?;

    if json {
        let mut text = render_summary_json(&summary)?;
        text.push('\n');
        return Ok(text);
    }

    let table = FrequencyTable::from_summary(&summary, &config.report);
    Ok(render_roll(kind.definition(), &table))
}

/// Render the die catalog.
///
/// # Errors
///
/// Returns error if JSON encoding fails.
pub fn execute_list(json: bool) -> DiceResult<String> {
    if json {
        let mut text = render_catalog_json(list_dice())?;
        text.push('\n');
        Ok(text)
    } else {
        Ok(render_catalog(list_dice()))
    }
}
