//! CLI output formatting.
//!
//! Rendering functions return `String`s so they can be tested; the `print_*`
//! wrappers write them to stdout.

use std::fmt::Write as _;

use crate::catalog::DieDefinition;
use crate::engine::SimulationSummary;
use crate::error::DiceResult;
use crate::report::FrequencyTable;

/// Print version information.
pub fn print_version() {
    println!("{}", version_string());
}

/// Version line, with the git revision when the build captured one.
#[must_use]
pub fn version_string() -> String {
    match option_env!("PLATONIC_GIT_HASH") {
        Some(hash) if !hash.is_empty() => {
            format!("platonic {} ({hash})", env!("CARGO_PKG_VERSION"))
        }
        _ => format!("platonic {}", env!("CARGO_PKG_VERSION")),
    }
}

/// Print help message.
pub fn print_help() {
    println!(
        r"platonic - Platonic dice frequency simulator

USAGE:
    platonic <COMMAND> [OPTIONS]

COMMANDS:
    roll [DIE]                  Roll a die and show the relative frequencies
        -n, --rolls <N>         Number of rolls (clamped to the configured bounds)
        -c, --config <FILE>     Load settings from a YAML file
        --json                  Print the raw summary as JSON

    list                        List the available dice
        --json                  Print the catalog as JSON

    help                        Show this help message
    version                     Show version information

DICE:
    tetrahedron (d4), cube (d6), octahedron (d8),
    dodecahedron (d12), icosahedron (d20)

EXAMPLES:
    platonic roll
    platonic roll d20 --rolls 10000
    platonic roll dodecahedron -n 500 --json
    platonic list

Set RUST_LOG=debug to trace simulation runs.
"
    );
}

/// Render the die catalog as a text listing.
#[must_use]
pub fn render_catalog(dice: &[DieDefinition]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<14} {:>5}  {:<9}  Description", "Die", "Faces", "Icon");
    for die in dice {
        let icon = format!("{:?}", die.icon).to_lowercase();
        let _ = writeln!(
            out,
            "{:<14} {:>5}  {:<9}  {}",
            die.kind.key(),
            format!("d{}", die.faces),
            icon,
            die.description
        );
    }
    out
}

/// Render the die catalog as JSON.
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn render_catalog_json(dice: &[DieDefinition]) -> DiceResult<String> {
    Ok(serde_json::to_string_pretty(dice)?)
}

/// Render a simulation result header plus frequency table.
#[must_use]
pub fn render_roll(die: &DieDefinition, table: &FrequencyTable) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Simulation results: {} (d{}), {} rolls\n",
        die.name, die.faces, table.total_rolls
    );
    out.push_str(&table.render());
    out
}

/// Render a summary as JSON.
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn render_summary_json(summary: &SimulationSummary) -> DiceResult<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}
