//! CLI module for platonic.
//!
//! All CLI logic lives here rather than in main.rs so it can be tested.
//! The entry point `run_cli` is called from main.rs with parsed arguments.

mod args;
mod commands;
mod output;

pub use args::{Args, Command};
pub use commands::{execute_list, execute_roll, load_config, run_cli, run_list, run_roll};
pub use output::{
    print_help, print_version, render_catalog, render_catalog_json, render_roll,
    render_summary_json, version_string,
};
