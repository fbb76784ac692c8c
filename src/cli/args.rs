//! CLI argument parsing.
//!
//! Parsing never fails: malformed invocations print a diagnostic and fall
//! back to `Help`.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Roll a die and print its frequency table.
    Roll {
        /// Die name (`cube`, `d6`, ...); the configured default when absent.
        die: Option<String>,
        /// Raw roll count as typed; clamped before use.
        rolls: Option<String>,
        /// Optional configuration file.
        config_path: Option<PathBuf>,
        /// Print the summary as JSON instead of a table.
        json: bool,
    },
    /// List the dice in the catalog.
    List {
        /// Print the catalog as JSON.
        json: bool,
    },
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    ///
    /// This method is testable as it accepts any iterator of strings,
    /// not just `std::env::args()`.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Internal parsing from a vector of strings.
    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "roll" => Self::parse_roll_command(&args[2..]),
            "list" => Command::List {
                json: args[2..].iter().any(|a| a == "--json"),
            },
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse the 'roll' command arguments.
    fn parse_roll_command(rest: &[String]) -> Command {
        let mut die = None;
        let mut rolls = None;
        let mut config_path = None;
        let mut json = false;

        let mut i = 0;
        while i < rest.len() {
            match rest[i].as_str() {
                "-n" | "--rolls" => {
                    let Some(value) = rest.get(i + 1) else {
                        eprintln!("Error: '{}' requires a value", rest[i]);
                        return Command::Help;
                    };
                    rolls = Some(value.clone());
                    i += 2;
                }
                "-c" | "--config" => {
                    let Some(value) = rest.get(i + 1) else {
                        eprintln!("Error: '{}' requires a file path", rest[i]);
                        return Command::Help;
                    };
                    config_path = Some(PathBuf::from(value));
                    i += 2;
                }
                "--json" => {
                    json = true;
                    i += 1;
                }
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    eprintln!("Warning: ignoring unknown option '{flag}'");
                    i += 1;
                }
                positional => {
                    if die.is_none() {
                        die = Some(positional.to_string());
                    } else {
                        eprintln!("Warning: ignoring extra argument '{positional}'");
                    }
                    i += 1;
                }
            }
        }

        Command::Roll {
            die,
            rolls,
            config_path,
            json,
        }
    }
}
