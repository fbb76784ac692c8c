//! Application configuration with YAML schema and validation.
//!
//! The engine itself takes no configuration; these settings belong to the
//! layer that turns raw user input into engine calls and renders the result:
//! - which die is selected initially and how many rolls are pre-filled
//! - the bounds raw roll-count input is clamped into
//! - report formatting and outlier highlighting
//!
//! ```yaml
//! schema_version: "1.0"
//! simulation:
//!   default_die: cube
//!   default_rolls: 100
//! input:
//!   min_rolls: 1
//!   max_rolls: 100000
//!   presets: [10, 100, 1000, 10000]
//! report:
//!   outlier_ratio: 1.5
//!   precision: 2
//! ```

use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;
use std::path::Path;
use validator::Validate;

use crate::catalog::DieKind;
use crate::error::{DiceError, DiceResult};

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Initial selections.
    #[validate(nested)]
    #[serde(default)]
    pub simulation: SimulationDefaults,

    /// Roll-count input handling.
    #[validate(nested)]
    #[serde(default)]
    pub input: InputConfig,

    /// Frequency report settings.
    #[validate(nested)]
    #[serde(default)]
    pub report: ReportConfig,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl AppConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> DiceResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> DiceResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;

        config.validate()?;
        config.validate_semantic()?;

        Ok(config)
    }

    /// Serialize configuration to YAML.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_yaml(&self) -> DiceResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate cross-field constraints the derive cannot express.
    fn validate_semantic(&self) -> DiceResult<()> {
        let input = &self.input;
        if input.min_rolls > input.max_rolls {
            return Err(DiceError::config(format!(
                "min_rolls ({}) exceeds max_rolls ({})",
                input.min_rolls, input.max_rolls
            )));
        }

        if !input.contains(self.simulation.default_rolls) {
            return Err(DiceError::config(format!(
                "default_rolls {} is outside [{}, {}]",
                self.simulation.default_rolls, input.min_rolls, input.max_rolls
            )));
        }

        if let Some(bad) = input.presets.iter().find(|&&p| !input.contains(p)) {
            return Err(DiceError::config(format!(
                "preset {bad} is outside [{}, {}]",
                input.min_rolls, input.max_rolls
            )));
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            simulation: SimulationDefaults::default(),
            input: InputConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    default_die: Option<DieKind>,
    default_rolls: Option<u64>,
    max_rolls: Option<u64>,
    outlier_ratio: Option<f64>,
}

impl AppConfigBuilder {
    /// Set the initially selected die.
    #[must_use]
    pub const fn default_die(mut self, die: DieKind) -> Self {
        self.default_die = Some(die);
        self
    }

    /// Set the pre-filled roll count.
    #[must_use]
    pub const fn default_rolls(mut self, rolls: u64) -> Self {
        self.default_rolls = Some(rolls);
        self
    }

    /// Set the largest roll count accepted from input.
    #[must_use]
    pub const fn max_rolls(mut self, max: u64) -> Self {
        self.max_rolls = Some(max);
        self
    }

    /// Set the outlier highlighting ratio.
    #[must_use]
    pub fn outlier_ratio(mut self, ratio: f64) -> Self {
        self.outlier_ratio = Some(ratio);
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the resulting configuration is inconsistent.
    pub fn build(self) -> DiceResult<AppConfig> {
        let mut config = AppConfig::default();

        if let Some(die) = self.default_die {
            config.simulation.default_die = die;
        }
        if let Some(rolls) = self.default_rolls {
            config.simulation.default_rolls = rolls;
        }
        if let Some(max) = self.max_rolls {
            config.input.max_rolls = max;
            config.input.presets.retain(|&p| p <= max);
        }
        if let Some(ratio) = self.outlier_ratio {
            config.report.outlier_ratio = ratio;
        }

        config.validate()?;
        config.validate_semantic()?;
        Ok(config)
    }
}

/// Initial die and roll count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SimulationDefaults {
    /// Die selected when none is given.
    #[serde(default)]
    pub default_die: DieKind,
    /// Roll count used when none is given.
    #[validate(range(min = 1))]
    #[serde(default = "default_rolls")]
    pub default_rolls: u64,
}

const fn default_rolls() -> u64 {
    100
}

impl Default for SimulationDefaults {
    fn default() -> Self {
        Self {
            default_die: DieKind::default(),
            default_rolls: default_rolls(),
        }
    }
}

/// Bounds for raw roll-count input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct InputConfig {
    /// Smallest accepted roll count.
    #[validate(range(min = 1))]
    #[serde(default = "default_min_rolls")]
    pub min_rolls: u64,
    /// Largest accepted roll count.
    #[validate(range(min = 1))]
    #[serde(default = "default_max_rolls")]
    pub max_rolls: u64,
    /// Quick-pick roll counts offered to the user.
    #[serde(default = "default_presets")]
    pub presets: Vec<u64>,
}

const fn default_min_rolls() -> u64 {
    1
}

const fn default_max_rolls() -> u64 {
    100_000
}

fn default_presets() -> Vec<u64> {
    vec![10, 100, 1_000, 10_000]
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            min_rolls: default_min_rolls(),
            max_rolls: default_max_rolls(),
            presets: default_presets(),
        }
    }
}

impl InputConfig {
    /// Whether `rolls` lies within `[min_rolls, max_rolls]`.
    #[must_use]
    pub const fn contains(&self, rolls: u64) -> bool {
        rolls >= self.min_rolls && rolls <= self.max_rolls
    }

    /// Turn raw user input into a roll count the engine will accept.
    ///
    /// The leading run of ASCII digits is the value, so `"3.7"` reads as 3
    /// and `"12abc"` as 12. Input with no leading digits or a leading `-`
    /// counts as 0, digits too large for `u64` count as `u64::MAX`; the value
    /// is then clamped into `[min_rolls, max_rolls]`. This never fails.
    #[must_use]
    pub fn clamp_rolls(&self, raw: &str) -> u64 {
        let parsed = leading_integer(raw);
        let clamped = parsed.clamp(self.min_rolls, self.max_rolls.max(self.min_rolls));
        if clamped != parsed {
            tracing::warn!(input = raw, rolls = clamped, "roll count clamped");
        }
        clamped
    }
}

/// Non-negative integer prefix of `raw`, saturating at `u64::MAX`.
fn leading_integer(raw: &str) -> u64 {
    let trimmed = raw.trim_start();
    if trimmed.starts_with('-') {
        return 0;
    }
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    match unsigned[..end].parse::<u64>() {
        Ok(n) => n,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => u64::MAX,
        Err(_) => 0,
    }
}

/// Frequency report settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ReportConfig {
    /// A face is flagged when its percentage exceeds `expected × outlier_ratio`.
    #[validate(range(min = 1.0))]
    #[serde(default = "default_outlier_ratio")]
    pub outlier_ratio: f64,
    /// Decimal places for percentages.
    #[validate(range(max = 6))]
    #[serde(default = "default_precision")]
    pub precision: usize,
}

const fn default_outlier_ratio() -> f64 {
    1.5
}

const fn default_precision() -> usize {
    2
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            outlier_ratio: default_outlier_ratio(),
            precision: default_precision(),
        }
    }
}
