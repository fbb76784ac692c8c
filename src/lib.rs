//! # platonic
//!
//! Monte Carlo frequency simulator for the five Platonic-solid dice.
//!
//! Roll a tetrahedron, cube, octahedron, dodecahedron or icosahedron `n`
//! times and compare the observed relative frequency of every face with the
//! theoretical uniform probability `1 / faces`.
//!
//! ## Example
//!
//! ```rust
//! use platonic::prelude::*;
//!
//! let mut rng = SimRng::new(42);
//! let summary = simulate_die(DieKind::Cube, 1_000, &mut rng).unwrap();
//!
//! assert_eq!(summary.results().len(), 6);
//! assert_eq!(summary.total_count(), 1_000);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod report;

#[cfg(feature = "wasm")]
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::catalog::{list_dice, DieDefinition, DieKind, IconShape};
    pub use crate::config::AppConfig;
    pub use crate::engine::rng::{FaceSampler, SequenceSampler, SimRng};
    pub use crate::engine::{roll, simulate, simulate_die, SimulationResult, SimulationSummary};
    pub use crate::error::{DiceError, DiceResult};
    pub use crate::report::FrequencyTable;
}

/// Re-export for public API
pub use error::{DiceError, DiceResult};
