//! Monte Carlo dice simulation engine.
//!
//! Rolls a die `n` times through a [`FaceSampler`] and aggregates the draws
//! into a per-face tally:
//!
//! ```text
//! count(f)     = #{ i : X_i = f },  f ∈ {1, ..., k}
//! frequency(f) = count(f) / n
//! Σ count(f)   = n
//! ```
//!
//! The engine is a stateless function. Every call owns its own tally and
//! produces a fresh, immutable [`SimulationSummary`].

pub mod rng;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use rng::{FaceSampler, SequenceSampler, SimRng};

use crate::catalog::DieKind;
use crate::error::{DiceError, DiceResult};

/// Observed outcome for a single face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Face number in `[1, faces]`.
    pub face: u32,
    /// Number of rolls that landed on this face.
    pub count: u64,
    /// Relative frequency `count / total_rolls`, in `[0, 1]`.
    pub frequency: f64,
}

/// Largest face count [`simulate`] accepts.
pub const MAX_FACES: u32 = 1 << 16;

/// Outcome of one simulation run.
///
/// Results hold exactly one entry per face, ascending, zero counts included.
/// Deserialization rejects input that breaks these invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSummary")]
pub struct SimulationSummary {
    total_rolls: u64,
    results: Vec<SimulationResult>,
    timestamp: DateTime<Utc>,
}

/// Unchecked wire form of [`SimulationSummary`].
#[derive(Deserialize)]
struct RawSummary {
    total_rolls: u64,
    results: Vec<SimulationResult>,
    timestamp: DateTime<Utc>,
}

impl TryFrom<RawSummary> for SimulationSummary {
    type Error = DiceError;

    fn try_from(raw: RawSummary) -> Result<Self, Self::Error> {
        if raw.total_rolls == 0 {
            return Err(DiceError::serialization("summary has zero total rolls"));
        }
        if raw.results.is_empty() || raw.results.len() > MAX_FACES as usize {
            return Err(DiceError::serialization(format!(
                "summary must hold 1 to {MAX_FACES} faces, got {}",
                raw.results.len()
            )));
        }

        let n = raw.total_rolls as f64;
        let mut sum: u64 = 0;
        for (expected_face, r) in (1u32..).zip(&raw.results) {
            if r.face != expected_face {
                return Err(DiceError::serialization(format!(
                    "expected face {expected_face}, got {}",
                    r.face
                )));
            }
            if (r.frequency - r.count as f64 / n).abs() > 1e-9 {
                return Err(DiceError::serialization(format!(
                    "face {} frequency {} does not match its count",
                    r.face, r.frequency
                )));
            }
            sum = sum.saturating_add(r.count);
        }
        if sum != raw.total_rolls {
            return Err(DiceError::serialization(format!(
                "counts sum to {sum}, expected {}",
                raw.total_rolls
            )));
        }

        Ok(Self {
            total_rolls: raw.total_rolls,
            results: raw.results,
            timestamp: raw.timestamp,
        })
    }
}

impl SimulationSummary {
    /// Number of rolls in this run.
    #[must_use]
    pub const fn total_rolls(&self) -> u64 {
        self.total_rolls
    }

    /// Per-face results, ordered by ascending face.
    #[must_use]
    pub fn results(&self) -> &[SimulationResult] {
        &self.results
    }

    /// When the summary was produced.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Number of faces on the simulated die.
    #[must_use]
    pub fn face_count(&self) -> u32 {
        self.results.len() as u32
    }

    /// Uniform probability of any single face, `1 / faces`.
    #[must_use]
    pub fn theoretical_probability(&self) -> f64 {
        1.0 / f64::from(self.face_count())
    }

    /// Result for a given face, if the face exists on this die.
    #[must_use]
    pub fn result(&self, face: u32) -> Option<&SimulationResult> {
        let index = usize::try_from(face.checked_sub(1)?).ok()?;
        self.results.get(index)
    }

    /// Sum of all counts. Always equals [`Self::total_rolls`].
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.results.iter().map(|r| r.count).sum()
    }

    /// Largest absolute gap between an observed frequency and `1 / faces`.
    #[must_use]
    pub fn max_abs_deviation(&self) -> f64 {
        let expected = self.theoretical_probability();
        self.results
            .iter()
            .map(|r| (r.frequency - expected).abs())
            .fold(0.0, f64::max)
    }
}

/// Roll a `faces`-sided die `total_rolls` times and tally the outcomes.
///
/// # Errors
///
/// Returns [`DiceError::InvalidArgument`] if `faces` or `total_rolls` is zero,
/// or if `faces` exceeds [`MAX_FACES`].
///
/// # Example
///
/// ```rust
/// use platonic::engine::{simulate, SequenceSampler};
///
/// let mut sampler = SequenceSampler::cycling(4);
/// let summary = simulate(4, 4, &mut sampler).unwrap();
/// assert!(summary.results().iter().all(|r| r.count == 1));
/// ```
#[tracing::instrument(level = "debug", skip(sampler))]
pub fn simulate<S>(faces: u32, total_rolls: u64, mut sampler: S) -> DiceResult<SimulationSummary>
where
    S: FaceSampler,
{
    if faces == 0 {
        return Err(DiceError::invalid_argument(
            "face count must be at least 1, got 0",
        ));
    }
    if faces > MAX_FACES {
        return Err(DiceError::invalid_argument(format!(
            "face count must be at most {MAX_FACES}, got {faces}"
        )));
    }
    if total_rolls == 0 {
        return Err(DiceError::invalid_argument(
            "total rolls must be at least 1, got 0",
        ));
    }

    let mut tally = vec![0u64; faces as usize];
    for _ in 0..total_rolls {
        // Out-of-contract samplers are pinned to the nearest face.
        let face = sampler.sample_face(faces).clamp(1, faces);
        tally[(face - 1) as usize] += 1;
    }

    let n = total_rolls as f64;
    let results = tally
        .into_iter()
        .zip(1..=faces)
        .map(|(count, face)| SimulationResult {
            face,
            count,
            frequency: count as f64 / n,
        })
        .collect();

    let summary = SimulationSummary {
        total_rolls,
        results,
        timestamp: Utc::now(),
    };

    tracing::debug!(
        faces,
        total_rolls,
        max_deviation = summary.max_abs_deviation(),
        "simulation complete"
    );

    Ok(summary)
}

/// Simulate a catalog die.
///
/// # Errors
///
/// Returns [`DiceError::InvalidArgument`] if `total_rolls` is zero.
pub fn simulate_die<S>(die: DieKind, total_rolls: u64, sampler: S) -> DiceResult<SimulationSummary>
where
    S: FaceSampler,
{
    simulate(die.faces(), total_rolls, sampler)
}

/// Simulate a catalog die with a freshly entropy-seeded generator.
///
/// # Errors
///
/// Returns [`DiceError::InvalidArgument`] if `total_rolls` is zero.
pub fn roll(die: DieKind, total_rolls: u64) -> DiceResult<SimulationSummary> {
    simulate_die(die, total_rolls, SimRng::from_entropy())
}
