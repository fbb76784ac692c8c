//! Random number generation for dice rolls.
//!
//! The engine never talks to a generator directly. It asks a [`FaceSampler`]
//! for one face at a time, so tests can substitute a deterministic sequence
//! and production code can use the PCG-backed [`SimRng`].

use rand::prelude::*;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};

/// Uniform integer sampler over `[1, faces]`.
pub trait FaceSampler {
    /// Draw one face in `[1, faces]`.
    ///
    /// `faces` is always at least 1 when called by the engine.
    fn sample_face(&mut self, faces: u32) -> u32;
}

impl<S: FaceSampler + ?Sized> FaceSampler for &mut S {
    fn sample_face(&mut self, faces: u32) -> u32 {
        (**self).sample_face(faces)
    }
}

/// PCG (Permuted Congruential Generator) backed random source.
///
/// Statistically strong and fast; not cryptographically secure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimRng {
    /// Seed the generator was created from.
    master_seed: u64,
    /// Next stream index handed out by [`SimRng::partition`].
    stream: u64,
    /// Internal PCG state.
    rng: Pcg64,
}

impl SimRng {
    /// Create a generator from an explicit seed.
    #[must_use]
    pub fn new(master_seed: u64) -> Self {
        Self {
            master_seed,
            stream: 0,
            rng: Pcg64::seed_from_u64(master_seed),
        }
    }

    /// Create a generator seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::rngs::OsRng.next_u64())
    }

    /// Get the master seed.
    #[must_use]
    pub const fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Get current stream index.
    #[must_use]
    pub const fn stream(&self) -> u64 {
        self.stream
    }

    /// Split off `n` independent generators, one per concurrent caller.
    ///
    /// # Example
    ///
    /// ```rust
    /// use platonic::engine::rng::SimRng;
    ///
    /// let mut rng = SimRng::new(42);
    /// let partitions = rng.partition(4);
    /// assert_eq!(partitions.len(), 4);
    /// ```
    #[must_use]
    pub fn partition(&mut self, n: usize) -> Vec<Self> {
        let partitions: Vec<Self> = (0..n)
            .map(|i| {
                let stream = self.stream + i as u64 + 1;
                let seed = self
                    .master_seed
                    .wrapping_add(stream.wrapping_mul(0x9E37_79B9_7F4A_7C15));
                Self {
                    master_seed: self.master_seed,
                    stream,
                    rng: Pcg64::seed_from_u64(seed),
                }
            })
            .collect();

        self.stream += n as u64;
        partitions
    }

    /// Generate a random f64 in [0, 1).
    pub fn gen_f64(&mut self) -> f64 {
        self.rng.gen()
    }

    /// Generate a random u64.
    pub fn gen_u64(&mut self) -> u64 {
        self.rng.gen()
    }

    /// Generate a u32 uniformly in the inclusive range `[min, max]`.
    ///
    /// Returns `min` when `max < min`.
    pub fn gen_range_u32(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}

impl FaceSampler for SimRng {
    fn sample_face(&mut self, faces: u32) -> u32 {
        self.gen_range_u32(1, faces)
    }
}

/// Deterministic sampler that cycles through a fixed list of faces.
///
/// Values are folded into `[1, faces]` so the sampler never breaks the
/// [`FaceSampler`] contract, whatever die it is used with. An empty list
/// always yields face 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceSampler {
    values: Vec<u32>,
    index: usize,
}

impl SequenceSampler {
    /// Create a sampler that cycles through `values`.
    #[must_use]
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            index: 0,
        }
    }

    /// Sampler that cycles `1, 2, ..., faces`.
    #[must_use]
    pub fn cycling(faces: u32) -> Self {
        Self::new((1..=faces).collect::<Vec<_>>())
    }

    /// Sampler that always returns the same face.
    #[must_use]
    pub fn constant(face: u32) -> Self {
        Self::new(vec![face])
    }

    /// Number of faces drawn so far.
    #[must_use]
    pub const fn draws(&self) -> usize {
        self.index
    }
}

impl FaceSampler for SequenceSampler {
    fn sample_face(&mut self, faces: u32) -> u32 {
        if self.values.is_empty() || faces == 0 {
            self.index += 1;
            return 1;
        }
        let raw = self.values[self.index % self.values.len()];
        self.index += 1;
        (raw.max(1) - 1) % faces + 1
    }
}
