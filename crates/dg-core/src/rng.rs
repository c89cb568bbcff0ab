//! Random number generation for level generation
//!
//! Uses a seeded ChaCha RNG so that a seed fully determines a level.
//! One `LevelRng` is threaded through every consumer in a fixed order:
//! room placement first, then extra edge retention.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Level random number generator
///
/// Wraps ChaCha8Rng for reproducible generation.
/// Note: only the seed is serialized; deserializing rewinds the stream to its start.
#[derive(Debug, Clone)]
pub struct LevelRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl Serialize for LevelRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LevelRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(LevelRng::new(seed))
    }
}

impl LevelRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns a value in `lo..hi`
    ///
    /// Returns `lo` if the range is empty.
    pub fn range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..hi)
    }

    /// Uniform float in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }

    /// Bernoulli draw: true with probability `p`
    ///
    /// Always consumes exactly one value from the stream, even when `p` is
    /// 0 or 1, so the stream position does not depend on the probability.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}
