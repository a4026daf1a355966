//! Candidate PIN generation.
//!
//! [`PinSource`] abstracts where candidate PINs come from so the issuance
//! logic can be driven deterministically under test. The production
//! implementation is [`RandomPinGenerator`].

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::pin::{PIN_MAX, PIN_MIN, is_obvious};

/// Source of candidate PIN values.
///
/// Implementations are pure generators: they never touch storage and
/// carry no uniqueness guarantee; collision handling is the caller's
/// concern.
pub trait PinSource: Send + Sync + std::fmt::Debug {
    /// Produces the next candidate PIN in [[`PIN_MIN`], [`PIN_MAX`]].
    fn next_pin(&self) -> i32;
}

/// Uniform random PIN generator with an obviousness filter.
///
/// Draws from [[`PIN_MIN`], [`PIN_MAX`]] and redraws whenever the value
/// has all-identical digits. The rejection loop has no explicit cap: it
/// terminates with probability 1 (expected redraws ≈ 0.001) but carries
/// no timeout.
#[derive(Debug)]
pub struct RandomPinGenerator {
    rng: Mutex<StdRng>,
}

impl RandomPinGenerator {
    /// Creates a generator seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Creates a generator with a fixed seed, for deterministic tests.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomPinGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PinSource for RandomPinGenerator {
    fn next_pin(&self) -> i32 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        loop {
            let candidate = rng.random_range(PIN_MIN..=PIN_MAX);
            if !is_obvious(candidate) {
                return candidate;
            }
        }
    }
}
