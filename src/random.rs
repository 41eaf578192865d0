use crate::util::{Error, Result};

/// n = 2^31 - 1, a Mersenne prime.
pub const MODULUS: u32 = 0x7fffffff;
/// g = 7^5, a primitive root modulo `MODULUS`.
pub const MULTIPLIER: u64 = 16807;

const M: u32 = MODULUS;
const MIN_STATE: u32 = 1;
const MAX_STATE: u32 = M - 1;

/// A seedable Lehmer / Park-Miller generator with MINSTD parameters.
///
/// The state always lies in `[1, MODULUS - 1]`. Since the modulus is prime
/// and the multiplier is a primitive root, every state in that range is
/// visited once before the sequence repeats.
///
/// This is not a cryptographic generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Random {
    seed: u32,
}

impl Random {
    /// Create a generator from any real seed. The seed is rounded to the
    /// nearest integer (ties away from zero) and reduced modulo `MODULUS`,
    /// keeping the sign of the seed; a non-positive residue is shifted up
    /// by `MODULUS - 1`.
    ///
    /// NaN and infinities are treated as a zero seed.
    pub fn new(seed: f64) -> Self {
        let residue = if seed.is_finite() {
            // f64 `%` truncates, so the result carries the sign of the seed.
            (seed.round() % M as f64) as i64
        } else {
            0
        };
        Self {
            seed: normalize(residue),
        }
    }

    /// Create a generator from an integer seed, e.g. a value previously read
    /// with [`Random::state`]. Valid states are kept as they are.
    pub fn from_state(state: u32) -> Self {
        Self {
            seed: normalize((state % M) as i64),
        }
    }

    /// Advance the generator and return the new state, in `[1, MODULUS - 1]`.
    pub fn next(&mut self) -> u32 {
        let product = self.seed as u64 * MULTIPLIER;
        // product % M
        self.seed = ((product >> 31) + (product & M as u64)) as u32;
        if self.seed > M {
            self.seed -= M;
        }
        self.seed
    }

    /// Return a float computed as `(next() - 1) / (MODULUS - 2)`.
    ///
    /// The result is in `[0, 1]`: exactly `1.0` is produced when `next()`
    /// yields `MODULUS - 1`, which happens once per period.
    pub fn next_float(&mut self) -> f64 {
        (self.next() - MIN_STATE) as f64 / (MAX_STATE - MIN_STATE) as f64
    }

    /// Return an integer in `[min, max)`.
    ///
    /// Fails with `InvalidArgument` when `max <= min`, without advancing the
    /// generator. The rare `next_float() == 1.0` case is clamped to `max - 1`.
    pub fn next_bounded_int(&mut self, min: i64, max: i64) -> Result<i64> {
        if max <= min {
            return Err(Error::invalid_argument(&format!(
                "empty range: min {} must be below max {}",
                min, max
            )));
        }
        // Span and offset stay integers so bounds beyond 2^53 remain exact.
        let span = (max as i128 - min as i128) as f64;
        let offset = (self.next_float() * span).floor() as i128;
        Ok((min as i128 + offset).clamp(min as i128, max as i128 - 1) as i64)
    }

    /// The current state: the value of the last `next()` call, or the
    /// normalized seed if `next()` has not been called yet.
    pub fn state(&self) -> u32 {
        self.seed
    }
}

fn normalize(residue: i64) -> u32 {
    let mut seed = residue;
    if seed <= 0 {
        seed += MAX_STATE as i64;
    }
    // -(M - 1) is the only residue the shift above takes to zero.
    if seed == 0 {
        seed = MAX_STATE as i64;
    }
    seed as u32
}
