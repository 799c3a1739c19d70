//! Deterministic input byte streams.
//!
//! The `seed` command feeds the pipeline from an explicit generator object
//! instead of a file, so the rendered sound is a pure function of the seed.
//! The generator is constructed here and threaded through by value — never a
//! process-wide RNG.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

/// A seeded pseudo-random byte source.
#[derive(Debug)]
pub struct SeededBytes {
    rng: Pcg32,
}

impl SeededBytes {
    /// Creates the byte source for `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Materializes the next `len` bytes of the stream.
    pub fn take_bytes(&mut self, len: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; len];
        self.rng.fill_bytes(&mut bytes);
        bytes
    }
}
