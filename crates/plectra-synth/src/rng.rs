//! Deterministic noise seeding using PCG32 with BLAKE3 seed derivation.
//!
//! Every random value in the synthesizer comes from a PCG32 stream whose
//! seed is derived from the note being rendered, so a pluck is a pure
//! function of its note and the whole pipeline stays reproducible.

use plectra_song::{Channel, Note};
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Derives the excitation seed for a note from its own parameters.
///
/// The note's frequency, duration, amplitude and channel are hashed with
/// BLAKE3 and the first eight digest bytes become the seed. Identical notes
/// share a pluck; any parameter change produces an independent noise stream.
pub fn derive_note_seed(note: &Note) -> u64 {
    let mut input = Vec::with_capacity(25);
    input.extend_from_slice(&note.frequency_hz.to_le_bytes());
    input.extend_from_slice(&note.duration_secs.to_le_bytes());
    input.extend_from_slice(&note.amplitude.to_le_bytes());
    input.push(match note.channel {
        Channel::Left => 0,
        Channel::Right => 1,
        Channel::Both => 2,
    });

    let hash = blake3::hash(&input);
    let bytes: [u8; 8] = hash.as_bytes()[0..8].try_into().unwrap();
    u64::from_le_bytes(bytes)
}

/// Creates the noise generator for a note.
pub fn note_rng(note: &Note) -> Pcg32 {
    create_rng(derive_note_seed(note))
}
