//! Song generation: mapping draws onto bounded note parameters.

use serde::{Deserialize, Serialize};

use crate::digest::{self, Draw};
use crate::note::{
    Channel, Note, MAX_DURATION_SECS, MAX_FREQUENCY_HZ, MIN_DURATION_SECS, MIN_FREQUENCY_HZ,
};

/// Draws consumed per generated note.
pub const DRAWS_PER_NOTE: usize = 4;

/// An ordered sequence of notes derived from a byte stream.
///
/// The note order is the draw order is the playback order. A song is
/// immutable once generated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Song {
    notes: Vec<Note>,
}

impl Song {
    /// Derives the song for a byte stream: extraction plus generation.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        generate(&digest::extract(bytes))
    }

    /// Wraps an explicit note sequence.
    pub fn from_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// The notes in playback order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Number of notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the song has no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Sum of all note durations in seconds.
    pub fn total_duration_secs(&self) -> f64 {
        self.notes.iter().map(|n| n.duration_secs).sum()
    }
}

/// Maps a draw into `[lo, hi]` linearly. Monotonic in the draw value.
fn scale(draw: Draw, lo: f64, hi: f64) -> f64 {
    lo + (draw as f64 / Draw::MAX as f64) * (hi - lo)
}

/// Generates the song for a draw sequence.
///
/// Draws are consumed in groups of [`DRAWS_PER_NOTE`] — frequency, duration,
/// amplitude, channel — and a trailing partial group is dropped. The digest
/// extractor only ever emits whole groups, so dropping affects hand-built
/// draw sequences only.
pub fn generate(draws: &[Draw]) -> Song {
    let notes = draws
        .chunks_exact(DRAWS_PER_NOTE)
        .map(|group| Note {
            frequency_hz: scale(group[0], MIN_FREQUENCY_HZ, MAX_FREQUENCY_HZ),
            duration_secs: scale(group[1], MIN_DURATION_SECS, MAX_DURATION_SECS),
            amplitude: group[2] as f64 / Draw::MAX as f64,
            channel: match group[3] % 3 {
                0 => Channel::Left,
                1 => Channel::Right,
                _ => Channel::Both,
            },
        })
        .collect();
    Song { notes }
}
