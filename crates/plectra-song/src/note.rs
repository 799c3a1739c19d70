//! Note events and their validity bands.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest frequency the generator emits, in Hz.
pub const MIN_FREQUENCY_HZ: f64 = 80.0;
/// Highest frequency the generator emits, in Hz. Any sampling rate of at
/// least twice this value keeps every note below Nyquist with a delay line
/// of two or more samples.
pub const MAX_FREQUENCY_HZ: f64 = 1000.0;
/// Shortest note duration, in seconds.
pub const MIN_DURATION_SECS: f64 = 0.05;
/// Longest note duration, in seconds.
pub const MAX_DURATION_SECS: f64 = 0.5;

/// Output channel a note is played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Left,
    Right,
    /// Identical samples on every output channel.
    Both,
}

/// One musical event: a pluck with a fixed frequency, length and loudness.
///
/// The duration is held in seconds; the sample count is derived only when
/// the song is rendered against a concrete sampling rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Fundamental frequency in Hz.
    pub frequency_hz: f64,
    /// Length of the note in seconds.
    pub duration_secs: f64,
    /// Excitation loudness in [0, 1].
    pub amplitude: f64,
    /// Channel assignment.
    pub channel: Channel,
}

/// A note parameter outside its validity band.
#[derive(Debug, Error, PartialEq)]
pub enum NoteError {
    /// Frequency outside the audible band.
    #[error("frequency {0} Hz is outside [{MIN_FREQUENCY_HZ}, {MAX_FREQUENCY_HZ}] Hz")]
    FrequencyOutOfRange(f64),

    /// Duration outside the note length band.
    #[error("duration {0} s is outside [{MIN_DURATION_SECS}, {MAX_DURATION_SECS}] s")]
    DurationOutOfRange(f64),

    /// Amplitude outside [0, 1].
    #[error("amplitude {0} is outside [0, 1]")]
    AmplitudeOutOfRange(f64),
}

impl Note {
    /// Checks every parameter against its band.
    ///
    /// Notes built by [`crate::song::generate`] always pass; this exists for
    /// hand-constructed notes and as a debug guard in the synthesizer.
    pub fn validate(&self) -> Result<(), NoteError> {
        if !(MIN_FREQUENCY_HZ..=MAX_FREQUENCY_HZ).contains(&self.frequency_hz) {
            return Err(NoteError::FrequencyOutOfRange(self.frequency_hz));
        }
        if !(MIN_DURATION_SECS..=MAX_DURATION_SECS).contains(&self.duration_secs) {
            return Err(NoteError::DurationOutOfRange(self.duration_secs));
        }
        if !(0.0..=1.0).contains(&self.amplitude) {
            return Err(NoteError::AmplitudeOutOfRange(self.amplitude));
        }
        Ok(())
    }

    /// Number of output samples this note occupies at `sample_rate`.
    pub fn duration_samples(&self, sample_rate: u32) -> usize {
        (self.duration_secs * sample_rate as f64).round() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_note() -> Note {
        Note {
            frequency_hz: 440.0,
            duration_secs: 0.25,
            amplitude: 0.8,
            channel: Channel::Both,
        }
    }

    #[test]
    fn test_validate_accepts_in_band_note() {
        assert_eq!(valid_note().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_out_of_band_frequency() {
        let mut note = valid_note();
        note.frequency_hz = 20.0;
        assert_eq!(note.validate(), Err(NoteError::FrequencyOutOfRange(20.0)));

        note.frequency_hz = 5000.0;
        assert!(note.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_band_duration() {
        let mut note = valid_note();
        note.duration_secs = 0.0;
        assert_eq!(note.validate(), Err(NoteError::DurationOutOfRange(0.0)));
    }

    #[test]
    fn test_validate_rejects_out_of_band_amplitude() {
        let mut note = valid_note();
        note.amplitude = 1.5;
        assert_eq!(note.validate(), Err(NoteError::AmplitudeOutOfRange(1.5)));

        note.amplitude = -0.1;
        assert!(note.validate().is_err());
    }

    #[test]
    fn test_duration_samples_rounds_to_nearest() {
        let mut note = valid_note();
        note.duration_secs = 0.25;
        assert_eq!(note.duration_samples(22000), 5500);
        assert_eq!(note.duration_samples(44100), 11025);
    }

    #[test]
    fn test_duration_samples_positive_across_bands() {
        let mut note = valid_note();
        note.duration_secs = MIN_DURATION_SECS;
        // Even the shortest note at the lowest supported rate is non-empty.
        assert!(note.duration_samples(2000) > 0);
    }

    #[test]
    fn test_channel_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Channel::Left).unwrap(), "\"left\"");
        assert_eq!(serde_json::to_string(&Channel::Both).unwrap(), "\"both\"");
    }
}
