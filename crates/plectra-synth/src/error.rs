//! Error types for the synthesis backend.

use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur while rendering or encoding a waveform.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Sampling rate too low to carry the note frequency band.
    #[error("sample rate {rate} Hz cannot carry notes up to {max_frequency} Hz")]
    InvalidSampleRate {
        /// The rejected sampling rate.
        rate: u32,
        /// Top of the note frequency band.
        max_frequency: f64,
    },

    /// Channel buffer count does not match the declared layout.
    #[error("channel layout expects {expected} buffer(s), found {found}")]
    ChannelMismatch {
        /// Buffers the layout calls for.
        expected: usize,
        /// Buffers actually supplied.
        found: usize,
    },

    /// Channel buffers disagree in length.
    #[error("channel buffers have unequal lengths")]
    UnevenChannels,

    /// I/O error while writing the container.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = SynthError::InvalidSampleRate {
            rate: 1000,
            max_frequency: 1000.0,
        };
        assert!(err.to_string().contains("1000 Hz"));

        let err = SynthError::ChannelMismatch {
            expected: 2,
            found: 1,
        };
        assert!(err.to_string().contains("expects 2"));
    }
}
