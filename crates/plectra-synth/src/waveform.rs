//! Rendered sample buffers and their channel layout.

use crate::error::{SynthError, SynthResult};

/// Output channel arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    /// One channel.
    Mono,
    /// Left and right channels.
    Stereo,
}

impl ChannelLayout {
    /// Number of channel buffers the layout carries.
    pub fn channel_count(&self) -> usize {
        match self {
            ChannelLayout::Mono => 1,
            ChannelLayout::Stereo => 2,
        }
    }
}

/// Fully rendered multichannel audio plus its format descriptor.
///
/// Samples are already quantized to signed 16-bit and every channel buffer
/// has the same length. A waveform is immutable once built; the container
/// serializes it without consuming it.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    layout: ChannelLayout,
    sample_rate: u32,
    channels: Vec<Vec<i16>>,
}

impl Waveform {
    /// Wraps rendered channel buffers, checking their shape against the
    /// layout.
    pub fn new(
        layout: ChannelLayout,
        sample_rate: u32,
        channels: Vec<Vec<i16>>,
    ) -> SynthResult<Self> {
        if channels.len() != layout.channel_count() {
            return Err(SynthError::ChannelMismatch {
                expected: layout.channel_count(),
                found: channels.len(),
            });
        }
        if channels.windows(2).any(|pair| pair[0].len() != pair[1].len()) {
            return Err(SynthError::UnevenChannels);
        }
        Ok(Self {
            layout,
            sample_rate,
            channels,
        })
    }

    /// The channel layout.
    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Sampling rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// The per-channel sample buffers, in channel order.
    pub fn channels(&self) -> &[Vec<i16>] {
        &self.channels
    }

    /// Samples per channel.
    pub fn len_samples(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// Rendered duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.len_samples() as f64 / self.sample_rate as f64
    }
}
