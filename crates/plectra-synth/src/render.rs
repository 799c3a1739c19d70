//! Karplus-Strong rendering of a song into a waveform.

use plectra_song::note::MAX_FREQUENCY_HZ;
use plectra_song::{Channel, Note, Song};

use crate::error::{SynthError, SynthResult};
use crate::rng;
use crate::string::DelayLine;
use crate::waveform::{ChannelLayout, Waveform};

/// A song paired with its render-time configuration.
///
/// Song generation and rendering are deliberately separate records: a song
/// is a pure function of its input bytes, while the sampling rate and
/// channel layout are caller configuration that only enters here.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    song: Song,
    sample_rate: u32,
    layout: ChannelLayout,
}

impl RenderRequest {
    /// Pairs a song with a sampling rate and channel layout.
    ///
    /// The rate must keep the entire note frequency band below Nyquist,
    /// which also guarantees every delay line at least two samples.
    pub fn new(song: Song, sample_rate: u32, layout: ChannelLayout) -> SynthResult<Self> {
        if (sample_rate as f64) < 2.0 * MAX_FREQUENCY_HZ {
            return Err(SynthError::InvalidSampleRate {
                rate: sample_rate,
                max_frequency: MAX_FREQUENCY_HZ,
            });
        }
        Ok(Self {
            song,
            sample_rate,
            layout,
        })
    }

    /// The song to render.
    pub fn song(&self) -> &Song {
        &self.song
    }

    /// Sampling rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Requested channel layout.
    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Renders every note in order into a finished waveform.
    ///
    /// Notes are concatenated along a single timeline; the output length is
    /// exactly the sum of the per-note sample counts. Under a stereo layout
    /// a note assigned to one channel plays silence on the other for its
    /// span, and `Both` duplicates identical samples into each buffer.
    pub fn render(&self) -> Waveform {
        let total: usize = self
            .song
            .notes()
            .iter()
            .map(|n| n.duration_samples(self.sample_rate))
            .sum();
        let mut channels: Vec<Vec<i16>> = (0..self.layout.channel_count())
            .map(|_| Vec::with_capacity(total))
            .collect();

        for note in self.song.notes() {
            debug_assert!(
                note.validate().is_ok(),
                "unvalidated note reached the synthesizer"
            );
            self.render_note(note, &mut channels);
        }

        Waveform::new(self.layout, self.sample_rate, channels)
            .expect("renderer fills equal-length buffers matching the layout")
    }

    fn render_note(&self, note: &Note, channels: &mut [Vec<i16>]) {
        let line_len = (self.sample_rate as f64 / note.frequency_hz).round() as usize;
        let mut line = DelayLine::pluck(line_len, note.amplitude, &mut rng::note_rng(note));

        for _ in 0..note.duration_samples(self.sample_rate) {
            let sample = quantize(line.tick());
            match (self.layout, note.channel) {
                (ChannelLayout::Mono, _) => channels[0].push(sample),
                (ChannelLayout::Stereo, Channel::Left) => {
                    channels[0].push(sample);
                    channels[1].push(0);
                }
                (ChannelLayout::Stereo, Channel::Right) => {
                    channels[0].push(0);
                    channels[1].push(sample);
                }
                (ChannelLayout::Stereo, Channel::Both) => {
                    channels[0].push(sample);
                    channels[1].push(sample);
                }
            }
        }
    }
}

/// Quantizes one accumulator sample to signed 16-bit.
///
/// Values outside [-1, 1] clip hard at the boundary; they never wrap.
pub fn quantize(sample: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16
}
