//! The container: a RIFF/WAVE view over a rendered waveform.

use std::io::{self, Write};

use crate::waveform::Waveform;

use super::format::WavFormat;
use super::stream::WavStream;

/// Size of the canonical PCM header in bytes.
pub const HEADER_LEN: usize = 44;

/// Wraps a finished waveform as a valid, streamable WAV file.
///
/// The waveform's shape was validated at construction, so wrapping cannot
/// fail and serializing it is infallible apart from sink I/O. Serialization
/// never consumes or mutates the buffers; every pass over the container
/// produces identical bytes.
#[derive(Debug, Clone)]
pub struct Container {
    format: WavFormat,
    waveform: Waveform,
}

impl Container {
    /// Wraps a rendered waveform.
    pub fn new(waveform: Waveform) -> Self {
        let format = WavFormat::new(waveform.layout(), waveform.sample_rate());
        Self { format, waveform }
    }

    /// The wrapped waveform.
    pub fn waveform(&self) -> &Waveform {
        &self.waveform
    }

    /// Size of the interleaved sample data in bytes.
    pub fn data_len(&self) -> usize {
        self.waveform.len_samples() * self.format.block_align() as usize
    }

    /// Total encoded file size in bytes, header included.
    pub fn encoded_len(&self) -> usize {
        HEADER_LEN + self.data_len()
    }

    /// The 44-byte canonical PCM header with true size fields.
    pub fn header(&self) -> [u8; HEADER_LEN] {
        let mut header = [0u8; HEADER_LEN];
        let data_len = self.data_len() as u32;

        // RIFF chunk
        header[0..4].copy_from_slice(b"RIFF");
        header[4..8].copy_from_slice(&(36 + data_len).to_le_bytes());
        header[8..12].copy_from_slice(b"WAVE");

        // fmt chunk
        header[12..16].copy_from_slice(b"fmt ");
        header[16..20].copy_from_slice(&16u32.to_le_bytes()); // Chunk size (16 for PCM)
        header[20..22].copy_from_slice(&1u16.to_le_bytes()); // Audio format (1 = PCM)
        header[22..24].copy_from_slice(&self.format.channels.to_le_bytes());
        header[24..28].copy_from_slice(&self.format.sample_rate.to_le_bytes());
        header[28..32].copy_from_slice(&self.format.byte_rate().to_le_bytes());
        header[32..34].copy_from_slice(&self.format.block_align().to_le_bytes());
        header[34..36].copy_from_slice(&self.format.bits_per_sample.to_le_bytes());

        // data chunk
        header[36..40].copy_from_slice(b"data");
        header[40..44].copy_from_slice(&data_len.to_le_bytes());

        header
    }

    /// Writes the complete file to `writer`, channels interleaved per frame,
    /// each sample little-endian.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.header())?;
        let channels = self.waveform.channels();
        for frame in 0..self.waveform.len_samples() {
            for channel in channels {
                writer.write_all(&channel[frame].to_le_bytes())?;
            }
        }
        Ok(())
    }

    /// Serializes the complete file to a byte vector.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.encoded_len());
        self.write_to(&mut buffer)
            .expect("writing to Vec should not fail");
        buffer
    }

    /// A lazy, restartable reader over the encoded bytes.
    pub fn reader(&self) -> WavStream<'_> {
        WavStream::new(self)
    }
}
