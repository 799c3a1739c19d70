//! plectra synthesis backend
//!
//! Renders a [`plectra_song::Song`] into a finished [`Waveform`] with the
//! Karplus-Strong plucked-string algorithm and wraps the result as a
//! streamable WAV [`Container`].
//!
//! # Determinism
//!
//! Rendering is deterministic: given the same song, sampling rate and
//! channel layout, the encoded container is byte-identical across runs. All
//! randomness flows through PCG32 generators seeded by BLAKE3 digests of the
//! note being rendered — never a process-wide RNG.
//!
//! # Example
//!
//! ```ignore
//! use plectra_song::Song;
//! use plectra_synth::{ChannelLayout, Container, RenderRequest};
//!
//! let song = Song::from_bytes(&bytes);
//! let request = RenderRequest::new(song, 22000, ChannelLayout::Stereo)?;
//! let container = Container::new(request.render());
//! std::fs::write("out.wav", container.to_vec())?;
//! ```
//!
//! # Crate structure
//!
//! - [`render`] - the render request and the note-by-note synthesis loop
//! - [`string`] - the noise-seeded recirculating delay line
//! - [`rng`] - deterministic noise seeding
//! - [`waveform`] - rendered sample buffers and channel layout
//! - [`wav`] - deterministic WAV container encoding

pub mod error;
pub mod render;
pub mod rng;
pub mod string;
pub mod wav;
pub mod waveform;

// Re-export main types at crate root
pub use error::{SynthError, SynthResult};
pub use render::RenderRequest;
pub use wav::{Container, WavStream};
pub use waveform::{ChannelLayout, Waveform};
