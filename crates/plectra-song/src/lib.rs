//! plectra song derivation
//!
//! This crate turns an arbitrary byte stream into a [`Song`]: an ordered
//! sequence of plucked-string note events. The derivation is a pure function
//! of the input bytes — no wall clock, no ambient entropy — so the same bytes
//! always produce the same song.
//!
//! # Pipeline
//!
//! 1. [`digest::extract`] feeds fixed-size windows of the input through a
//!    running BLAKE3 hasher and splits each intermediate digest into numeric
//!    [`Draw`]s.
//! 2. [`song::generate`] consumes the draws in groups and maps each group
//!    onto one [`Note`] with bounded, audible parameters.
//!
//! Rendering a song into audio is the `plectra-synth` crate's job; notes
//! carry their duration in seconds precisely so that the sampling rate stays
//! a render-time decision.

pub mod digest;
pub mod note;
pub mod song;

// Re-export main types at crate root
pub use digest::{extract, Draw};
pub use note::{Channel, Note, NoteError};
pub use song::{generate, Song};
