//! CLI command implementations

pub mod inspect;
pub mod render;
pub mod seed;

/// Default sampling rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 22000;

/// Default seeded stream length in bytes (2 MiB).
pub const DEFAULT_STREAM_LEN: usize = 2 * 1024 * 1024;
