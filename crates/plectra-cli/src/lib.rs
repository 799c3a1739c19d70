//! plectra CLI library
//!
//! Command implementations behind the `plectra` binary. The pipeline itself
//! lives in `plectra-song` and `plectra-synth`; this crate is the I/O shell
//! that reads inputs, invokes the core and directs the container bytes to a
//! file.

pub mod commands;
pub mod input;
