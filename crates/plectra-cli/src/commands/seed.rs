//! Seed command implementation
//!
//! Renders a deterministic pseudo-random byte stream instead of a file. Two
//! runs with the same seed and size produce byte-identical WAV files.

use std::fs::File;
use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;

use plectra_song::Song;
use plectra_synth::{ChannelLayout, Container, RenderRequest};

use crate::input::SeededBytes;

/// Run the seed command.
///
/// The output path defaults to `<seed>.wav` in the current directory.
pub fn run(
    seed: u64,
    size: usize,
    output: Option<&str>,
    sample_rate: u32,
    mono: bool,
) -> Result<ExitCode> {
    let bytes = SeededBytes::new(seed).take_bytes(size);
    let song = Song::from_bytes(&bytes);

    let layout = if mono {
        ChannelLayout::Mono
    } else {
        ChannelLayout::Stereo
    };
    let request = RenderRequest::new(song, sample_rate, layout)?;
    let note_count = request.song().len();
    let container = Container::new(request.render());

    let out_path = match output {
        Some(path) => path.to_string(),
        None => format!("{seed}.wav"),
    };
    let mut file =
        File::create(&out_path).with_context(|| format!("failed to create {out_path}"))?;
    io::copy(&mut container.reader(), &mut file)?;

    println!(
        "{} seed {} -> {} ({} notes, {} bytes)",
        "ok".green(),
        seed,
        out_path,
        note_count,
        container.encoded_len()
    );
    Ok(ExitCode::SUCCESS)
}
