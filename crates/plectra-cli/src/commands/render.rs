//! Render command implementation
//!
//! Hashes a file's bytes into a song and writes the rendered WAV.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;

use plectra_song::Song;
use plectra_synth::{ChannelLayout, Container, RenderRequest};

/// Run the render command.
///
/// The output path defaults to the input path with a `.wav` extension.
pub fn run(input: &str, output: Option<&str>, sample_rate: u32, mono: bool) -> Result<ExitCode> {
    let bytes = fs::read(input).with_context(|| format!("failed to read {input}"))?;
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
        Some(path) => PathBuf::from(path),
        None => Path::new(input).with_extension("wav"),
    };
    let mut file = File::create(&out_path)
        .with_context(|| format!("failed to create {}", out_path.display()))?;
    container.write_to(&mut file)?;

    println!(
        "{} {} -> {} ({} notes, {} bytes)",
        "ok".green(),
        input,
        out_path.display(),
        note_count,
        container.encoded_len()
    );
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_writes_wav_next_to_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("notes.bin");
        fs::write(&input, [0x00u8, 0x01, 0x02, 0x03]).unwrap();

        run(input.to_str().unwrap(), None, 22000, false).unwrap();

        let wav = fs::read(dir.path().join("notes.wav")).unwrap();
        assert_eq!(&wav[0..4], b"RIFF");
        assert!(wav.len() > 44);
    }

    #[test]
    fn test_run_respects_explicit_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input");
        let output = dir.path().join("custom.wav");
        fs::write(&input, b"some bytes").unwrap();

        run(
            input.to_str().unwrap(),
            Some(output.to_str().unwrap()),
            22000,
            true,
        )
        .unwrap();

        let wav = fs::read(&output).unwrap();
        // Mono: one channel in the header.
        assert_eq!(u16::from_le_bytes([wav[22], wav[23]]), 1);
    }

    #[test]
    fn test_run_empty_file_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("empty");
        fs::write(&input, b"").unwrap();

        run(input.to_str().unwrap(), None, 22000, false).unwrap();

        let wav = fs::read(dir.path().join("empty.wav")).unwrap();
        assert_eq!(wav.len(), 44);
    }

    #[test]
    fn test_run_missing_input_reports_error() {
        let err = run("/definitely/not/here", None, 22000, false).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here"));
    }

    #[test]
    fn test_run_rejects_low_sample_rate() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input");
        fs::write(&input, b"abc").unwrap();

        assert!(run(input.to_str().unwrap(), None, 100, false).is_err());
    }
}
