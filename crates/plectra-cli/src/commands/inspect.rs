//! Inspect command implementation
//!
//! Prints the song derived from a file without rendering any audio. Useful
//! for checking what a given input will sound like structurally, and for
//! piping the note sequence into other tooling with `--json`.

use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;

use plectra_song::Song;

/// Run the inspect command.
pub fn run(input: &str, json: bool) -> Result<ExitCode> {
    let bytes = fs::read(input).with_context(|| format!("failed to read {input}"))?;
    let song = Song::from_bytes(&bytes);

    if json {
        println!("{}", serde_json::to_string_pretty(&song)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {} ({} bytes)", "song".cyan().bold(), input, bytes.len());
    println!("  notes: {}", song.len());
    println!("  total duration: {:.2} s", song.total_duration_secs());
    for (i, note) in song.notes().iter().enumerate() {
        println!(
            "  [{i:4}] {:7.2} Hz  {:.3} s  amp {:.3}  {:?}",
            note.frequency_hz, note.duration_secs, note.amplitude, note.channel
        );
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_accepts_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input");
        fs::write(&input, b"inspect me").unwrap();

        run(input.to_str().unwrap(), false).unwrap();
        run(input.to_str().unwrap(), true).unwrap();
    }

    #[test]
    fn test_run_missing_input_reports_error() {
        assert!(run("/no/such/file", false).is_err());
    }
}
