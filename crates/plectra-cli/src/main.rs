//! plectra CLI - renders byte streams into plucked-string WAV files.
//!
//! This binary hashes a file (or a seeded pseudo-random stream) into a song
//! and writes the Karplus-Strong rendering as a WAV next to the input.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use plectra_cli::commands;

/// plectra - deterministic byte-stream sonification
#[derive(Parser)]
#[command(name = "plectra")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a file's bytes into a WAV file
    Render {
        /// Path to the input file
        #[arg(short, long)]
        input: String,

        /// Output WAV path (default: the input path with a .wav extension)
        #[arg(short, long)]
        output: Option<String>,

        /// Sampling rate in Hz
        #[arg(long, default_value_t = commands::DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,

        /// Render a single channel instead of stereo
        #[arg(long)]
        mono: bool,
    },

    /// Render a seeded pseudo-random byte stream into a WAV file
    Seed {
        /// Seed of the deterministic byte stream
        #[arg(short, long)]
        seed: u64,

        /// Stream length in bytes
        #[arg(long, default_value_t = commands::DEFAULT_STREAM_LEN)]
        size: usize,

        /// Output WAV path (default: <seed>.wav)
        #[arg(short, long)]
        output: Option<String>,

        /// Sampling rate in Hz
        #[arg(long, default_value_t = commands::DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,

        /// Render a single channel instead of stereo
        #[arg(long)]
        mono: bool,
    },

    /// Print the song derived from a file without rendering audio
    Inspect {
        /// Path to the input file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON instead of a listing
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            input,
            output,
            sample_rate,
            mono,
        } => commands::render::run(&input, output.as_deref(), sample_rate, mono),
        Commands::Seed {
            seed,
            size,
            output,
            sample_rate,
            mono,
        } => commands::seed::run(seed, size, output.as_deref(), sample_rate, mono),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
