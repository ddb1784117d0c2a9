//! Spindle - a personal music library CLI.
//!
//! Rips audio CDs, converts between WAV/FLAC/MP3, fetches release
//! metadata from Discogs, writes tags and moves files into a structured
//! library based on that metadata.

pub mod audio;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod organizer;
pub mod tagging;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("spindle=info".parse().unwrap()))
        .init();

    cli::run_command(&args)
}
