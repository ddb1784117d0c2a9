//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule for maintainability:
//! - `rip`: CD ripping and tool diagnostics
//! - `convert`: WAV/FLAC/MP3 encoding and decoding
//! - `tag`: catalog lookup, tag writing and release display
//! - `organize`: metadata-driven file moves and undo

mod convert;
mod organize;
mod rip;
mod tag;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

pub use convert::{cmd_decode, cmd_encode};
pub use organize::{cmd_organize, cmd_undo};
pub use rip::{cmd_check_tools, cmd_rip};
pub use tag::{cmd_show, cmd_tag};

/// Spindle CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Rip the inserted audio CD to per-track WAV files
    Rip {
        /// Directory the WAV files are written to
        #[arg(default_value = ".")]
        dest: PathBuf,
        /// CD device to rip from (default: the configured or system drive)
        #[arg(short, long)]
        device: Option<String>,
    },
    /// Encode a WAV file to FLAC or MP3
    Encode {
        /// Source WAV file
        source: PathBuf,
        /// Destination file; the extension picks the codec
        dest: PathBuf,
    },
    /// Decode a FLAC or MP3 file back to WAV
    Decode {
        /// Source FLAC or MP3 file
        source: PathBuf,
        /// Destination WAV file
        dest: PathBuf,
    },
    /// Fetch release metadata and write tags to a directory of files
    Tag {
        /// Discogs release ID
        release_id: u64,
        /// Directory containing the release's audio files in track order
        path: PathBuf,
        /// Discogs personal access token (or set DISCOGS_TOKEN env var)
        #[arg(short, long, env = "DISCOGS_TOKEN")]
        token: Option<String>,
        /// Preview changes without writing
        #[arg(long)]
        preview: bool,
        /// Only fill empty tags
        #[arg(long)]
        fill_only: bool,
    },
    /// Fetch a release and print its normalized metadata
    Show {
        /// Discogs release ID
        release_id: u64,
        /// Discogs personal access token (or set DISCOGS_TOKEN env var)
        #[arg(short, long, env = "DISCOGS_TOKEN")]
        token: Option<String>,
    },
    /// Move a release's files into the library by metadata
    Organize {
        /// Discogs release ID
        release_id: u64,
        /// Directory containing the release's audio files in track order
        path: PathBuf,
        /// Destination root (default: library root from config)
        #[arg(short, long)]
        destination: Option<PathBuf>,
        /// Pattern for destination paths (default from config)
        #[arg(long)]
        pattern: Option<String>,
        /// Discogs personal access token (or set DISCOGS_TOKEN env var)
        #[arg(short, long, env = "DISCOGS_TOKEN")]
        token: Option<String>,
        /// Dry run - show what would be done without moving files
        #[arg(long)]
        dry_run: bool,
    },
    /// Undo the last organize run
    Undo,
    /// Check if the external audio tools are installed
    CheckTools,
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = crate::config::load();
    let rt = Runtime::new()?;

    match &cli.command {
        Commands::Rip { dest, device } => cmd_rip(&config, dest, device.as_deref()),
        Commands::Encode { source, dest } => cmd_encode(&config, source, dest),
        Commands::Decode { source, dest } => cmd_decode(&config, source, dest),
        Commands::Tag {
            release_id,
            path,
            token,
            preview,
            fill_only,
        } => cmd_tag(
            &rt,
            &config,
            *release_id,
            path,
            token.as_deref(),
            *preview,
            *fill_only,
        ),
        Commands::Show { release_id, token } => {
            cmd_show(&rt, &config, *release_id, token.as_deref())
        }
        Commands::Organize {
            release_id,
            path,
            destination,
            pattern,
            token,
            dry_run,
        } => cmd_organize(
            &rt,
            &config,
            *release_id,
            path,
            destination.as_deref(),
            pattern.as_deref(),
            token.as_deref(),
            *dry_run,
        ),
        Commands::Undo => cmd_undo(),
        Commands::CheckTools => cmd_check_tools(&config),
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Collect the audio files of a directory in filename order.
///
/// Filename order matches track order for ripped files (track01, track02,
/// ...), which is what lets tag and organize pair files with the catalog
/// tracklist.
pub(crate) fn collect_audio_files(path: &Path) -> Vec<PathBuf> {
    if path.is_dir() {
        walkdir::WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| is_audio_file(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect()
    } else {
        vec![path.to_path_buf()]
    }
}

/// Check if a path has an audio file extension we handle
pub(crate) fn is_audio_file(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    matches!(ext.as_deref(), Some("wav" | "flac" | "mp3"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_audio_file() {
        assert!(is_audio_file(Path::new("track01.cdda.wav")));
        assert!(is_audio_file(Path::new("song.FLAC")));
        assert!(is_audio_file(Path::new("song.mp3")));
        assert!(!is_audio_file(Path::new("cover.jpg")));
        assert!(!is_audio_file(Path::new("notes.txt")));
        assert!(!is_audio_file(Path::new("noext")));
    }

    #[test]
    fn test_collect_audio_files_sorted() {
        let temp = tempfile::tempdir().unwrap();
        for name in ["track03.wav", "track01.wav", "track02.wav", "rip.log"] {
            std::fs::write(temp.path().join(name), b"x").unwrap();
        }

        let files = collect_audio_files(temp.path());

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["track01.wav", "track02.wav", "track03.wav"]);
    }
}
