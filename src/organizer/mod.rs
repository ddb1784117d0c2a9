//! File organization and movement utilities.
//!
//! Moves ripped/tagged audio files into a structured directory hierarchy
//! based on normalized release metadata, with patterns like
//! `{Artist}/{Year} - {Album}/{TrackNum} - {Title}.{ext}`.
//!
//! # Features
//! - Pattern-based destination paths built from the release record
//! - Preview mode to see changes before applying
//! - Undo support with logged move operations
//! - Automatic cleanup of empty directories

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{ReleaseRecord, TrackRecord};
use crate::error::{Error, Result, ResultExt};

/// A record of a file move operation, used for undo functionality
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRecord {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// The undo log containing the last organize operation
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UndoLog {
    pub moves: Vec<MoveRecord>,
    pub timestamp: Option<String>,
}

impl UndoLog {
    const LOG_PATH: &'static str = "spindle_undo.json";

    /// Load the undo log from disk
    pub fn load() -> Option<Self> {
        fs::read_to_string(Self::LOG_PATH)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
    }

    /// Save the undo log to disk
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::organization(format!("Failed to serialize undo log: {e}")))?;
        fs::write(Self::LOG_PATH, json).with_context("Failed to write undo log")?;
        Ok(())
    }

    /// Clear the undo log
    pub fn clear() -> Result<()> {
        if Path::new(Self::LOG_PATH).exists() {
            fs::remove_file(Self::LOG_PATH).with_context("Failed to remove undo log")?;
        }
        Ok(())
    }

    /// Check if there's an undo operation available
    pub fn has_undo() -> bool {
        Path::new(Self::LOG_PATH).exists()
    }
}

/// A planned move for one file (dry-run output)
#[derive(Debug, Clone)]
pub struct PlannedMove {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Build the destination path for one track of a release.
///
/// Pattern variables: {Artist}, {Album}, {Title}, {TrackNum}, {Disc},
/// {Year}, {OriginalYear}, {ext}. Every free-text component is sanitized
/// before it enters the path.
pub fn destination_for(
    release: &ReleaseRecord,
    track: &TrackRecord,
    ext: &str,
    pattern: &str,
    destination_root: &Path,
) -> PathBuf {
    let path_str = pattern
        .replace(
            "{Artist}",
            &sanitize_filename(track.effective_artist(release)),
        )
        .replace("{Album}", &sanitize_filename(&release.title))
        .replace("{Title}", &sanitize_filename(&track.title))
        .replace("{TrackNum}", &format!("{:02}", track.track_number))
        .replace("{Disc}", &format!("{:02}", track.disc_number))
        .replace("{Year}", &sanitize_filename(&release.year))
        .replace("{OriginalYear}", &sanitize_filename(&release.original_year))
        .replace("{ext}", ext);

    destination_root.join(path_str)
}

/// Plan the moves for a release without touching the filesystem.
///
/// Files must be in track order and match the tracklist one to one;
/// cdparanoia's `trackNN` naming gives that order for free.
pub fn plan_moves(
    files: &[PathBuf],
    release: &ReleaseRecord,
    pattern: &str,
    destination_root: &Path,
) -> Result<Vec<PlannedMove>> {
    let tracks = release.tracks();
    if files.len() != tracks.len() {
        return Err(Error::organization(format!(
            "{} files but the release lists {} tracks",
            files.len(),
            tracks.len()
        )));
    }

    Ok(files
        .iter()
        .zip(tracks)
        .map(|(source, track)| {
            let ext = source
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("wav");
            PlannedMove {
                source: source.clone(),
                destination: destination_for(release, track, ext, pattern, destination_root),
            }
        })
        .collect())
}

/// Move a release's files into the library.
///
/// Returns the performed moves; the caller decides whether to persist
/// them as an undo log.
pub fn organize_release(
    files: &[PathBuf],
    release: &ReleaseRecord,
    pattern: &str,
    destination_root: &Path,
) -> Result<Vec<MoveRecord>> {
    let planned = plan_moves(files, release, pattern, destination_root)?;

    let mut moves = Vec::with_capacity(planned.len());
    for plan in planned {
        move_file(&plan.source, &plan.destination)?;
        tracing::info!("Moved {:?} -> {:?}", plan.source, plan.destination);
        moves.push(MoveRecord {
            source: plan.source,
            destination: plan.destination,
        });
    }

    Ok(moves)
}

/// Build an undo log for a completed organize run, stamped with the
/// current time.
pub fn undo_log_for(moves: Vec<MoveRecord>) -> UndoLog {
    UndoLog {
        moves,
        timestamp: Some(Utc::now().to_rfc3339()),
    }
}

/// Move a single file, creating parent directories as needed.
fn move_file(source: &Path, dest: &Path) -> Result<()> {
    if !source.exists() {
        return Err(Error::not_found(source));
    }

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(format!("Failed to create directory: {parent:?}"))?;
    }

    // If rename fails (cross-device), try copy + delete
    if fs::rename(source, dest).is_err() {
        fs::copy(source, dest).with_context(format!("Failed to copy file to: {dest:?}"))?;
        fs::remove_file(source)
            .with_context(format!("Failed to remove source file: {source:?}"))?;
    }

    Ok(())
}

/// Replaces filesystem-forbidden characters with a single space.
///
/// Sanitizing already-sanitized text is a no-op.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | '?' | '<' | '>' | ':' | '*' | '|' | '"' => ' ',
            _ => c,
        })
        .collect()
}

/// Moves a single file back to its original location (for undo)
pub fn undo_move(record: &MoveRecord) -> Result<()> {
    // Create parent directories for the original location
    if let Some(parent) = record.source.parent() {
        fs::create_dir_all(parent)
            .with_context(format!("Failed to create directory: {parent:?}"))?;
    }

    // Move the file back
    if fs::rename(&record.destination, &record.source).is_err() {
        // If rename fails (cross-device), try copy + delete
        fs::copy(&record.destination, &record.source)
            .with_context(format!("Failed to copy file to: {:?}", record.source))?;
        fs::remove_file(&record.destination)
            .with_context(format!("Failed to remove file: {:?}", record.destination))?;
    }

    // Try to clean up empty directories
    if let Some(parent) = record.destination.parent() {
        let _ = remove_empty_dirs(parent);
    }

    Ok(())
}

/// Recursively removes empty directories up the tree
fn remove_empty_dirs(path: &Path) -> Result<()> {
    if path.is_dir() && fs::read_dir(path)?.next().is_none() {
        fs::remove_dir(path)?;
        if let Some(parent) = path.parent() {
            let _ = remove_empty_dirs(parent);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn make_release(artist: &str, title: &str, track_titles: &[&str]) -> ReleaseRecord {
        let track_total = track_titles.len() as u32;
        ReleaseRecord {
            discogs_id: 1,
            artist: artist.to_string(),
            title: title.to_string(),
            label: String::new(),
            catno: String::new(),
            format: "CD, Album".to_string(),
            format_quantity: 1,
            country: String::new(),
            year: "1994".to_string(),
            original_year: "1994".to_string(),
            genre: String::new(),
            style: String::new(),
            tracks: track_titles
                .iter()
                .enumerate()
                .map(|(i, t)| TrackRecord {
                    artist: String::new(),
                    title: t.to_string(),
                    track_number: i as u32 + 1,
                    track_total,
                    disc_number: 1,
                    disc_total: 1,
                })
                .collect(),
        }
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(
            sanitize_filename("Backdoor/Spyboter.A"),
            "Backdoor Spyboter.A"
        );
        assert_eq!(sanitize_filename("AC/DC"), "AC DC");
        assert_eq!(sanitize_filename("Track: Title"), "Track  Title");
        assert_eq!(sanitize_filename("Valid Name"), "Valid Name");
        assert_eq!(sanitize_filename("What?"), "What ");
        assert_eq!(sanitize_filename("a<b>c"), "a b c");
        assert_eq!(sanitize_filename("pipe|test"), "pipe test");
        assert_eq!(sanitize_filename(r#"say "cheese""#), "say  cheese ");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let once = sanitize_filename("Backdoor/Spyboter.A");
        assert_eq!(sanitize_filename(&once), once);
    }

    #[test]
    fn test_destination_follows_pattern() {
        let release = make_release("Autechre", "Amber", &["Foil", "Montreal"]);

        let dest = destination_for(
            &release,
            &release.tracks()[1],
            "flac",
            "{Artist}/{Year} - {Album}/{TrackNum} - {Title}.{ext}",
            Path::new("/music"),
        );

        assert_eq!(
            dest,
            PathBuf::from("/music/Autechre/1994 - Amber/02 - Montreal.flac")
        );
    }

    #[test]
    fn test_destination_sanitizes_components() {
        let release = make_release("AC/DC", "Back: In Black", &["What?"]);

        let dest = destination_for(
            &release,
            &release.tracks()[0],
            "mp3",
            "{Artist}/{Album}/{Title}.{ext}",
            Path::new("/out"),
        );

        assert_eq!(dest, PathBuf::from("/out/AC DC/Back  In Black/What .mp3"));
    }

    #[test]
    fn test_destination_uses_track_artist_when_present() {
        let mut release = make_release("Various", "Split EP", &["Side A"]);
        release.tracks[0].artist = "Legowelt".to_string();

        let dest = destination_for(
            &release,
            &release.tracks()[0],
            "flac",
            "{Artist}/{Title}.{ext}",
            Path::new("/out"),
        );

        assert_eq!(dest, PathBuf::from("/out/Legowelt/Side A.flac"));
    }

    #[test]
    fn test_plan_moves_rejects_count_mismatch() {
        let release = make_release("Autechre", "Amber", &["Foil", "Montreal"]);
        let files = vec![PathBuf::from("/rip/track01.cdda.wav")];

        let result = plan_moves(&files, &release, "{Title}.{ext}", Path::new("/music"));

        assert!(matches!(result, Err(Error::Organization(_))));
    }

    #[test]
    fn test_plan_moves_pairs_in_order() {
        let release = make_release("Autechre", "Amber", &["Foil", "Montreal"]);
        let files = vec![
            PathBuf::from("/rip/track01.cdda.wav"),
            PathBuf::from("/rip/track02.cdda.wav"),
        ];

        let planned = plan_moves(
            &files,
            &release,
            "{TrackNum} - {Title}.{ext}",
            Path::new("/music"),
        )
        .unwrap();

        assert_eq!(planned[0].destination, PathBuf::from("/music/01 - Foil.wav"));
        assert_eq!(
            planned[1].destination,
            PathBuf::from("/music/02 - Montreal.wav")
        );
    }

    #[test]
    fn test_organize_release_moves_files() {
        let temp = tempdir().unwrap();
        let source_dir = temp.path().join("rip");
        let dest_dir = temp.path().join("library");
        std::fs::create_dir_all(&source_dir).unwrap();

        let source_file = source_dir.join("track01.cdda.wav");
        std::fs::write(&source_file, b"fake wav content").unwrap();

        let release = make_release("Autechre", "Amber", &["Foil"]);

        let moves = organize_release(
            &[source_file.clone()],
            &release,
            "{Artist}/{TrackNum} - {Title}.{ext}",
            &dest_dir,
        )
        .unwrap();
        assert_eq!(moves.len(), 1);
        assert!(moves[0].destination.exists());
        assert!(!source_file.exists());
        assert_eq!(
            std::fs::read(&moves[0].destination).unwrap(),
            b"fake wav content"
        );
    }

    #[test]
    fn test_undo_log_roundtrip() {
        let log = UndoLog {
            moves: vec![MoveRecord {
                source: PathBuf::from("/rip/track01.cdda.wav"),
                destination: PathBuf::from("/music/01 - Foil.wav"),
            }],
            timestamp: Some("2026-01-01T00:00:00Z".to_string()),
        };

        let json = serde_json::to_string(&log).unwrap();
        let loaded: UndoLog = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.moves.len(), 1);
        assert_eq!(
            loaded.moves[0].source,
            PathBuf::from("/rip/track01.cdda.wav")
        );
    }

    #[test]
    fn test_undo_log_for_stamps_time() {
        let log = undo_log_for(vec![]);
        assert!(log.timestamp.is_some());
        assert!(log.moves.is_empty());
    }

    #[test]
    fn test_undo_move_restores_file() {
        let temp = tempdir().unwrap();
        let original_dir = temp.path().join("original");
        let moved_dir = temp.path().join("moved");
        std::fs::create_dir_all(&original_dir).unwrap();
        std::fs::create_dir_all(&moved_dir).unwrap();

        // Create a "moved" file
        let moved_file = moved_dir.join("track.wav");
        std::fs::write(&moved_file, b"content").unwrap();

        let record = MoveRecord {
            source: original_dir.join("track.wav"),
            destination: moved_file.clone(),
        };

        let result = undo_move(&record);
        assert!(result.is_ok());
        assert!(record.source.exists());
        assert!(!moved_file.exists());
    }

    #[test]
    fn test_move_missing_source_is_not_found() {
        let temp = tempdir().unwrap();
        let result = move_file(
            &temp.path().join("missing.wav"),
            &temp.path().join("dest.wav"),
        );
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
