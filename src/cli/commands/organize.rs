//! File organization commands.

use anyhow::bail;
use std::path::Path;
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::organizer::{self, UndoLog};

/// Move a release's files into the library based on catalog metadata
#[allow(clippy::too_many_arguments)]
pub fn cmd_organize(
    rt: &Runtime,
    config: &Config,
    release_id: u64,
    path: &Path,
    destination: Option<&Path>,
    pattern: Option<&str>,
    token: Option<&str>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let release = super::tag::fetch_release(rt, config, release_id, token)?;
    let files = super::collect_audio_files(path);

    let Some(destination) = destination.or(config.library.root.as_deref()) else {
        bail!("No destination root: pass --destination or set library.root in the config");
    };
    let pattern = pattern.unwrap_or(&config.library.pattern);

    println!(
        "Organizing {} files for {} - {}...",
        files.len(),
        release.artist,
        release.title
    );
    println!("Pattern: {pattern}");
    println!("Destination: {}", destination.display());

    if dry_run {
        println!("\n[DRY RUN MODE - No files will be moved]\n");
        let planned = organizer::plan_moves(&files, &release, pattern, destination)?;
        for plan in planned {
            println!(
                "WOULD MOVE: {} -> {}",
                plan.source.display(),
                plan.destination.display()
            );
        }
        return Ok(());
    }

    let moves = organizer::organize_release(&files, &release, pattern, destination)?;
    let count = moves.len();
    organizer::undo_log_for(moves).save()?;

    println!("\nMoved {count} files (undo with `spindle undo`)");
    Ok(())
}

/// Undo the last organize run
pub fn cmd_undo() -> anyhow::Result<()> {
    let Some(log) = UndoLog::load() else {
        println!("Nothing to undo");
        return Ok(());
    };

    let mut restored = 0;
    let mut errors = 0;
    for record in &log.moves {
        match organizer::undo_move(record) {
            Ok(()) => restored += 1,
            Err(e) => {
                eprintln!("ERROR restoring {}: {}", record.source.display(), e);
                errors += 1;
            }
        }
    }
    UndoLog::clear()?;

    println!("Restored {restored} files ({errors} errors)");
    Ok(())
}
