//! Catalog lookup and tag writing commands.

use anyhow::bail;
use std::path::Path;
use tokio::runtime::Runtime;

use crate::catalog::{DiscogsClient, ReleaseRecord};
use crate::config::Config;
use crate::tagging::{self, TagWriteOptions, render_pair};

/// Fetch a release and write its tags across a directory of audio files
pub fn cmd_tag(
    rt: &Runtime,
    config: &Config,
    release_id: u64,
    path: &Path,
    token: Option<&str>,
    preview: bool,
    fill_only: bool,
) -> anyhow::Result<()> {
    let release = fetch_release(rt, config, release_id, token)?;
    let files = super::collect_audio_files(path);
    let tracks = release.tracks();

    if files.len() != tracks.len() {
        bail!(
            "{} audio files in {} but the release lists {} tracks",
            files.len(),
            path.display(),
            tracks.len()
        );
    }

    println!(
        "{} - {} ({} tracks)",
        release.artist,
        release.title,
        tracks.len()
    );
    if preview {
        println!("\n[PREVIEW MODE - No tags will be written]\n");
    }

    let options = TagWriteOptions { fill_only };

    for (file, track) in files.iter().zip(tracks) {
        if preview {
            let planned = tagging::preview_write(file, &release, track, &options)?;
            println!("{}:", file.display());
            for change in planned.changes {
                println!(
                    "  {}: {:?} -> {:?}",
                    change.field, change.current_value, change.new_value
                );
            }
        } else {
            let summary = tagging::write_track_tags(file, &release, track, &options)?;
            println!(
                "Tagged {} ({} fields, {} skipped)",
                file.display(),
                summary.fields_updated,
                summary.fields_skipped.len()
            );
        }
    }

    Ok(())
}

/// Fetch a release and print its normalized metadata
pub fn cmd_show(
    rt: &Runtime,
    config: &Config,
    release_id: u64,
    token: Option<&str>,
) -> anyhow::Result<()> {
    let release = fetch_release(rt, config, release_id, token)?;

    println!("{} - {}", release.artist, release.title);
    println!("  Discogs:  {}", release.discogs_id);
    println!("  Label:    {} ({})", release.label, release.catno);
    println!(
        "  Format:   {} x{}",
        release.format, release.format_quantity
    );
    println!("  Country:  {}", release.country);
    if release.original_year != release.year && !release.original_year.is_empty() {
        println!(
            "  Year:     {} (originally {})",
            release.year, release.original_year
        );
    } else {
        println!("  Year:     {}", release.year);
    }
    println!("  Genre:    {}", release.genre);
    println!("  Style:    {}", release.style);
    println!();

    for track in release.tracks() {
        let artist = track.effective_artist(&release);
        println!(
            "  [{} {}] {} - {}",
            render_pair(track.disc_number, track.disc_total),
            render_pair(track.track_number, track.track_total),
            artist,
            track.title
        );
    }

    Ok(())
}

/// Build a client from the explicit token or the configured one and
/// fetch the release.
pub(crate) fn fetch_release(
    rt: &Runtime,
    config: &Config,
    release_id: u64,
    token: Option<&str>,
) -> anyhow::Result<ReleaseRecord> {
    let token = token
        .map(str::to_string)
        .or_else(|| config.credentials.discogs_token.clone());
    let client = DiscogsClient::new(token);
    Ok(rt.block_on(client.fetch_release(release_id))?)
}
