//! Audio file tag reading and writing.
//!
//! Uses the lofty crate for format-independent metadata access: ID3v2 for
//! MP3, Vorbis comments for FLAC, with WAV handled through its INFO/ID3
//! chunks. The writer maps normalized release fields onto tags; it never
//! looks at raw catalog data.
//!
//! Track and disc positions are rendered as zero-padded pairs ("05/15")
//! so files sort correctly in tag-based players.

use lofty::config::WriteOptions;
use lofty::file::TaggedFileExt;
use lofty::probe::Probe;
use lofty::tag::{Accessor, ItemKey, Tag, TagExt};
use std::path::Path;

use crate::catalog::{ReleaseRecord, TrackRecord};
use crate::error::{Error, Result};

/// Current tags of an audio file, with empty strings for absent fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackTags {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub year: Option<u32>,
    pub track: Option<u32>,
    pub track_total: Option<u32>,
    pub disc: Option<u32>,
    pub disc_total: Option<u32>,
}

/// Options for controlling what metadata gets written
#[derive(Debug, Clone, Default)]
pub struct TagWriteOptions {
    /// Only write fields that are currently empty in the file
    pub fill_only: bool,
}

/// Result of a write operation
#[derive(Debug, Clone)]
pub struct WriteSummary {
    /// Number of fields that were updated
    pub fields_updated: usize,
    /// Fields that were skipped (already had values)
    pub fields_skipped: Vec<String>,
}

/// Render a number/total pair zero-padded to two digits.
///
/// Values of 100 or more keep all their digits.
pub fn render_pair(number: u32, total: u32) -> String {
    format!("{number:02}/{total:02}")
}

/// Read the current tags of an audio file.
pub fn read(path: &Path) -> Result<TrackTags> {
    let tagged_file = Probe::open(path)
        .map_err(|e| Error::metadata(path, e.to_string()))?
        .read()
        .map_err(|e| Error::metadata(path, e.to_string()))?;

    let tag = tagged_file
        .primary_tag()
        .or_else(|| tagged_file.first_tag());

    Ok(TrackTags {
        title: tag
            .and_then(|t| t.title().map(|s| s.to_string()))
            .unwrap_or_default(),
        artist: tag
            .and_then(|t| t.artist().map(|s| s.to_string()))
            .unwrap_or_default(),
        album: tag
            .and_then(|t| t.album().map(|s| s.to_string()))
            .unwrap_or_default(),
        genre: tag
            .and_then(|t| t.genre().map(|s| s.to_string()))
            .unwrap_or_default(),
        year: tag.and_then(|t| t.year()),
        track: tag.and_then(|t| t.track()),
        track_total: tag.and_then(|t| t.track_total()),
        disc: tag.and_then(|t| t.disk()),
        disc_total: tag.and_then(|t| t.disk_total()),
    })
}

/// Write one normalized track's tags to an audio file.
///
/// Release-level fields (album, album artist, year, genre, comment) come
/// from the release; the artist falls back to the release artist when the
/// track carries no credits of its own.
pub fn write_track_tags(
    path: &Path,
    release: &ReleaseRecord,
    track: &TrackRecord,
    options: &TagWriteOptions,
) -> Result<WriteSummary> {
    let mut tagged_file = Probe::open(path)
        .map_err(|e| Error::metadata(path, e.to_string()))?
        .read()
        .map_err(|e| Error::metadata(path, e.to_string()))?;

    // Get the primary tag type for this format, or create one
    let tag_type = tagged_file.primary_tag_type();
    let tag = if let Some(tag) = tagged_file.tag_mut(tag_type) {
        tag
    } else {
        tagged_file.insert_tag(Tag::new(tag_type));
        tagged_file.tag_mut(tag_type).expect("Just inserted tag")
    };

    let mut fields_updated = 0;
    let mut fields_skipped = Vec::new();

    // Helper to check if we should write a field
    let should_write =
        |existing: Option<&str>, field_name: &str, skipped: &mut Vec<String>| -> bool {
            if options.fill_only && existing.map(|s| !s.is_empty()).unwrap_or(false) {
                skipped.push(field_name.to_string());
                return false;
            }
            true
        };

    if should_write(tag.title().as_deref(), "title", &mut fields_skipped) {
        tag.set_title(track.title.clone());
        fields_updated += 1;
    }

    if should_write(tag.artist().as_deref(), "artist", &mut fields_skipped) {
        tag.set_artist(track.effective_artist(release).to_string());
        fields_updated += 1;
    }

    if should_write(
        tag.get_string(&ItemKey::AlbumArtist),
        "album_artist",
        &mut fields_skipped,
    ) {
        tag.insert_text(ItemKey::AlbumArtist, release.artist.clone());
        fields_updated += 1;
    }

    if should_write(tag.album().as_deref(), "album", &mut fields_skipped) {
        tag.set_album(release.title.clone());
        fields_updated += 1;
    }

    if !release.genre.is_empty()
        && should_write(tag.genre().as_deref(), "genre", &mut fields_skipped)
    {
        tag.set_genre(release.genre.clone());
        fields_updated += 1;
    }

    // An unknown year ("Unknown") does not parse and is not written
    if let Ok(year) = release.year.parse::<u32>() {
        if !options.fill_only || tag.year().is_none() {
            tag.set_year(year);
            fields_updated += 1;
        } else {
            fields_skipped.push("year".to_string());
        }
    }

    if !release.catno.is_empty()
        && should_write(tag.comment().as_deref(), "comment", &mut fields_skipped)
    {
        tag.set_comment(release.catno.clone());
        fields_updated += 1;
    }

    if should_write(
        tag.get_string(&ItemKey::TrackNumber),
        "track_number",
        &mut fields_skipped,
    ) {
        tag.insert_text(
            ItemKey::TrackNumber,
            render_pair(track.track_number, track.track_total),
        );
        fields_updated += 1;
    }

    if should_write(
        tag.get_string(&ItemKey::DiscNumber),
        "disc_number",
        &mut fields_skipped,
    ) {
        tag.insert_text(
            ItemKey::DiscNumber,
            render_pair(track.disc_number, track.disc_total),
        );
        fields_updated += 1;
    }

    tag.save_to_path(path, WriteOptions::default())
        .map_err(|e| Error::metadata(path, e.to_string()))?;

    Ok(WriteSummary {
        fields_updated,
        fields_skipped,
    })
}

/// Preview what changes would be made without actually writing
pub fn preview_write(
    path: &Path,
    release: &ReleaseRecord,
    track: &TrackRecord,
    options: &TagWriteOptions,
) -> Result<WritePreview> {
    let current = read(path)?;

    let mut changes = Vec::new();

    // Helper to add a change
    let mut add_change = |field: &str, current_val: &str, new_val: &str| {
        if new_val.is_empty() {
            return;
        }
        if !options.fill_only || current_val.is_empty() {
            changes.push(FieldChange {
                field: field.to_string(),
                current_value: current_val.to_string(),
                new_value: new_val.to_string(),
            });
        }
    };

    add_change("title", &current.title, &track.title);
    add_change("artist", &current.artist, track.effective_artist(release));
    add_change("album", &current.album, &release.title);
    add_change("genre", &current.genre, &release.genre);

    let current_year = current.year.map(|y| y.to_string()).unwrap_or_default();
    if release.year.parse::<u32>().is_ok() {
        add_change("year", &current_year, &release.year);
    }

    let current_track = match (current.track, current.track_total) {
        (Some(n), Some(t)) => render_pair(n, t),
        (Some(n), None) => n.to_string(),
        _ => String::new(),
    };
    add_change(
        "track_number",
        &current_track,
        &render_pair(track.track_number, track.track_total),
    );

    let current_disc = match (current.disc, current.disc_total) {
        (Some(n), Some(t)) => render_pair(n, t),
        (Some(n), None) => n.to_string(),
        _ => String::new(),
    };
    add_change(
        "disc_number",
        &current_disc,
        &render_pair(track.disc_number, track.disc_total),
    );

    Ok(WritePreview { changes })
}

/// A preview of changes that would be made
#[derive(Debug, Clone)]
pub struct WritePreview {
    pub changes: Vec<FieldChange>,
}

/// A single field change
#[derive(Debug, Clone)]
pub struct FieldChange {
    pub field: String,
    pub current_value: String,
    pub new_value: String,
}
