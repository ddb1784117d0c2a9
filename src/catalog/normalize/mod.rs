//! Release normalization: the ONLY place where Discogs DTOs are converted
//! to domain records.
//!
//! Raw release data is irregular: join conventions and name variations in
//! the artist credits, duplicate-name suffixes, per-format numbering
//! schemes with index entries mixed into the tracklist, multi-value label
//! and genre fields, reissue years. Everything downstream (tag writing,
//! filename building) gets the flat, uniform [`ReleaseRecord`] produced
//! here and never sees the raw shapes.

mod artists;
mod positions;

pub use artists::resolve_credits;
pub use positions::{TrackPosition, plan_positions};

use crate::catalog::discogs::dto;
use crate::catalog::domain::{CatalogError, FormatFamily, ReleaseRecord, TrackRecord};

/// Convert a raw release into a [`ReleaseRecord`].
///
/// `master_year` is the originally-issued year from the release's master,
/// when one exists; pass `None` when the release has no master or the
/// lookup was skipped.
pub fn to_release(
    raw: &dto::Release,
    master_year: Option<u64>,
) -> Result<ReleaseRecord, CatalogError> {
    let artist = resolve_credits(&raw.artists);

    // Labels and catalog numbers stay parallel: index i of catno belongs
    // to index i of label.
    let label = join_values(raw.labels.iter().map(|l| l.name.as_str()));
    let catno = join_values(raw.labels.iter().map(|l| l.catno.as_str()));

    let primary = raw.formats.first().ok_or_else(|| {
        CatalogError::MalformedReleaseData("release has no format descriptors".to_string())
    })?;
    let format = if primary.descriptions.is_empty() {
        primary.name.clone()
    } else {
        format!(
            "{}, {}",
            primary.name,
            join_values(primary.descriptions.iter().map(String::as_str))
        )
    };
    let format_quantity: u32 = primary.qty.parse().map_err(|_| {
        CatalogError::MalformedReleaseData(format!(
            "format quantity {:?} is not a number",
            primary.qty
        ))
    })?;
    if format_quantity == 0 {
        return Err(CatalogError::MalformedReleaseData(
            "format quantity must be at least 1".to_string(),
        ));
    }

    let genre = join_values(raw.genres.iter().map(String::as_str));
    let style = join_values(raw.styles.iter().map(String::as_str));
    let (year, original_year) = resolve_years(raw.year, master_year);

    // Index entries carry no position and no audio; they are dropped
    // before numbering.
    let family = FormatFamily::from_format(&format);
    let audio_tracks: Vec<&dto::Track> = raw
        .tracklist
        .iter()
        .filter(|t| !t.position.is_empty())
        .collect();
    let track_positions: Vec<&str> = audio_tracks.iter().map(|t| t.position.as_str()).collect();
    let planned = plan_positions(family, format_quantity, &track_positions)?;

    let tracks = audio_tracks
        .iter()
        .zip(planned)
        .map(|(track, pos)| TrackRecord {
            artist: resolve_credits(&track.artists),
            title: track.title.clone(),
            track_number: pos.track_number,
            track_total: pos.track_total,
            disc_number: pos.disc_number,
            disc_total: pos.disc_total,
        })
        .collect();

    Ok(ReleaseRecord {
        discogs_id: raw.id,
        artist,
        title: raw.title.clone(),
        label,
        catno,
        format,
        format_quantity,
        country: raw.country.clone().unwrap_or_default(),
        year,
        original_year,
        genre,
        style,
        tracks,
    })
}

/// Comma-join multi-value fields; a single value passes through untouched.
fn join_values<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.collect::<Vec<_>>().join(", ")
}

/// Resolve the (year, original_year) pair.
///
/// A source year of 0 means unknown: the year renders as "Unknown" and no
/// original year is derived, master or not. Otherwise original_year
/// defaults to the release year and is overridden by the master year when
/// one exists.
fn resolve_years(year: u64, master_year: Option<u64>) -> (String, String) {
    if year == 0 {
        return ("Unknown".to_string(), String::new());
    }
    let year = year.to_string();
    let original_year = match master_year.filter(|&y| y != 0) {
        Some(master) => master.to_string(),
        None => year.clone(),
    };
    (year, original_year)
}
