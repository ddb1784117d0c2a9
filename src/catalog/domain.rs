//! Internal domain models for catalog releases.
//!
//! These types are OUR types - they don't change when the Discogs API
//! changes. API responses are converted into these via the normalize module,
//! and everything downstream (tagging, organizing) reads only these.

/// A fully normalized release, built once and read-only afterwards.
///
/// Multi-value source fields (labels, catalog numbers, genres, format
/// descriptions) are comma-joined strings here; the tag writer and the
/// filename builder both want flat text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRecord {
    /// Discogs release ID
    pub discogs_id: u64,
    /// Resolved release artist string
    pub artist: String,
    /// Release title
    pub title: String,
    /// Label name(s), comma-joined in declaration order
    pub label: String,
    /// Catalog number(s), order matching `label`
    pub catno: String,
    /// "<format name>, <comma-joined descriptions>"
    pub format: String,
    /// Declared quantity of the first format descriptor
    pub format_quantity: u32,
    /// Release country
    pub country: String,
    /// Release year, `"Unknown"` when the source year is 0
    pub year: String,
    /// Originally-issued year; equals `year` unless a master release
    /// carries an earlier one, empty when the year is unknown
    pub original_year: String,
    /// Genre(s), comma-joined
    pub genre: String,
    /// Style(s), comma-joined
    pub style: String,
    pub(crate) tracks: Vec<TrackRecord>,
}

impl ReleaseRecord {
    /// Ordered snapshot of the tracklist. Tracks are never removed or
    /// reordered after construction.
    pub fn tracks(&self) -> &[TrackRecord] {
        &self.tracks
    }
}

/// A single audio track of a normalized release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    /// Track-level artist string, empty when the track carries no credits
    pub artist: String,
    /// Track title
    pub title: String,
    /// 1-based track number within its disc
    pub track_number: u32,
    /// Number of tracks on this track's disc
    pub track_total: u32,
    /// 1-based disc number
    pub disc_number: u32,
    /// Number of discs in the release
    pub disc_total: u32,
}

impl TrackRecord {
    /// The artist to display for this track: its own credits when it has
    /// any, otherwise the release artist.
    pub fn effective_artist<'a>(&'a self, release: &'a ReleaseRecord) -> &'a str {
        if self.artist.is_empty() {
            &release.artist
        } else {
            &self.artist
        }
    }
}

/// Physical-medium classification governing track numbering.
///
/// Only CD releases use disc-hyphen position codes; vinyl positions use
/// side letters, so multi-record vinyl sets are one logical disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatFamily {
    Cd,
    Vinyl,
    Other,
}

impl FormatFamily {
    /// Classify a computed format string. Substring match, not exact:
    /// "CD, Album" is a CD.
    pub fn from_format(format: &str) -> Self {
        if format.contains("CD") {
            FormatFamily::Cd
        } else if format.contains("Vinyl") {
            FormatFamily::Vinyl
        } else {
            FormatFamily::Other
        }
    }
}

/// Errors from catalog lookup and normalization.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("Malformed release data: {0}")]
    MalformedReleaseData(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Release not found")]
    NotFound,

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("API request failed: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_family_substring_match() {
        assert_eq!(FormatFamily::from_format("CD, Album"), FormatFamily::Cd);
        assert_eq!(FormatFamily::from_format("CD"), FormatFamily::Cd);
        assert_eq!(
            FormatFamily::from_format("Vinyl, LP, Album"),
            FormatFamily::Vinyl
        );
        assert_eq!(FormatFamily::from_format("Cassette"), FormatFamily::Other);
    }

    #[test]
    fn test_tracks_snapshot_is_ordered() {
        let release = ReleaseRecord {
            discogs_id: 1,
            artist: "Artist".to_string(),
            title: "Title".to_string(),
            label: String::new(),
            catno: String::new(),
            format: "CD, Album".to_string(),
            format_quantity: 1,
            country: String::new(),
            year: "1999".to_string(),
            original_year: "1999".to_string(),
            genre: String::new(),
            style: String::new(),
            tracks: vec![
                TrackRecord {
                    artist: String::new(),
                    title: "One".to_string(),
                    track_number: 1,
                    track_total: 2,
                    disc_number: 1,
                    disc_total: 1,
                },
                TrackRecord {
                    artist: String::new(),
                    title: "Two".to_string(),
                    track_number: 2,
                    track_total: 2,
                    disc_number: 1,
                    disc_total: 1,
                },
            ],
        };

        let titles: Vec<_> = release.tracks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two"]);
    }
}
