//! Discogs API Data Transfer Objects
//!
//! These types match EXACTLY what the Discogs API returns (limited to the
//! fields we consume). DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the catalog module - convert to domain
//! types via the normalize module.
//!
//! API Reference: https://www.discogs.com/developers
//!
//! We use the /releases/{id} endpoint for full release data and
//! /masters/{id} to recover the originally-issued year of reissues.

use serde::{Deserialize, Serialize};

/// Release lookup response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Release {
    /// Discogs release ID
    pub id: u64,
    /// Release title
    pub title: String,
    /// Release-level artist credits
    #[serde(default)]
    pub artists: Vec<ArtistCredit>,
    /// Labels this release appeared on, each with its catalog number
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Format descriptors; the first one describes the primary medium
    #[serde(default)]
    pub formats: Vec<Format>,
    /// Country of release
    pub country: Option<String>,
    /// Release year; 0 (or absent) means unknown
    #[serde(default)]
    pub year: u64,
    /// Master release grouping reissues of the same material
    pub master_id: Option<u64>,
    /// Genre strings
    #[serde(default)]
    pub genres: Vec<String>,
    /// Style strings (finer-grained than genres)
    #[serde(default)]
    pub styles: Vec<String>,
    /// Tracklist entries, including non-audio index entries
    #[serde(default)]
    pub tracklist: Vec<Track>,
}

/// Artist credit on a release or track
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistCredit {
    /// Artist name as cataloged, possibly with a " (N)" disambiguation
    /// suffix for duplicate names
    pub name: String,
    /// Artist name variation - how the artist is credited on this
    /// release; empty when the main name applies
    #[serde(default)]
    pub anv: String,
    /// Join separator to the next credit (e.g. "," or "Feat."); empty on
    /// the last credit
    #[serde(default)]
    pub join: String,
}

/// Label entry with its catalog number
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Label {
    pub name: String,
    #[serde(default)]
    pub catno: String,
}

/// Format descriptor (medium, quantity, descriptions)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Format {
    /// Medium name (CD, Vinyl, Cassette, ...)
    pub name: String,
    /// Quantity of physical items, as a decimal string
    #[serde(default)]
    pub qty: String,
    /// Free-form descriptions (Album, Reissue, Remastered, ...)
    #[serde(default)]
    pub descriptions: Vec<String>,
}

/// Tracklist entry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Track {
    /// Position code: "7" or "1-7" for audio tracks, empty for index
    /// entries (sub-headings) which carry no audio
    #[serde(default)]
    pub position: String,
    /// Track title
    pub title: String,
    /// Track-level artist credits; empty when the release credits apply
    #[serde(default)]
    pub artists: Vec<ArtistCredit>,
}

/// Master release lookup response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Master {
    /// Discogs master ID
    pub id: u64,
    /// Year the material was originally issued
    #[serde(default)]
    pub year: u64,
}

/// Error response from the Discogs API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub message: String,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
