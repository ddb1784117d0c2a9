//! Release catalog module - fetches release metadata from Discogs and
//! normalizes it into a uniform domain model.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`discogs/dto.rs`) - Exact API response shapes
//! - **Normalize** (`normalize/`) - Converts DTOs to domain models; all of the
//!   artist-credit, track-numbering and date-resolution rules live here
//! - **Client** (`discogs/client.rs`) - HTTP client for the Discogs API
//!
//! This decoupling means:
//! 1. API changes don't ripple through our codebase
//! 2. We can test the normalization rules without any network
//! 3. The tag writer and organizer only ever see [`ReleaseRecord`]
//!
//! # Usage
//!
//! ```ignore
//! use spindle::catalog::DiscogsClient;
//!
//! let client = DiscogsClient::new(Some(token));
//! let release = client.fetch_release(1109943).await?;
//! println!("{} - {} ({})", release.artist, release.title, release.year);
//! ```

pub mod discogs;
pub mod domain;
pub mod normalize;
pub mod traits;

pub use discogs::DiscogsClient;
pub use domain::{CatalogError, FormatFamily, ReleaseRecord, TrackRecord};
pub use normalize::to_release;
pub use traits::CatalogApi;
