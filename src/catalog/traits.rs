//! Trait definitions for catalog clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real Discogs client, while tests can
//! substitute mock implementations.

use async_trait::async_trait;

use super::domain::{CatalogError, ReleaseRecord};

/// Trait for release lookup in an external catalog.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch a release by its catalog ID, fully normalized.
    async fn fetch_release(&self, release_id: u64) -> Result<ReleaseRecord, CatalogError>;
}

#[async_trait]
impl CatalogApi for super::discogs::DiscogsClient {
    async fn fetch_release(&self, release_id: u64) -> Result<ReleaseRecord, CatalogError> {
        self.fetch_release(release_id).await
    }
}

/// Mock catalog client for testing.
#[cfg(test)]
pub mod mocks {
    use super::*;
    use crate::catalog::domain::TrackRecord;

    /// Mock catalog that returns a predefined release or error.
    pub struct MockCatalog {
        /// Release to return from fetch_release
        pub release: Option<ReleaseRecord>,
        /// Error to return (takes precedence over release)
        pub error: Option<CatalogError>,
    }

    impl MockCatalog {
        /// Create a mock that returns a small single-disc release.
        pub fn with_release(artist: &str, title: &str, track_titles: &[&str]) -> Self {
            let track_total = track_titles.len() as u32;
            let tracks = track_titles
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
                .collect();
            Self {
                release: Some(ReleaseRecord {
                    discogs_id: 1,
                    artist: artist.to_string(),
                    title: title.to_string(),
                    label: "Mock Label".to_string(),
                    catno: "MOCK001".to_string(),
                    format: "CD, Album".to_string(),
                    format_quantity: 1,
                    country: "US".to_string(),
                    year: "1999".to_string(),
                    original_year: "1999".to_string(),
                    genre: "Electronic".to_string(),
                    style: String::new(),
                    tracks,
                }),
                error: None,
            }
        }

        /// Create a mock that reports the release as missing.
        pub fn not_found() -> Self {
            Self {
                release: None,
                error: Some(CatalogError::NotFound),
            }
        }
    }

    #[async_trait]
    impl CatalogApi for MockCatalog {
        async fn fetch_release(&self, _release_id: u64) -> Result<ReleaseRecord, CatalogError> {
            if let Some(ref err) = self.error {
                return Err(err.clone());
            }
            self.release.clone().ok_or(CatalogError::NotFound)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_catalog_release() {
            let mock = MockCatalog::with_release("Autechre", "Amber", &["Montreal", "Silverside"]);
            let release = mock.fetch_release(1).await.unwrap();
            assert_eq!(release.artist, "Autechre");
            assert_eq!(release.tracks().len(), 2);
            assert_eq!(release.tracks()[1].track_number, 2);
        }

        #[tokio::test]
        async fn test_mock_catalog_not_found() {
            let mock = MockCatalog::not_found();
            let result = mock.fetch_release(1).await;
            assert!(matches!(result, Err(CatalogError::NotFound)));
        }
    }
}
