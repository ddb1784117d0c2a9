//! Discogs API integration
//!
//! Fetches full release data (and the master release backing reissues)
//! from the Discogs database and hands it to the normalize module.
//!
//! API docs: https://www.discogs.com/developers

pub mod dto;
mod client;

pub use client::DiscogsClient;
