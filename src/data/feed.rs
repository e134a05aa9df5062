//! GBFS station-status feed client
//!
//! Fetches the BIXI Montréal station-status document and parses it into a
//! `FeedSnapshot`. When online the raw response text is written to the
//! cache before parsing; when offline the cached text is read back and
//! parsed instead. A fetch failure on the online branch is fatal by
//! design: once online, a failed fetch indicates an upstream problem
//! rather than missing connectivity, and falling back to the cache would
//! mask staleness indefinitely.

use reqwest::Client;
use serde::Deserialize;
use std::io;
use thiserror::Error;
use tracing::debug;

use crate::cache::{CacheContext, CacheError};

use super::{Connectivity, FeedSnapshot, StationRecord};

/// Fixed URL of the GBFS station-status feed
const STATION_STATUS_URL: &str = "https://gbfs.velobixi.com/gbfs/fr/station_status.json";

/// Cache filename holding the raw feed JSON text
pub const STATION_STATUS_FILE: &str = "station_status.json";

/// Errors that can occur when resolving the feed
#[derive(Debug, Error)]
pub enum FeedError {
    /// HTTP request failed on the online branch
    #[error("feed request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Feed JSON (live or cached) could not be parsed
    #[error("failed to parse station-status feed: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Offline branch found no cached feed
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// Writing the fetched feed to the cache failed
    #[error("failed to cache the fetched feed: {0}")]
    CacheWrite(#[source] io::Error),
}

/// Client for resolving the station-status feed
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedClient {
    /// Creates a new FeedClient with a default HTTP client
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Creates a new FeedClient with a custom HTTP client
    #[allow(dead_code)]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Resolves the current feed snapshot for this run
    ///
    /// Online branch: fetch the feed, overwrite the cached copy with the
    /// raw response text, and parse it. Offline branch: read the cached
    /// text and parse it; a missing cache file is fatal.
    pub async fn resolve(
        &self,
        connectivity: Connectivity,
        cache: &CacheContext,
    ) -> Result<FeedSnapshot, FeedError> {
        let text = match connectivity {
            Connectivity::Online => {
                let text = self
                    .client
                    .get(STATION_STATUS_URL)
                    .send()
                    .await?
                    .error_for_status()?
                    .text()
                    .await?;
                cache
                    .write_string(STATION_STATUS_FILE, &text)
                    .map_err(FeedError::CacheWrite)?;
                text
            }
            Connectivity::Offline => cache.read_string(STATION_STATUS_FILE)?,
        };

        let snapshot = parse_feed(&text)?;
        debug!(stations = snapshot.stations.len(), "feed resolved");
        Ok(snapshot)
    }
}

/// Parses raw feed text into a `FeedSnapshot`
///
/// Extra fields in the document are ignored; only the station list and
/// the availability counts this application consumes are extracted.
pub fn parse_feed(text: &str) -> Result<FeedSnapshot, serde_json::Error> {
    let response: GbfsStationStatus = serde_json::from_str(text)?;
    Ok(FeedSnapshot {
        stations: response.data.stations,
    })
}

/// Raw GBFS station-status response structure
#[derive(Debug, Deserialize)]
struct GbfsStationStatus {
    data: GbfsData,
}

/// Payload wrapper in the GBFS document
#[derive(Debug, Deserialize)]
struct GbfsData {
    stations: Vec<StationRecord>,
}
