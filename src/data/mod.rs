//! Core data models for dockwatch
//!
//! This module contains the data types used throughout the application for
//! representing the GBFS station-status feed, the configured stations, and
//! the projected display rows.

pub mod assets;
pub mod feed;
pub mod last_update;
pub mod probe;
pub mod projector;
pub mod stations;

pub use assets::{AssetClient, AssetError, IconSet};
pub use feed::{FeedClient, FeedError};
pub use last_update::LastUpdateError;
pub use probe::{Connectivity, ConnectivityProbe};
pub use projector::{project, ProjectorError};
pub use stations::{default_stations, Station, StationConfig};

use serde::Deserialize;

/// Base URL for the widget asset files (icons and the health-check file)
pub const ASSETS_BASE_URL: &str = "https://lab.deltaplane.dev/bixiwidget/assets/";

/// A single station entry from the GBFS station-status feed
///
/// Only the fields this application consumes are modeled; every other
/// field in the feed is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StationRecord {
    /// Opaque station identifier used by the feed
    pub station_id: String,
    /// Total bikes available at the station, e-bikes included
    pub num_bikes_available: u32,
    /// E-bikes available at the station
    pub num_ebikes_available: u32,
    /// Free docks available at the station
    pub num_docks_available: u32,
}

/// A parsed snapshot of the station-status feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSnapshot {
    /// All station records, in feed order
    pub stations: Vec<StationRecord>,
}

impl FeedSnapshot {
    /// Looks up a station record by its feed identifier
    ///
    /// Returns the first match when the feed contains duplicate ids; the
    /// feed is trusted to be well-formed upstream.
    pub fn station(&self, station_id: &str) -> Option<&StationRecord> {
        self.stations.iter().find(|s| s.station_id == station_id)
    }
}

/// One projected row of the display panel, derived per configured station
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Human-readable station label from the configuration
    pub label: String,
    /// Classic (non-electric) bikes available
    pub classic_bikes: u32,
    /// E-bikes available
    pub ebikes: u32,
    /// Free docks available
    pub free_docks: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_lookup_finds_exact_id() {
        let feed = FeedSnapshot {
            stations: vec![
                StationRecord {
                    station_id: "19".to_string(),
                    num_bikes_available: 5,
                    num_ebikes_available: 2,
                    num_docks_available: 3,
                },
                StationRecord {
                    station_id: "77".to_string(),
                    num_bikes_available: 1,
                    num_ebikes_available: 0,
                    num_docks_available: 9,
                },
            ],
        };

        let record = feed.station("77").expect("Station 77 should be present");
        assert_eq!(record.num_docks_available, 9);
        assert!(feed.station("190").is_none(), "Lookup must be an exact match");
    }

    #[test]
    fn test_station_lookup_first_match_wins_on_duplicates() {
        let feed = FeedSnapshot {
            stations: vec![
                StationRecord {
                    station_id: "19".to_string(),
                    num_bikes_available: 5,
                    num_ebikes_available: 2,
                    num_docks_available: 3,
                },
                StationRecord {
                    station_id: "19".to_string(),
                    num_bikes_available: 0,
                    num_ebikes_available: 0,
                    num_docks_available: 0,
                },
            ],
        };

        let record = feed.station("19").expect("Station 19 should be present");
        assert_eq!(record.num_bikes_available, 5, "First record should win");
    }
}
