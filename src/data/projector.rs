//! Station projector
//!
//! Maps raw feed records to the display rows for the configured stations,
//! preserving the configuration's display order. The feed is assumed
//! complete for every configured station; a missing station is a fatal
//! configuration/data mismatch rather than a placeholder row.

use thiserror::Error;
use tracing::warn;

use super::{DisplayRow, FeedSnapshot, StationConfig};

/// Errors that can occur when projecting the feed
#[derive(Debug, Error)]
pub enum ProjectorError {
    /// A configured station was not present in the feed
    #[error("station '{label}' (id {station_id}) not found in the feed")]
    StationNotFound { label: String, station_id: String },
}

/// Projects the feed into one display row per configured station
///
/// Rows come back in the iteration order of `config.stations`. Classic
/// bikes are the total minus the e-bikes; an inconsistent feed where
/// e-bikes exceed the total yields a data-integrity warning and a count
/// clamped to zero rather than a failure.
pub fn project(
    config: &StationConfig,
    feed: &FeedSnapshot,
) -> Result<Vec<DisplayRow>, ProjectorError> {
    let mut rows = Vec::with_capacity(config.stations.len());

    for station in &config.stations {
        let record =
            feed.station(&station.station_id)
                .ok_or_else(|| ProjectorError::StationNotFound {
                    label: station.label.clone(),
                    station_id: station.station_id.clone(),
                })?;

        let ebikes = record.num_ebikes_available;
        let classic_bikes = match record.num_bikes_available.checked_sub(ebikes) {
            Some(count) => count,
            None => {
                warn!(
                    station = %station.label,
                    bikes = record.num_bikes_available,
                    ebikes,
                    "e-bike count exceeds total bikes; clamping classic count to zero"
                );
                0
            }
        };

        rows.push(DisplayRow {
            label: station.label.clone(),
            classic_bikes,
            ebikes,
            free_docks: record.num_docks_available,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Station, StationRecord};

    fn record(id: &str, bikes: u32, ebikes: u32, docks: u32) -> StationRecord {
        StationRecord {
            station_id: id.to_string(),
            num_bikes_available: bikes,
            num_ebikes_available: ebikes,
            num_docks_available: docks,
        }
    }

    fn config_of(entries: &[(&str, &str)]) -> StationConfig {
        StationConfig {
            stations: entries
                .iter()
                .map(|(label, id)| Station::new(*label, *id))
                .collect(),
            show_ebikes: true,
        }
    }

    #[test]
    fn test_projects_rows_in_config_order() {
        let config = config_of(&[("A", "1"), ("B", "2")]);
        let feed = FeedSnapshot {
            stations: vec![record("2", 1, 0, 4), record("1", 5, 2, 3)],
        };

        let rows = project(&config, &feed).expect("All stations are present");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "A", "Config order must win over feed order");
        assert_eq!(rows[1].label, "B");
    }

    #[test]
    fn test_concrete_projection_scenario() {
        let config = config_of(&[("A", "1"), ("B", "2")]);
        let feed = FeedSnapshot {
            stations: vec![record("1", 5, 2, 3), record("2", 0, 0, 10)],
        };

        let rows = project(&config, &feed).expect("All stations are present");

        assert_eq!(
            rows,
            vec![
                DisplayRow {
                    label: "A".to_string(),
                    classic_bikes: 3,
                    ebikes: 2,
                    free_docks: 3,
                },
                DisplayRow {
                    label: "B".to_string(),
                    classic_bikes: 0,
                    ebikes: 0,
                    free_docks: 10,
                },
            ]
        );
    }

    #[test]
    fn test_classic_count_can_be_zero() {
        let config = config_of(&[("All electric", "9")]);
        let feed = FeedSnapshot {
            stations: vec![record("9", 4, 4, 1)],
        };

        let rows = project(&config, &feed).expect("Station is present");
        assert_eq!(rows[0].classic_bikes, 0);
        assert_eq!(rows[0].ebikes, 4);
    }

    #[test]
    fn test_inconsistent_feed_clamps_to_zero() {
        let config = config_of(&[("Broken", "9")]);
        let feed = FeedSnapshot {
            stations: vec![record("9", 2, 5, 1)],
        };

        let rows = project(&config, &feed).expect("Clamp, not crash");
        assert_eq!(rows[0].classic_bikes, 0, "Negative count must clamp to zero");
        assert_eq!(rows[0].ebikes, 5);
    }

    #[test]
    fn test_unknown_station_is_fatal() {
        let config = config_of(&[("A", "1"), ("Ghost", "404")]);
        let feed = FeedSnapshot {
            stations: vec![record("1", 5, 2, 3)],
        };

        match project(&config, &feed) {
            Err(ProjectorError::StationNotFound { label, station_id }) => {
                assert_eq!(label, "Ghost");
                assert_eq!(station_id, "404");
            }
            other => panic!("Expected StationNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_feed_records_use_first_match() {
        let config = config_of(&[("A", "1")]);
        let feed = FeedSnapshot {
            stations: vec![record("1", 5, 2, 3), record("1", 0, 0, 0)],
        };

        let rows = project(&config, &feed).expect("Station is present");
        assert_eq!(rows[0].classic_bikes, 3);
        assert_eq!(rows[0].free_docks, 3);
    }
}
