//! Station configuration for the display panel
//!
//! This module contains the default station list and the configuration
//! type consumed by the projector. Insertion order of the station list is
//! the display order of the panel.

/// A configured station: display label plus the feed's opaque identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Human-readable label shown on the panel
    pub label: String,
    /// Station identifier matching the feed's `station_id`
    pub station_id: String,
}

impl Station {
    /// Creates a new station entry
    pub fn new(label: impl Into<String>, station_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            station_id: station_id.into(),
        }
    }
}

/// Read-only configuration consumed by the projector and the printer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationConfig {
    /// Stations to display, in display order
    pub stations: Vec<Station>,
    /// Whether the e-bike column is shown on the panel
    pub show_ebikes: bool,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            stations: default_stations(),
            show_ebikes: true,
        }
    }
}

/// Returns the built-in default station list
///
/// Two downtown Montréal stations; overridable with repeated `--station`
/// arguments on the command line.
pub fn default_stations() -> Vec<Station> {
    vec![
        Station::new("Métro Sherbrooke", "19"),
        Station::new("ÉTS (Peel/N-D)", "77"),
    ]
}
