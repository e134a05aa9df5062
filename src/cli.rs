//! Command-line interface parsing for dockwatch
//!
//! This module handles parsing of CLI arguments using clap, including
//! repeatable --station overrides, the e-bike column toggle, and the
//! cache controls.

use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

use crate::data::{Station, StationConfig};

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The station argument did not match the LABEL=ID form
    #[error("Invalid station '{0}'. Expected LABEL=ID, e.g. \"Métro Sherbrooke=19\"")]
    InvalidStation(String),
}

/// Dockwatch - view BIXI Montréal station occupancy from the terminal
#[derive(Parser, Debug)]
#[command(name = "dockwatch")]
#[command(about = "BIXI Montréal station occupancy with offline cache fallback")]
#[command(version)]
pub struct Cli {
    /// Station to display, as LABEL=ID (repeatable; replaces the defaults)
    ///
    /// Examples:
    ///   dockwatch --station "Métro Sherbrooke=19"
    ///   dockwatch --station Home=19 --station Work=77
    ///
    /// The ID must match the feed's station_id. Order given is display order.
    #[arg(long = "station", value_name = "LABEL=ID")]
    pub stations: Vec<String>,

    /// Hide the e-bike column
    #[arg(long)]
    pub no_ebikes: bool,

    /// Wipe the cache directory before running
    #[arg(long)]
    pub debug: bool,

    /// Use a specific cache directory instead of the platform default
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    /// Stations to display plus the e-bike toggle
    pub stations: StationConfig,
    /// Whether to force-clear the cache directory before use
    pub wipe_cache: bool,
    /// Cache directory override, if specified
    pub cache_dir: Option<PathBuf>,
}

/// Parses a LABEL=ID station argument into a Station.
///
/// # Arguments
/// * `s` - The station string from CLI
///
/// # Returns
/// * `Ok(Station)` if the string splits into a non-empty label and id
/// * `Err(CliError::InvalidStation)` otherwise
pub fn parse_station_arg(s: &str) -> Result<Station, CliError> {
    match s.split_once('=') {
        Some((label, id)) if !label.trim().is_empty() && !id.trim().is_empty() => {
            Ok(Station::new(label.trim(), id.trim()))
        }
        _ => Err(CliError::InvalidStation(s.to_string())),
    }
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// Without --station arguments the built-in default stations are used;
    /// otherwise the given stations replace them, in the order given.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let stations = if cli.stations.is_empty() {
            crate::data::default_stations()
        } else {
            cli.stations
                .iter()
                .map(|s| parse_station_arg(s))
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(StartupConfig {
            stations: StationConfig {
                stations,
                show_ebikes: !cli.no_ebikes,
            },
            wipe_cache: cli.debug,
            cache_dir: cli.cache_dir.clone(),
        })
    }
}
