//! Last-update timestamp persistence
//!
//! The timestamp has the inverse responsibility split of the other cached
//! resources: the online branch computes "now", formats it, and writes it
//! to the cache (a write failure is swallowed, since a stale display date
//! is acceptable); the offline branch reads the previously recorded string
//! back into a display-ready moment.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use thiserror::Error;
use tracing::warn;

use crate::cache::{CacheContext, CacheError};

/// Cache filename holding the formatted last-update timestamp
pub const LAST_UPDATE_FILE: &str = "lastUpdate.txt";

/// Serialization format for the recorded timestamp (seconds precision)
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Errors that can occur when reading the recorded timestamp
#[derive(Debug, Error)]
pub enum LastUpdateError {
    /// Offline branch found no recorded timestamp
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// The recorded string could not be parsed back into a moment
    #[error("invalid recorded timestamp '{0}'")]
    InvalidTimestamp(String),
}

/// Records the current local time as the last successful update
///
/// Returns the moment that was recorded so the panel can display it.
/// Fire-and-forget: a cache write failure is logged and swallowed rather
/// than aborting the run.
pub fn record(cache: &CacheContext) -> DateTime<Local> {
    let now = Local::now();
    let formatted = now.format(TIMESTAMP_FORMAT).to_string();
    if let Err(error) = cache.write_string(LAST_UPDATE_FILE, &formatted) {
        warn!(%error, "failed to record last-update timestamp");
    }
    now
}

/// Reads back the last recorded update moment
///
/// Used on the offline branch; a missing or unparseable file is fatal.
pub fn read_last(cache: &CacheContext) -> Result<DateTime<Local>, LastUpdateError> {
    let text = cache.read_string(LAST_UPDATE_FILE)?;
    let naive = NaiveDateTime::parse_from_str(text.trim(), TIMESTAMP_FORMAT)
        .map_err(|_| LastUpdateError::InvalidTimestamp(text.clone()))?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or(LastUpdateError::InvalidTimestamp(text))
}
