//! Pipeline orchestration for dockwatch
//!
//! One pass per invocation: probe connectivity, resolve the icons and the
//! feed through the fetch-or-cache policy, record or read back the update
//! timestamp, and project the feed into display rows. Every fatal error
//! bubbles up to the run boundary so the caller never sees a half-populated
//! panel.

use chrono::{DateTime, Local};
use std::io;
use thiserror::Error;
use tracing::debug;

use crate::cache::CacheContext;
use crate::cli::StartupConfig;
use crate::data::{
    last_update, project, AssetClient, AssetError, ConnectivityProbe, DisplayRow, FeedClient,
    FeedError, IconSet, LastUpdateError, ProjectorError,
};

/// Errors that terminate a run with no partial output
#[derive(Debug, Error)]
pub enum AppError {
    /// No platform cache directory could be determined
    #[error("could not determine a cache directory for this platform")]
    NoCacheDir,

    /// Cache directory preparation failed
    #[error("failed to prepare the cache directory: {0}")]
    CacheInit(#[from] io::Error),

    /// Icon resolution failed
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// Feed resolution or parsing failed
    #[error(transparent)]
    Feed(#[from] FeedError),

    /// The offline update timestamp could not be read back
    #[error(transparent)]
    LastUpdate(#[from] LastUpdateError),

    /// A configured station was missing from the feed
    #[error(transparent)]
    Projector(#[from] ProjectorError),
}

/// The display-ready result handed to the presentation layer
#[derive(Debug)]
pub struct StationPanel {
    /// One row per configured station, in display order
    pub rows: Vec<DisplayRow>,
    /// Resolved icon bytes for the renderer
    pub icons: IconSet,
    /// Moment of the last successful online feed fetch
    pub updated_at: DateTime<Local>,
    /// Whether this run took the online branch
    pub online: bool,
}

/// Runs the whole pipeline once and produces a display-ready panel
///
/// Network and disk operations are awaited strictly in sequence; the run
/// never issues two requests concurrently. The connectivity result is
/// computed exactly once and threaded through every resource resolution.
pub async fn run(config: &StartupConfig) -> Result<StationPanel, AppError> {
    let cache = match &config.cache_dir {
        Some(dir) => CacheContext::with_dir(dir.clone()),
        None => CacheContext::new().ok_or(AppError::NoCacheDir)?,
    };
    cache.prepare(config.wipe_cache)?;

    let connectivity = ConnectivityProbe::new().check().await;

    let icons = AssetClient::new().load_icons(connectivity, &cache).await?;
    let feed = FeedClient::new().resolve(connectivity, &cache).await?;

    // Recorded only after the fetch portion of the run has succeeded
    let updated_at = if connectivity.is_online() {
        last_update::record(&cache)
    } else {
        last_update::read_last(&cache)?
    };

    let rows = project(&config.stations, &feed)?;
    debug!(rows = rows.len(), online = connectivity.is_online(), "panel ready");

    Ok(StationPanel {
        rows,
        icons,
        updated_at,
        online: connectivity.is_online(),
    })
}
