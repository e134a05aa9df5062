//! Icon asset client
//!
//! Resolves the four panel icons under the unified fetch-or-cache policy:
//! online runs fetch each icon from the asset base URL and overwrite its
//! cached file; offline runs read the cached bytes verbatim. A missing
//! cached icon while offline is fatal since no default assets are bundled.

use reqwest::Client;
use std::io;
use thiserror::Error;
use tracing::debug;

use crate::cache::{CacheContext, CacheError};

use super::{Connectivity, ASSETS_BASE_URL};

/// Icon filename for the provider logo
pub const LOGO_ICON: &str = "bixi.png";
/// Icon filename for classic bikes
pub const BIKE_ICON: &str = "bike.png";
/// Icon filename for e-bikes
pub const EBIKE_ICON: &str = "ebike.png";
/// Icon filename for free docks
pub const DOCK_ICON: &str = "parking.png";

/// Errors that can occur when resolving icon assets
#[derive(Debug, Error)]
pub enum AssetError {
    /// HTTP request failed on the online branch
    #[error("icon request for '{name}' failed: {source}")]
    RequestFailed {
        name: String,
        #[source]
        source: reqwest::Error,
    },

    /// Offline branch found no cached icon
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// Writing a fetched icon to the cache failed
    #[error("failed to cache icon '{name}': {source}")]
    CacheWrite {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// The resolved icon bytes handed to the presentation layer
#[derive(Debug, Clone)]
pub struct IconSet {
    /// Provider logo
    pub logo: Vec<u8>,
    /// Classic-bike icon
    pub bike: Vec<u8>,
    /// E-bike icon
    pub ebike: Vec<u8>,
    /// Free-dock icon
    pub dock: Vec<u8>,
}

/// Client for resolving icon assets
#[derive(Debug, Clone)]
pub struct AssetClient {
    client: Client,
}

impl Default for AssetClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetClient {
    /// Creates a new AssetClient with a default HTTP client
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Creates a new AssetClient with a custom HTTP client
    #[allow(dead_code)]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Resolves a single icon by filename
    pub async fn resolve_icon(
        &self,
        name: &str,
        connectivity: Connectivity,
        cache: &CacheContext,
    ) -> Result<Vec<u8>, AssetError> {
        match connectivity {
            Connectivity::Online => {
                let url = format!("{}{}", ASSETS_BASE_URL, name);
                let bytes = self
                    .client
                    .get(&url)
                    .send()
                    .await
                    .and_then(|response| response.error_for_status())
                    .map_err(|source| AssetError::RequestFailed {
                        name: name.to_string(),
                        source,
                    })?
                    .bytes()
                    .await
                    .map_err(|source| AssetError::RequestFailed {
                        name: name.to_string(),
                        source,
                    })?
                    .to_vec();
                cache
                    .write_bytes(name, &bytes)
                    .map_err(|source| AssetError::CacheWrite {
                        name: name.to_string(),
                        source,
                    })?;
                debug!(icon = name, size = bytes.len(), "icon fetched and cached");
                Ok(bytes)
            }
            Connectivity::Offline => Ok(cache.read_bytes(name)?),
        }
    }

    /// Resolves all four panel icons, awaited strictly in sequence
    pub async fn load_icons(
        &self,
        connectivity: Connectivity,
        cache: &CacheContext,
    ) -> Result<IconSet, AssetError> {
        let logo = self.resolve_icon(LOGO_ICON, connectivity, cache).await?;
        let bike = self.resolve_icon(BIKE_ICON, connectivity, cache).await?;
        let ebike = self.resolve_icon(EBIKE_ICON, connectivity, cache).await?;
        let dock = self.resolve_icon(DOCK_ICON, connectivity, cache).await?;

        Ok(IconSet {
            logo,
            bike,
            ebike,
            dock,
        })
    }
}
