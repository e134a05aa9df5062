//! Cache context owning the on-disk resource directory
//!
//! Provides a `CacheContext` that stores each named resource (icon bytes,
//! feed JSON text, last-update timestamp) as a flat file under a single
//! cache directory. Files are overwritten on every successful online fetch
//! and read verbatim when offline; there is no expiry policy.

use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading from the cache
#[derive(Debug, Error)]
pub enum CacheError {
    /// The named resource has never been cached
    #[error("no cached copy of '{name}'; run at least once while online")]
    Missing { name: String },

    /// Filesystem error while reading a cache file
    #[error("failed to read cached '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// Manages the flat-file resource cache on disk
///
/// The context stores one file per resource under a platform cache
/// directory (`~/.cache/dockwatch/` on Linux, or the equivalent path on
/// other platforms). It is constructed once per run and threaded through
/// every resource resolution; no locking is performed since a run is
/// single-threaded and overlapping external invocations are an accepted
/// limitation.
#[derive(Debug, Clone)]
pub struct CacheContext {
    /// Directory where cache files are stored
    cache_dir: PathBuf,
}

impl CacheContext {
    /// Creates a new CacheContext using the platform cache directory
    ///
    /// Returns `None` if the cache directory cannot be determined
    /// (e.g., no home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "dockwatch")?;
        let cache_dir = project_dirs.cache_dir().to_path_buf();
        Some(Self { cache_dir })
    }

    /// Creates a new CacheContext with a custom cache directory
    ///
    /// Used for testing and for the `--cache-dir` override.
    pub fn with_dir(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    /// Prepares the cache directory for this run
    ///
    /// Creates the directory if absent. When `wipe` is set (debug mode),
    /// the whole directory is removed first, discarding every cached
    /// resource.
    pub fn prepare(&self, wipe: bool) -> io::Result<()> {
        if wipe && self.cache_dir.exists() {
            fs::remove_dir_all(&self.cache_dir)?;
        }
        fs::create_dir_all(&self.cache_dir)
    }

    /// Returns the path to the cache file for the given resource name
    fn entry_path(&self, name: &str) -> PathBuf {
        self.cache_dir.join(name)
    }

    /// Returns whether the named resource has a cached file
    pub fn contains(&self, name: &str) -> bool {
        self.entry_path(name).exists()
    }

    /// Writes raw bytes for the named resource, overwriting any prior file
    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> io::Result<()> {
        fs::write(self.entry_path(name), bytes)
    }

    /// Reads the raw bytes cached for the named resource
    ///
    /// A missing file is a `CacheError::Missing`, which is fatal on the
    /// offline branch since no default asset is bundled.
    pub fn read_bytes(&self, name: &str) -> Result<Vec<u8>, CacheError> {
        fs::read(self.entry_path(name)).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => CacheError::Missing {
                name: name.to_string(),
            },
            _ => CacheError::Io {
                name: name.to_string(),
                source,
            },
        })
    }

    /// Writes a text resource, overwriting any prior file
    pub fn write_string(&self, name: &str, text: &str) -> io::Result<()> {
        self.write_bytes(name, text.as_bytes())
    }

    /// Reads a text resource cached for the named resource
    pub fn read_string(&self, name: &str) -> Result<String, CacheError> {
        let bytes = self.read_bytes(name)?;
        String::from_utf8(bytes).map_err(|e| CacheError::Io {
            name: name.to_string(),
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })
    }
}
