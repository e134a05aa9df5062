//! Cache module for storing fetched resources to disk
//!
//! This module provides the cache context that persists icons, the raw
//! station-status feed, and the last-update timestamp as flat files. It
//! supports graceful degradation by serving the cached files verbatim when
//! the device is offline; entries never expire.

mod context;

pub use context::{CacheContext, CacheError};
