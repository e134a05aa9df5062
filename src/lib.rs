//! Dockwatch Library
//!
//! This module exposes the pipeline, cache, and CLI modules for use in
//! integration tests.

pub mod app;
pub mod cache;
pub mod cli;
pub mod data;
