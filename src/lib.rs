//! Changelog entry extraction and version resolution
//!
//! - [`changelog`]: Pure parsing and lookup over changelog text
//! - [`source`]: Local and remote document sources, and the selector between them
//! - [`config`]: JSON configuration and data directory paths
//! - [`logging`]: File-backed tracing subscriber
//! - [`output`]: Plain-text and JSON rendering

pub mod changelog;
pub mod config;
pub mod logging;
pub mod output;
pub mod source;
