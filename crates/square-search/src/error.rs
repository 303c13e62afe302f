//! Error types for the square search
//!
//! Covers:
//! - Exhausting the search range without a qualifying square
//! - Rejected search configuration
//! - Reading or parsing configuration files

use std::path::PathBuf;

/// Main search error type
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// No qualifying square exists anywhere in the searched range
    #[error("No semi-magic squares found in the range of values [1, {val_max}]")]
    Exhausted {
        /// Exclusive upper bound that was searched
        val_max: u32,
    },

    /// Configuration values out of bounds
    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Worker pool could not be started
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl SearchError {
    /// Check if the search ran to completion and found nothing
    #[inline]
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }
}

/// Errors while loading a [`SearchConfig`](crate::SearchConfig)
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File that failed to load
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for a search configuration
    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
