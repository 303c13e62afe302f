//! Search configuration
//!
//! Built in code with the `with_*` methods or loaded from TOML:
//!
//! ```toml
//! val_max = 100
//! selection = "most-magic"
//! parallel = true
//! threads = 4
//! ```
//!
//! Missing keys take their defaults.

use crate::error::{ConfigError, SearchError};
use crate::selection::Selection;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default exclusive upper bound on cell values
pub const DEFAULT_VAL_MAX: u32 = 100;

/// Largest accepted `val_max`
pub const MAX_VAL_MAX: u32 = 65_536;

/// Square search configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Exclusive upper bound: every cell is searched over `[1, val_max)`
    pub val_max: u32,
    /// Which match the orchestrator returns
    pub selection: Selection,
    /// Spread the outer triple loop across worker threads
    pub parallel: bool,
    /// Worker count when parallel; `None` uses rayon's global pool
    pub threads: Option<usize>,
}

impl SearchConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With exclusive upper bound on cell values
    #[inline]
    #[must_use]
    pub fn with_val_max(mut self, val_max: u32) -> Self {
        self.val_max = val_max;
        self
    }

    /// With selection policy
    #[inline]
    #[must_use]
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// With or without parallel enumeration
    #[inline]
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// With a dedicated pool of `threads` workers
    #[inline]
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Check bounds before a search starts
    ///
    /// A `val_max` of 0 or 1 is accepted: the range is empty and the search
    /// reports exhaustion.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.val_max > MAX_VAL_MAX {
            return Err(SearchError::InvalidConfig(format!(
                "val_max {} exceeds the maximum of {MAX_VAL_MAX}",
                self.val_max
            )));
        }
        if self.threads == Some(0) {
            return Err(SearchError::InvalidConfig(
                "threads must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        Self::from_toml_str(&text)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            val_max: DEFAULT_VAL_MAX,
            selection: Selection::Last,
            parallel: true,
            threads: None,
        }
    }
}
