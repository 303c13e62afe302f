//! Exhaustive search over Parker-shaped squares
//!
//! For every `(a, b, d)` in `[1, val_max)³` that passes the Parker
//! constraint, every filling of the free cells `c`, `e`, `g` over
//! `[1, val_max)` is tested against the qualification predicate. Each triple
//! yields its own ordered list of matches; the lists are concatenated in
//! triple order, so the result set is the same whether triples are searched
//! sequentially or on a rayon pool.

use crate::config::SearchConfig;
use crate::constraint::{valid_triples, ParkerTriple};
use crate::error::SearchError;
use crate::predicate::is_semi_magic_square_of_squares;
use crate::selection::Selection;
use crate::square::Square;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Every qualifying square for one triple, in `c`, `e`, `g` nested-loop
/// order
#[must_use]
pub fn enumerate_squares(triple: ParkerTriple, val_max: u32) -> Vec<Square> {
    let mut found = Vec::new();
    for c in 1..val_max {
        for e in 1..val_max {
            for g in 1..val_max {
                let square = triple.square(c, e, g);
                if is_semi_magic_square_of_squares(&square) {
                    found.push(square);
                }
            }
        }
    }
    found
}

/// Outcome of a full enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Exclusive upper bound that was searched
    pub val_max: u32,
    /// Qualifying squares in enumeration order
    pub matches: Vec<Square>,
    /// `(a, b, d)` combinations tested against the constraint
    pub triples_examined: u64,
    /// Combinations that passed the constraint
    pub valid_triples: usize,
    /// Complete squares tested against the predicate
    pub candidates_tested: u64,
    /// Wall-clock duration of the enumeration
    pub elapsed_ms: u64,
}

impl SearchReport {
    /// Whether no square qualified
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Apply `selection` to the matches
    #[must_use]
    pub fn select(&self, selection: Selection) -> Option<&Square> {
        selection.pick(&self.matches)
    }

    /// Apply `selection`, failing with [`SearchError::Exhausted`] when
    /// nothing qualified
    pub fn into_selected(self, selection: Selection) -> Result<Square, SearchError> {
        self.select(selection)
            .copied()
            .ok_or(SearchError::Exhausted {
                val_max: self.val_max,
            })
    }
}

/// Runs searches for one configuration
#[derive(Debug, Clone, Default)]
pub struct SquareSearch {
    config: SearchConfig,
}

impl SquareSearch {
    /// Create a search for `config`
    #[inline]
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Enumerate the whole range and report every match
    ///
    /// An empty result set is not an error here; see [`SquareSearch::find`].
    pub fn run(&self) -> Result<SearchReport, SearchError> {
        self.config.validate()?;
        let val_max = self.config.val_max;
        let started = Instant::now();

        tracing::info!(
            "Searching for semi-magic squares of squares in [1, {}) (parallel: {})",
            val_max,
            self.config.parallel
        );

        let triples = valid_triples(val_max);
        tracing::debug!("{} triples satisfy the Parker constraint", triples.len());

        let per_triple = if self.config.parallel {
            self.enumerate_parallel(&triples)?
        } else {
            triples
                .iter()
                .map(|&triple| search_triple(triple, val_max))
                .collect()
        };
        let matches: Vec<Square> = per_triple.into_iter().flatten().collect();

        let span = u64::from(val_max.saturating_sub(1));
        let per_axis = span * span * span;
        let report = SearchReport {
            val_max,
            triples_examined: per_axis,
            valid_triples: triples.len(),
            candidates_tested: per_axis.saturating_mul(triples.len() as u64),
            elapsed_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            matches,
        };

        tracing::info!(
            "Search finished: {} matches from {} valid triples in {}ms",
            report.matches.len(),
            report.valid_triples,
            report.elapsed_ms
        );
        Ok(report)
    }

    /// Enumerate and return the square chosen by the configured selection
    pub fn find(&self) -> Result<Square, SearchError> {
        let report = self.run()?;
        if report.is_empty() {
            tracing::warn!("No qualifying square in [1, {})", report.val_max);
        }
        report.into_selected(self.config.selection)
    }

    fn enumerate_parallel(&self, triples: &[ParkerTriple]) -> Result<Vec<Vec<Square>>, SearchError> {
        let val_max = self.config.val_max;
        // Indexed collect keeps triple order regardless of completion order.
        let work = || -> Vec<Vec<Square>> {
            triples
                .par_iter()
                .map(|&triple| search_triple(triple, val_max))
                .collect()
        };

        match self.config.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?;
                Ok(pool.install(work))
            }
            None => Ok(work()),
        }
    }
}

fn search_triple(triple: ParkerTriple, val_max: u32) -> Vec<Square> {
    let found = enumerate_squares(triple, val_max);
    if !found.is_empty() {
        tracing::debug!(
            "Triple (a={}, b={}, d={}) produced {} squares",
            triple.a(),
            triple.b(),
            triple.d(),
            found.len()
        );
    }
    found
}

/// Enumerate `[1, config.val_max)` and report every match
pub fn search_all(config: &SearchConfig) -> Result<SearchReport, SearchError> {
    SquareSearch::new(config.clone()).run()
}

/// Enumerate `[1, config.val_max)` and return the selected match
///
/// # Errors
/// [`SearchError::Exhausted`] when no square in the range qualifies.
pub fn search(config: &SearchConfig) -> Result<Square, SearchError> {
    SquareSearch::new(config.clone()).find()
}

/// Search the default range `[1, 100)` and return the last match
pub fn generate_magic_square_of_squares() -> Result<Square, SearchError> {
    search(&SearchConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::PARKER_SQUARE;

    #[test]
    fn parker_triple_finds_seed_square() {
        let triple = ParkerTriple::new(29, 1, 41).unwrap();
        let found = enumerate_squares(triple, 48);
        assert_eq!(found, vec![PARKER_SQUARE]);
    }

    #[test]
    fn small_triple_has_no_matches() {
        let triple = ParkerTriple::new(5, 1, 7).unwrap();
        assert!(enumerate_squares(triple, 8).is_empty());
    }

    #[test]
    fn tiny_range_exhausts() {
        let config = SearchConfig::new().with_val_max(2);
        let err = search(&config).unwrap_err();
        assert!(err.is_exhausted());
        assert_eq!(
            err.to_string(),
            "No semi-magic squares found in the range of values [1, 2]"
        );
    }

    #[test]
    fn report_counts_work_done() {
        let report = search_all(&SearchConfig::new().with_val_max(15)).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.triples_examined, 14 * 14 * 14);
        assert_eq!(report.valid_triples, 4);
        assert_eq!(report.candidates_tested, 4 * 14 * 14 * 14);
    }

    #[test]
    fn zero_range_reports_nothing() {
        let report = search_all(&SearchConfig::new().with_val_max(0)).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.triples_examined, 0);
        assert_eq!(report.candidates_tested, 0);
    }

    #[test]
    fn invalid_config_fails_before_searching() {
        let config = SearchConfig::new().with_threads(0);
        assert!(matches!(
            search_all(&config),
            Err(SearchError::InvalidConfig(_))
        ));
    }
}
