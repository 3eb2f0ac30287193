//! Slidr - a slideshow sequence optimizer
//!
//! This library arranges a collection of tagged photos into a slideshow that
//! maximizes the summed "interest" score between consecutive slides. A slide
//! is either one horizontal photo or a pair of distinct vertical photos; each
//! photo is used at most once and photos may be left out entirely.
//!
//! The pipeline runs in fixed stages with read-only handoff between them:
//!
//! 1. [`input`] parses the photo collection file into [`Photo`] records
//! 2. [`slides`] generates every admissible candidate slide
//! 3. [`score`] computes the pairwise transition-score matrix
//! 4. [`model`] formulates selection, adjacency and ordering as a
//!    constrained-optimization model
//! 5. [`solver`] hands the model to a [`solver::Backend`] implementation
//! 6. [`extract`] turns the raw variable assignment into a validated
//!    [`Solution`], which [`output`] writes to disk

use std::collections::BTreeSet;
use thiserror::Error;

pub mod cli;
pub mod config;
pub mod extract;
pub mod input;
pub mod model;
pub mod output;
pub mod score;
pub mod slides;
pub mod solver;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum SlidrError {
    /// Malformed photo collection file
    #[error("Input error: {0}")]
    Input(#[from] input::InputError),
    /// Candidate generation would blow past the configured safety bound
    #[error("Scale error: {0}")]
    Scale(#[from] slides::ScaleError),
    /// Solver backend failure
    #[error("Solver error: {0}")]
    Solve(#[from] solver::SolveError),
    /// Extracted sequence broke a structural invariant
    #[error("Invariant violation: {0}")]
    Invariant(#[from] extract::InvariantViolation),
    /// Malformed slideshow output file
    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Tag sets are ordered so iteration (and thus generated output) is stable
pub type TagSet = BTreeSet<String>;

/// Whether a photo is shown alone or must be paired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Fills a slide by itself
    Horizontal,
    /// Needs a second vertical photo to fill a slide
    Vertical,
}

/// One photo record, immutable once loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    /// Position in the input file, 0-based
    pub id: u32,
    pub orientation: Orientation,
    /// Deduplicated, case-sensitive keywords
    pub tags: TagSet,
}

impl Photo {
    /// Create a new Photo
    #[must_use]
    pub const fn new(id: u32, orientation: Orientation, tags: TagSet) -> Self {
        Self { id, orientation, tags }
    }
}

/// The finished slideshow in show order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    pub slides: Vec<slides::Slide>,
    /// Realized transition score over consecutive chained slides
    pub score: i64,
    /// True when the model had no feasible assignment (empty result)
    pub infeasible: bool,
    /// True when the sequence came from a heuristic or a time-limited run
    pub possibly_suboptimal: bool,
    /// Position-consecutive slide pairs not linked by an adjacency edge.
    /// Reported so callers can tell one contiguous chain from several.
    pub chain_breaks: usize,
}

impl Solution {
    /// The explicit empty result for a model with no feasible assignment
    #[must_use]
    pub fn infeasible() -> Self {
        Self { infeasible: true, ..Self::default() }
    }

    /// Photo ids in show order, one inner `Vec` per slide
    #[must_use]
    pub fn photo_ids(&self) -> Vec<Vec<u32>> {
        self.slides.iter().map(|s| s.photo_ids().to_vec()).collect()
    }
}

/// Run the full optimization pipeline over already-loaded photos.
///
/// An empty candidate universe (no horizontal photos and fewer than two
/// vertical ones) is a degenerate case, not an error: the result is an empty
/// [`Solution`] flagged infeasible.
///
/// # Errors
///
/// * [`SlidrError::Scale`] when candidate generation would exceed
///   `settings.max_candidates`
/// * [`SlidrError::Solve`] when the backend fails internally
/// * [`SlidrError::Invariant`] when the solved assignment decodes into a
///   structurally broken sequence (a modeling or backend bug)
pub fn compose(
    photos: &[Photo],
    settings: &config::Settings,
    backend: &dyn solver::Backend,
) -> Result<Solution, SlidrError> {
    let candidates = slides::build_candidates(photos, settings.max_candidates)?;
    if candidates.is_empty() {
        return Ok(Solution::infeasible());
    }

    let matrix = score::ScoreMatrix::build(&candidates);
    let show = model::ShowModel::formulate(candidates, matrix);
    let outcome = backend.solve(&show, settings.time_limit())?;

    extract::extract(&show, &outcome).map_err(Into::into)
}
