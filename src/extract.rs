//! Sequence extraction
//!
//! Turns a raw solver assignment back into an ordered slideshow. Selection is
//! read as `x > 0.5` (tolerating solver numeric rounding), slides are ordered
//! by their resolved position, and the structural invariants are checked:
//!
//! - adjacency edges only between selected slides, at most one predecessor
//!   and one successor each (a broken check means a modeling or backend bug
//!   and fails loudly)
//! - no photo appears twice across the sequence
//!
//! Position-consecutive slides without an active adjacency edge are legal
//! solver output (the model forbids branching, not disconnected sub-chains);
//! they are counted as `chain_breaks` on the [`Solution`] so callers see the
//! gaps instead of silently losing them.

use thiserror::Error;

use crate::Solution;
use crate::model::ShowModel;
use crate::solver::{Outcome, SolveStatus};

/// A structural defect in the solved assignment. Never recoverable: it means
/// the model or the backend produced garbage, not that the input was bad.
#[derive(Debug, Error)]
pub enum InvariantViolation {
    /// Assignment vector does not cover the model's variables
    #[error("assignment covers {got} variables, model has {want}")]
    AssignmentSize { got: usize, want: usize },

    /// An adjacency edge touches a slide that is not selected
    #[error("adjacency {from} -> {to} is active but not both slides are selected")]
    DanglingAdjacency { from: usize, to: usize },

    /// A slide has more than one predecessor or successor
    #[error("slide {slide} has more than one predecessor or successor")]
    Branching { slide: usize },

    /// The same photo appears in two selected slides
    #[error("photo {photo} appears more than once in the sequence")]
    DuplicatePhoto { photo: u32 },
}

/// Interpret a solve outcome as an ordered, validated [`Solution`].
///
/// An infeasible outcome maps to the explicit empty solution. Any outcome
/// whose status is not [`SolveStatus::Optimal`], or that hit its time limit,
/// is flagged `possibly_suboptimal`.
///
/// # Errors
/// Returns [`InvariantViolation`] when the assignment is structurally broken.
pub fn extract(show: &ShowModel, outcome: &Outcome) -> Result<Solution, InvariantViolation> {
    if outcome.status == SolveStatus::Infeasible {
        return Ok(Solution::infeasible());
    }

    let n = show.len();
    let values = &outcome.values;
    let want = show.model().var_count();
    if values.len() != want {
        return Err(InvariantViolation::AssignmentSize { got: values.len(), want });
    }

    let selected: Vec<bool> = (0..n).map(|i| values[show.x(i).index()] > 0.5).collect();

    // degree counts over active edges, and the dangling-edge check
    let mut out_degree = vec![0usize; n];
    let mut in_degree = vec![0usize; n];
    for i in 0..n {
        for j in 0..n {
            if i == j || values[show.y(i, j).index()] <= 0.5 {
                continue;
            }
            if !selected[i] || !selected[j] {
                return Err(InvariantViolation::DanglingAdjacency { from: i, to: j });
            }
            out_degree[i] += 1;
            in_degree[j] += 1;
        }
    }
    for i in 0..n {
        if out_degree[i] > 1 || in_degree[i] > 1 {
            return Err(InvariantViolation::Branching { slide: i });
        }
    }

    // show order: resolved position ascending, slide index as a stable tie-break
    let mut ordered: Vec<usize> = (0..n).filter(|&i| selected[i]).collect();
    ordered.sort_by_key(|&i| (values[show.pos(i).index()].round() as i64, i));

    // each photo at most once across the whole sequence
    let mut seen = std::collections::BTreeSet::new();
    for &i in &ordered {
        for &photo in show.slides()[i].photo_ids() {
            if !seen.insert(photo) {
                return Err(InvariantViolation::DuplicatePhoto { photo });
            }
        }
    }

    // realized score counts active consecutive edges; missing edges are gaps
    let mut score = 0i64;
    let mut chain_breaks = 0usize;
    for pair in ordered.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if values[show.y(a, b).index()] > 0.5 {
            score += i64::from(show.scores().get(a, b));
        } else {
            chain_breaks += 1;
        }
    }

    Ok(Solution {
        slides: ordered.iter().map(|&i| show.slides()[i].clone()).collect(),
        score,
        infeasible: false,
        possibly_suboptimal: outcome.status != SolveStatus::Optimal || outcome.time_limit_hit,
        chain_breaks,
    })
}
