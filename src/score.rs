//! Transition scoring
//!
//! The interest of showing slide B right after slide A is
//! `min(|A∩B|, |A\B|, |B\A|)` over their tag sets: a transition is only as
//! good as its weakest of shared tags, tags unique to the first slide, and
//! tags unique to the second. The metric is symmetric.
//!
//! [`ScoreMatrix`] precomputes the strict upper triangle over a candidate
//! list. Cells are independent, so rows are computed in parallel with rayon.

use rayon::prelude::*;

use crate::TagSet;
use crate::slides::Slide;

/// Transition score between two tag sets.
///
/// Zero whenever the sets share nothing, or one is a subset of the other
/// (no tags unique to that side).
#[must_use]
pub fn transition_score(a: &TagSet, b: &TagSet) -> u32 {
    let common = a.intersection(b).count();
    let only_a = a.len() - common;
    let only_b = b.len() - common;
    common.min(only_a).min(only_b) as u32
}

/// Symmetric pairwise scores over a candidate list, stored as the strict
/// upper triangle in a flat row-major vector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMatrix {
    n: usize,
    cells: Vec<u32>,
}

impl ScoreMatrix {
    /// Compute all pairwise scores for the candidate list.
    ///
    /// Rows are independent and computed in parallel; rayon's ordered collect
    /// keeps the flat layout identical to a sequential build.
    #[must_use]
    pub fn build(slides: &[Slide]) -> Self {
        let n = slides.len();
        let cells: Vec<u32> = (0..n)
            .into_par_iter()
            .flat_map_iter(|i| {
                let row = &slides[i].tags;
                slides[i + 1..]
                    .iter()
                    .map(move |other| transition_score(row, &other.tags))
            })
            .collect();

        Self { n, cells }
    }

    /// Number of candidate slides the matrix covers
    #[must_use]
    pub const fn len(&self) -> usize {
        self.n
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Score between candidates `i` and `j`, symmetric. The diagonal is
    /// unused by the model and reads as zero.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        if i == j {
            return 0;
        }
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        // row `lo` starts after the triangles of all earlier rows
        let offset = lo * self.n - lo * (lo + 1) / 2 + (hi - lo - 1);
        self.cells[offset]
    }
}
