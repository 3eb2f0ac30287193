//! Candidate generation
//!
//! Every horizontal photo yields exactly one single-member slide; every
//! unordered pair of distinct vertical photos yields one paired slide. With V
//! vertical photos that is V*(V-1)/2 pairs, so the projected count is checked
//! against the configured bound before anything is materialized.

use super::{ScaleError, Slide};
use crate::{Orientation, Photo};

/// Generate the universe of admissible slide candidates.
///
/// The returned order is generation order (horizontals in file order, then
/// vertical pairs in lexicographic index order), not show order. An empty
/// photo collection yields an empty candidate list.
///
/// # Errors
/// Returns [`ScaleError::TooManyCandidates`] when the projected candidate
/// count exceeds `max_candidates`, before any candidate is built.
pub fn build_candidates(photos: &[Photo], max_candidates: usize) -> Result<Vec<Slide>, ScaleError> {
    let horizontals: Vec<&Photo> = photos
        .iter()
        .filter(|p| p.orientation == Orientation::Horizontal)
        .collect();
    let verticals: Vec<&Photo> = photos
        .iter()
        .filter(|p| p.orientation == Orientation::Vertical)
        .collect();

    let v = verticals.len();
    let projected = horizontals.len() + v * v.saturating_sub(1) / 2;
    if projected > max_candidates {
        return Err(ScaleError::TooManyCandidates { projected, bound: max_candidates });
    }

    let mut candidates = Vec::with_capacity(projected);

    for photo in &horizontals {
        candidates.push(Slide::single(photo));
    }

    for (k, a) in verticals.iter().enumerate() {
        for b in &verticals[k + 1..] {
            // the iteration cannot pair a photo with itself, but the no-reuse
            // rule is part of the slide contract, so keep the explicit guard
            if a.id == b.id {
                continue;
            }
            candidates.push(Slide::pair(a, b));
        }
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{horizontal, vertical};
    use std::collections::BTreeSet;

    #[test]
    fn every_horizontal_becomes_one_single_slide() {
        let photos = vec![
            horizontal(0, &["a"]),
            vertical(1, &["b"]),
            horizontal(2, &["c"]),
        ];
        let candidates = build_candidates(&photos, 100).unwrap();

        let singles: Vec<_> = candidates.iter().filter(|s| !s.is_pair()).collect();
        assert_eq!(singles.len(), 2);
        assert_eq!(singles[0].photo_ids(), &[0]);
        assert_eq!(singles[1].photo_ids(), &[2]);
    }

    #[test]
    fn vertical_pairs_are_generated_once_each() {
        let photos = vec![
            vertical(0, &["a"]),
            vertical(1, &["b"]),
            vertical(2, &["c"]),
            vertical(3, &["d"]),
        ];
        let candidates = build_candidates(&photos, 100).unwrap();

        // 4 verticals -> C(4,2) = 6 pairs
        assert_eq!(candidates.len(), 6);
        let member_sets: BTreeSet<Vec<u32>> = candidates
            .iter()
            .map(|s| {
                let mut ids = s.photo_ids().to_vec();
                ids.sort_unstable();
                ids
            })
            .collect();
        // no duplicates, no self-pairs
        assert_eq!(member_sets.len(), 6);
        assert!(member_sets.iter().all(|ids| ids[0] != ids[1]));
    }

    #[test]
    fn pair_tags_are_the_union() {
        let photos = vec![vertical(0, &["a", "b"]), vertical(1, &["b", "c"])];
        let candidates = build_candidates(&photos, 100).unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].tags, crate::testing::tags(&["a", "b", "c"]));
    }

    #[test]
    fn lone_vertical_yields_nothing() {
        let photos = vec![vertical(0, &["a"])];
        assert!(build_candidates(&photos, 100).unwrap().is_empty());
    }

    #[test]
    fn empty_collection_yields_empty_list() {
        assert!(build_candidates(&[], 100).unwrap().is_empty());
    }

    #[test]
    fn scale_guard_fires_before_generation() {
        // 100 verticals project to 4950 pairs
        let photos: Vec<_> = (0..100).map(|i| vertical(i, &["t"])).collect();
        let err = build_candidates(&photos, 1000).unwrap_err();
        match err {
            ScaleError::TooManyCandidates { projected, bound } => {
                assert_eq!(projected, 4950);
                assert_eq!(bound, 1000);
            }
        }
    }

    #[test]
    fn bound_is_inclusive() {
        let photos: Vec<_> = (0..10).map(|i| vertical(i, &["t"])).collect();
        assert_eq!(build_candidates(&photos, 45).unwrap().len(), 45);
        assert!(build_candidates(&photos, 44).is_err());
    }
}
