//! Testing utilities for slidr
//!
//! Shared constructors for photos, tag sets and formulated models.
//!
//! Only available when compiled with `cfg(test)`.

use crate::model::ShowModel;
use crate::score::ScoreMatrix;
use crate::slides::build_candidates;
use crate::{Orientation, Photo, TagSet};

/// Build a tag set from string literals
#[must_use]
pub fn tags(names: &[&str]) -> TagSet {
    names.iter().map(ToString::to_string).collect()
}

/// Shorthand for a horizontal photo
#[must_use]
pub fn horizontal(id: u32, tag_names: &[&str]) -> Photo {
    Photo::new(id, Orientation::Horizontal, tags(tag_names))
}

/// Shorthand for a vertical photo
#[must_use]
pub fn vertical(id: u32, tag_names: &[&str]) -> Photo {
    Photo::new(id, Orientation::Vertical, tags(tag_names))
}

/// Run candidate generation, scoring and formulation over a photo list.
///
/// # Panics
/// Panics if the photos exceed the generous test candidate bound.
#[must_use]
pub fn show_model(photos: &[Photo]) -> ShowModel {
    let candidates = build_candidates(photos, 10_000).expect("test input within bounds");
    let matrix = ScoreMatrix::build(&candidates);
    ShowModel::formulate(candidates, matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_sets_deduplicate() {
        assert_eq!(tags(&["a", "a", "b"]).len(), 2);
    }

    #[test]
    fn photo_shorthands_set_orientation() {
        assert_eq!(horizontal(0, &["a"]).orientation, Orientation::Horizontal);
        assert_eq!(vertical(1, &["a"]).orientation, Orientation::Vertical);
    }
}
