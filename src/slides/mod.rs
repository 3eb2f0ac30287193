//! Slide candidates
//!
//! A slide shows either one horizontal photo or two distinct vertical photos.
//! This module generates the full universe of admissible candidates from a
//! photo collection; which candidates actually appear in the show, and in
//! what order, is decided later by the model and solver stages.

mod builder;
mod error;

pub use builder::build_candidates;
pub use error::ScaleError;

use crate::{Photo, TagSet};

/// One show unit: a single horizontal photo or a vertical pair.
///
/// Slides are generated, never user-supplied, and immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    photos: Vec<u32>,
    /// Union of the member photos' tag sets
    pub tags: TagSet,
}

impl Slide {
    /// Build a single-photo slide from a horizontal photo
    #[must_use]
    pub fn single(photo: &Photo) -> Self {
        debug_assert_eq!(photo.orientation, crate::Orientation::Horizontal);
        Self { photos: vec![photo.id], tags: photo.tags.clone() }
    }

    /// Build a paired slide from two distinct vertical photos
    #[must_use]
    pub fn pair(a: &Photo, b: &Photo) -> Self {
        debug_assert_eq!(a.orientation, crate::Orientation::Vertical);
        debug_assert_eq!(b.orientation, crate::Orientation::Vertical);
        debug_assert_ne!(a.id, b.id);
        Self {
            photos: vec![a.id, b.id],
            tags: a.tags.union(&b.tags).cloned().collect(),
        }
    }

    /// Member photo ids, in generation order
    #[must_use]
    pub fn photo_ids(&self) -> &[u32] {
        &self.photos
    }

    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.photos.len() == 2
    }
}
