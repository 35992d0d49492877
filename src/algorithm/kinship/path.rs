//! Relation paths and their simplification
//!
//! A relation path is the ordered sequence of edge kinds walked from a root
//! person to a target person. Before labeling, the path is simplified:
//! father and mother steps both become generic parent markers, and an
//! upward step immediately followed by a downward one (through a shared
//! parent) collapses into a single sibling marker.

use smallvec::SmallVec;

/// Maximum number of edges a relation path may span. Longer paths are
/// abandoned, which bounds the search on malformed or cyclic graphs.
pub const MAX_RELATION_DEPTH: usize = 10;

/// One edge kind in a traversal from root towards target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationStep {
    /// To the current person's father
    Father,
    /// To the current person's mother
    Mother,
    /// To one of the current person's spouses
    Spouse,
    /// To one of the current person's children
    Child,
}

/// Marker in a simplified relation path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationMarker {
    /// One generation up
    Parent,
    /// One generation down
    Child,
    /// Across a marriage
    Spouse,
    /// Up through a shared parent and back down
    Sibling,
}

/// A raw relation path; inline storage covers the depth cap
pub type RelationPath = SmallVec<[RelationStep; MAX_RELATION_DEPTH]>;

/// A simplified relation path
pub type MarkerPath = SmallVec<[RelationMarker; MAX_RELATION_DEPTH]>;

/// Simplify a raw path into generation/sibling markers
#[must_use]
pub fn simplify(path: &[RelationStep]) -> MarkerPath {
    let mapped: MarkerPath = path
        .iter()
        .map(|step| match step {
            RelationStep::Father | RelationStep::Mother => RelationMarker::Parent,
            RelationStep::Spouse => RelationMarker::Spouse,
            RelationStep::Child => RelationMarker::Child,
        })
        .collect();

    let mut simplified = MarkerPath::new();
    let mut i = 0;
    while i < mapped.len() {
        if mapped[i] == RelationMarker::Parent && mapped.get(i + 1) == Some(&RelationMarker::Child)
        {
            simplified.push(RelationMarker::Sibling);
            i += 2;
        } else {
            simplified.push(mapped[i]);
            i += 1;
        }
    }
    simplified
}
