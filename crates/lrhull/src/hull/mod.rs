//! Incremental planar convex hull over a pluggable orientation predicate.
//!
//! Purpose
//! - Maintain a convex polygon while points arrive one at a time, querying only
//!   the sign of `orient(r, tail, head)` for each hull edge.
//! - Make the dependence on predicate correctness observable: the same input
//!   under [`Naive`](crate::predicate::Naive) and
//!   [`Robust`](crate::predicate::Robust) can produce different hulls.
//!
//! Algorithm (per insertion, O(n) in hull size)
//! - Edges with `orient(r, tail, head) >= 0` are hidden (r on the inner side or
//!   on the supporting line); the others are visible.
//! - One cyclic scan finds the hidden→visible and visible→hidden transitions.
//!   None found: r is inside or on the boundary, no-op.
//! - The vertices strictly between the two tangent vertices are replaced by r.
//!   The replaced run is either contiguous or wraps past index 0.
//!
//! Conventions
//! - Vertex order is positive under the predicate (counter-clockwise on a
//!   y-down screen); see [`crate::predicate`].
//! - Collinear tangent vertices are kept or pruned per [`TiePolicy`].
//! - Mutation needs `&mut self`; concurrent writers must serialize externally.

mod builder;
pub mod check;
mod sequence;
mod types;

pub use builder::IncrementalHull;
pub use check::{canonical_cycle, contains, is_convex, signed_area2, violations, Violation};
pub use sequence::PointSequence;
pub use types::{HullCfg, HullError, Insertion, ParseTiePolicyError, TiePolicy};
