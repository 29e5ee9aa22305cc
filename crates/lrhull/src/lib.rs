//! Incremental planar convex hulls over a pluggable orientation predicate.
//!
//! The hull's topology depends only on the signs returned by a three-point
//! orientation test. Swapping the naive floating-point test for the
//! adaptive-precision one is the whole difference between a convex hull and a
//! self-overlapping polygon on near-collinear input.
//!
//! Modules
//! - [`predicate`]: `orient(r, q, p)` capability, [`Naive`] and [`Robust`],
//!   sign grids over ulp-spaced points.
//! - [`hull`]: [`IncrementalHull`] plus audit helpers.
//! - [`sample`]: seeded point clouds, shuffles, the fragile demo input.

pub mod hull;
pub mod predicate;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A planar point. Coordinates must be finite to enter a hull.
pub type Point = nalgebra::Vector2<f64>;

pub use hull::{HullCfg, HullError, IncrementalHull, Insertion, PointSequence, TiePolicy};
pub use predicate::{Naive, Orientation, OrientationPredicate, PredicateKind, Robust};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{
        canonical_cycle, contains, is_convex, signed_area2, violations, HullCfg, HullError,
        IncrementalHull, Insertion, PointSequence, TiePolicy, Violation,
    };
    pub use crate::predicate::{
        naive_orient, robust_orient, Naive, Orientation, OrientationPredicate, PredicateKind,
        Robust, SignGrid, SignGridCfg,
    };
    pub use crate::sample::{
        draw_cloud, fragile_demo_points, shuffled, CloudCfg, CloudKind, ReplayToken,
    };
    pub use crate::Point;
}
