//! Orientation predicates (left/right tests on three planar points).
//!
//! Purpose
//! - One capability, two interchangeable implementations: [`Naive`] (plain `f64`
//!   cross product) and [`Robust`] (adaptive-precision arithmetic whose sign is
//!   always the exact sign).
//! - Hull construction only looks at the sign; magnitudes are informational.
//!
//! Convention
//! - `orient(r, q, p) = (p.x−r.x)(q.y−r.y) − (p.y−r.y)(q.x−r.x)`, i.e. twice the
//!   signed area of the triangle `(r, q, p)`.
//! - Positive when `p` lies left of the directed line `r→q` in screen
//!   coordinates (y axis pointing down), negative when right, zero when the
//!   three points are collinear. The value is invariant under cyclic rotation
//!   of the arguments and flips sign under a transposition.
//!
//! Any `Fn(&Point, &Point, &Point) -> f64` is a predicate too, so tests and
//! callers can inject instrumented or adversarial variants.

mod grid;

pub use grid::{SignCounts, SignGrid, SignGridCfg};

use crate::Point;
use std::fmt;
use std::str::FromStr;

/// Sign classes of an orientation value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Positive value: `p` left of `r→q`.
    Left,
    /// Negative value: `p` right of `r→q`.
    Right,
    /// Exact zero.
    Collinear,
}

impl Orientation {
    /// Classify a raw predicate value. `None` for NaN.
    #[inline]
    pub fn from_value(v: f64) -> Option<Self> {
        if v > 0.0 {
            Some(Orientation::Left)
        } else if v < 0.0 {
            Some(Orientation::Right)
        } else if v == 0.0 {
            Some(Orientation::Collinear)
        } else {
            None
        }
    }

    #[inline]
    pub fn signum(self) -> i8 {
        match self {
            Orientation::Left => 1,
            Orientation::Right => -1,
            Orientation::Collinear => 0,
        }
    }
}

/// Capability: classify the turn direction of three ordered points.
pub trait OrientationPredicate {
    /// Signed value whose sign classifies `p` against the directed line `r→q`.
    fn orient(&self, r: &Point, q: &Point, p: &Point) -> f64;

    /// Sign class of [`orient`](Self::orient); `None` if the value is NaN.
    #[inline]
    fn orientation(&self, r: &Point, q: &Point, p: &Point) -> Option<Orientation> {
        Orientation::from_value(self.orient(r, q, p))
    }
}

impl<F> OrientationPredicate for F
where
    F: Fn(&Point, &Point, &Point) -> f64,
{
    #[inline]
    fn orient(&self, r: &Point, q: &Point, p: &Point) -> f64 {
        self(r, q, p)
    }
}

/// Plain floating-point evaluation. Fast, but near-collinear inputs can come
/// back with a wrong sign or a false zero (catastrophic cancellation).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Naive;

/// Adaptive exact evaluation (Shewchuk's `orient2d`). The sign is always the
/// sign of the exact determinant of the given `f64` inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Robust;

impl OrientationPredicate for Naive {
    #[inline]
    fn orient(&self, r: &Point, q: &Point, p: &Point) -> f64 {
        naive_orient(r, q, p)
    }
}

impl OrientationPredicate for Robust {
    #[inline]
    fn orient(&self, r: &Point, q: &Point, p: &Point) -> f64 {
        robust_orient(r, q, p)
    }
}

/// `(p.x−r.x)(q.y−r.y) − (p.y−r.y)(q.x−r.x)` in plain `f64`, in this exact order.
#[inline]
pub fn naive_orient(r: &Point, q: &Point, p: &Point) -> f64 {
    let prx = p.x - r.x;
    let pry = p.y - r.y;
    let qrx = q.x - r.x;
    let qry = q.y - r.y;
    prx * qry - pry * qrx
}

/// Same quantity as [`naive_orient`] with an exact sign.
#[inline]
pub fn robust_orient(r: &Point, q: &Point, p: &Point) -> f64 {
    // `robust::orient2d(a, b, c)` is positive for (a, b, c) counter-clockwise with
    // y pointing up, which is our value with `q` and `p` exchanged.
    robust::orient2d(coord(r), coord(p), coord(q))
}

#[inline]
fn coord(p: &Point) -> robust::Coord<f64> {
    robust::Coord { x: p.x, y: p.y }
}

/// Runtime selection between the two built-in predicates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PredicateKind {
    Naive,
    #[default]
    Robust,
}

impl PredicateKind {
    pub const ALL: [PredicateKind; 2] = [PredicateKind::Naive, PredicateKind::Robust];

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            PredicateKind::Naive => "naive",
            PredicateKind::Robust => "robust",
        }
    }
}

impl OrientationPredicate for PredicateKind {
    #[inline]
    fn orient(&self, r: &Point, q: &Point, p: &Point) -> f64 {
        match self {
            PredicateKind::Naive => naive_orient(r, q, p),
            PredicateKind::Robust => robust_orient(r, q, p),
        }
    }
}

impl fmt::Display for PredicateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown predicate name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsePredicateError {
    pub input: String,
}

impl fmt::Display for ParsePredicateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown predicate `{}` (expected `naive` or `robust`)",
            self.input
        )
    }
}

impl std::error::Error for ParsePredicateError {}

impl FromStr for PredicateKind {
    type Err = ParsePredicateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" | "fragile" => Ok(PredicateKind::Naive),
            "robust" | "exact" => Ok(PredicateKind::Robust),
            _ => Err(ParsePredicateError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests;
