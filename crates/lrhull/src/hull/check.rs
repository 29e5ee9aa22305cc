//! Hull diagnostics, all evaluated through a caller-supplied predicate.
//!
//! These back the invariant tests and the CLI `compare` report: a hull built
//! under one predicate can be audited under another (typically [`Robust`]).
//!
//! [`Robust`]: crate::predicate::Robust

use crate::predicate::OrientationPredicate;
use crate::Point;

/// A processed point strictly outside the half-plane of a hull edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Violation {
    /// Edge index `j` (vertex `j−1` → vertex `j`).
    pub edge: usize,
    /// Index into the audited point slice.
    pub point: usize,
}

/// Twice the signed area of `hull` (fan from vertex 0). Positive for hulls in
/// the builder's orientation; `0.0` for fewer than three vertices.
pub fn signed_area2<P: OrientationPredicate + ?Sized>(hull: &[Point], pred: &P) -> f64 {
    if hull.len() < 3 {
        return 0.0;
    }
    let o = &hull[0];
    hull[1..]
        .windows(2)
        .map(|w| pred.orient(o, &w[0], &w[1]))
        .sum()
}

/// `p` lies inside or on `hull`: `orient(p, tail, head) >= 0` for every edge.
pub fn contains<P: OrientationPredicate + ?Sized>(hull: &[Point], p: &Point, pred: &P) -> bool {
    edges(hull).all(|(_, tail, head)| pred.orient(p, tail, head) >= 0.0)
}

/// Every (edge, point) pair where the point is strictly outside the edge.
pub fn violations<P: OrientationPredicate + ?Sized>(
    hull: &[Point],
    points: &[Point],
    pred: &P,
) -> Vec<Violation> {
    let mut out = Vec::new();
    for (edge, tail, head) in edges(hull) {
        for (i, p) in points.iter().enumerate() {
            if pred.orient(p, tail, head) < 0.0 {
                out.push(Violation { edge, point: i });
            }
        }
    }
    out
}

/// Positive area and no vertex outside any edge. Quadratic; meant for audits.
pub fn is_convex<P: OrientationPredicate + ?Sized>(hull: &[Point], pred: &P) -> bool {
    hull.len() >= 3 && signed_area2(hull, pred) > 0.0 && violations(hull, hull, pred).is_empty()
}

/// Rotation of `hull` starting at its lexicographically smallest `(x, y)`
/// vertex, so equal cycles compare equal.
pub fn canonical_cycle(hull: &[Point]) -> Vec<Point> {
    let Some(first) = (0..hull.len()).min_by(|&a, &b| {
        hull[a]
            .x
            .total_cmp(&hull[b].x)
            .then(hull[a].y.total_cmp(&hull[b].y))
    }) else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(hull.len());
    out.extend_from_slice(&hull[first..]);
    out.extend_from_slice(&hull[..first]);
    out
}

fn edges(hull: &[Point]) -> impl Iterator<Item = (usize, &Point, &Point)> + '_ {
    let n = hull.len();
    (0..n).map(move |j| (j, &hull[(j + n - 1) % n], &hull[j]))
}
