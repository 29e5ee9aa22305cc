//! Incremental hull: seed triangle, cyclic visibility scan, splice.
//!
//! Vertex order is positive under the hull's predicate: for every edge
//! `tail→head` and every processed point `x`, `orient(x, tail, head) >= 0`.
//! Edge `j` runs from vertex `j−1 (mod n)` to vertex `j`.

use super::sequence::PointSequence;
use super::types::{HullCfg, HullError, Insertion, TiePolicy};
use crate::predicate::OrientationPredicate;
use crate::Point;

/// Convex hull grown one point at a time under a fixed predicate.
#[derive(Clone, Debug)]
pub struct IncrementalHull<P> {
    pred: P,
    cfg: HullCfg,
    verts: Vec<Point>,
    consumed: usize,
}

/// Planned mutation for one insertion. Computing it runs every predicate query,
/// applying it runs none, so a failed query leaves the hull untouched.
#[derive(Clone, Copy, Debug)]
struct Splice {
    /// Head of the first visible edge; first vertex to replace.
    start: usize,
    /// Tail of the first hidden edge after the visible run; kept.
    stop: usize,
    prune_before: bool,
    prune_after: bool,
}

impl<P: OrientationPredicate> IncrementalHull<P> {
    /// Seed from three points; swaps `p0` and `p1` if they turn negatively.
    pub fn new(pred: P, cfg: HullCfg, p0: Point, p1: Point, p2: Point) -> Result<Self, HullError> {
        for p in [&p0, &p1, &p2] {
            check_point(p)?;
        }
        let o = eval(&pred, &p0, &p1, &p2)?;
        if o == 0.0 {
            return Err(HullError::DegenerateInput);
        }
        let verts = if o < 0.0 {
            vec![p1, p0, p2]
        } else {
            vec![p0, p1, p2]
        };
        tracing::debug!(swapped = o < 0.0, tie = %cfg.tie_policy, "hull seeded");
        Ok(Self {
            pred,
            cfg,
            verts,
            consumed: 3,
        })
    }

    /// Seed from the first three points, then insert the rest in order.
    pub fn from_points(pred: P, cfg: HullCfg, points: &[Point]) -> Result<Self, HullError> {
        let (p0, p1, p2) = match points {
            [a, b, c, ..] => (*a, *b, *c),
            _ => return Err(HullError::InsufficientInput { got: points.len() }),
        };
        let mut hull = Self::new(pred, cfg, p0, p1, p2)?;
        for r in &points[3..] {
            hull.insert(*r)?;
        }
        Ok(hull)
    }

    #[inline]
    pub fn from_sequence(pred: P, cfg: HullCfg, seq: &PointSequence) -> Result<Self, HullError> {
        Self::from_points(pred, cfg, seq.as_slice())
    }

    /// Insert every point of `seq` past the cursor. Returns how many were processed.
    ///
    /// On error the cursor stops before the offending point.
    pub fn catch_up(&mut self, seq: &PointSequence) -> Result<usize, HullError> {
        let start = self.consumed;
        for r in seq.as_slice().iter().skip(start) {
            self.insert(*r)?;
        }
        Ok(self.consumed - start)
    }

    /// Insert one point. Interior and boundary points are a no-op.
    pub fn insert(&mut self, r: Point) -> Result<Insertion, HullError> {
        check_point(&r)?;
        let outcome = match self.plan(&r)? {
            None => Insertion::Inside,
            Some(s) => {
                let (removed, pruned) = self.apply(s, r);
                Insertion::Extended { removed, pruned }
            }
        };
        self.consumed += 1;
        tracing::trace!(x = r.x, y = r.y, ?outcome, n = self.verts.len(), "insert");
        Ok(outcome)
    }

    /// Current hull vertices in positive order.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.verts
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        self.verts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    /// Always false: a hull has at least three vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Number of input points processed so far, seeds included.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    #[inline]
    pub fn predicate(&self) -> &P {
        &self.pred
    }

    #[inline]
    pub fn cfg(&self) -> HullCfg {
        self.cfg
    }

    /// Twice the signed area under the hull's own predicate.
    pub fn signed_area2(&self) -> f64 {
        super::check::signed_area2(&self.verts, &self.pred)
    }

    /// Whether `p` lies inside or on the hull under the hull's own predicate.
    pub fn contains(&self, p: &Point) -> bool {
        super::check::contains(&self.verts, p, &self.pred)
    }

    fn plan(&self, r: &Point) -> Result<Option<Splice>, HullError> {
        let v = &self.verts;
        let n = v.len();
        let mut start = None;
        let mut stop = None;
        let mut prev_hidden = self.hidden(r, &v[n - 2], &v[n - 1])?;
        let mut k = n - 1;
        for j in 0..n {
            let hidden = self.hidden(r, &v[k], &v[j])?;
            if !hidden && prev_hidden {
                start = Some(j);
                if stop.is_some() {
                    break;
                }
            }
            if hidden && !prev_hidden {
                stop = Some(k);
                if start.is_some() {
                    break;
                }
            }
            prev_hidden = hidden;
            k = j;
        }
        let (Some(start), Some(stop)) = (start, stop) else {
            return Ok(None);
        };

        let (prune_before, prune_after) = match self.cfg.tie_policy {
            TiePolicy::Retain => (false, false),
            TiePolicy::Prune => {
                let before = (start + n - 1) % n;
                let before2 = (start + n - 2) % n;
                let after2 = (stop + 1) % n;
                (
                    eval(&self.pred, &v[before2], &v[before], r)? == 0.0,
                    eval(&self.pred, r, &v[stop], &v[after2])? == 0.0,
                )
            }
        };
        Ok(Some(Splice {
            start,
            stop,
            prune_before,
            prune_after,
        }))
    }

    /// Replace the visible run with `r`. Returns (removed, pruned).
    fn apply(&mut self, s: Splice, r: Point) -> (usize, usize) {
        let n = self.verts.len();
        let mut at = if s.start <= s.stop {
            self.verts.splice(s.start..s.stop, [r]);
            s.start
        } else {
            // Run wraps past index 0: drop the tail from `start`, put `r` at the
            // join, then drop the head up to `stop`.
            self.verts.truncate(s.start);
            self.verts.push(r);
            self.verts.drain(..s.stop);
            s.start - s.stop
        };
        let removed = n + 1 - self.verts.len();

        let mut pruned = 0;
        if s.prune_before && self.verts.len() > 3 {
            let m = self.verts.len();
            let before = (at + m - 1) % m;
            self.verts.remove(before);
            if before < at {
                at -= 1;
            }
            pruned += 1;
        }
        if s.prune_after && self.verts.len() > 3 {
            let m = self.verts.len();
            self.verts.remove((at + 1) % m);
            pruned += 1;
        }
        (removed, pruned)
    }

    #[inline]
    fn hidden(&self, r: &Point, tail: &Point, head: &Point) -> Result<bool, HullError> {
        Ok(eval(&self.pred, r, tail, head)? >= 0.0)
    }
}

#[inline]
fn eval<P: OrientationPredicate>(pred: &P, r: &Point, q: &Point, p: &Point) -> Result<f64, HullError> {
    let v = pred.orient(r, q, p);
    if v.is_nan() {
        return Err(HullError::invalid("orientation predicate returned NaN"));
    }
    Ok(v)
}

#[inline]
fn check_point(p: &Point) -> Result<(), HullError> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(())
    } else {
        Err(HullError::invalid(format!(
            "non-finite point ({}, {})",
            p.x, p.y
        )))
    }
}
