//! Sign maps of a predicate over a tiny-step grid.
//!
//! Samples `orient(r_ij, q, p)` for `r_ij = origin + (i·step, j·step)`. With the
//! default config the grid spans a few ulps around (0.5, 0.5) next to the line
//! `y = x`, which is where cancellation in the naive predicate shows up. The
//! exact classification there is `sign(i − j)`.

use super::{Orientation, OrientationPredicate};
use crate::Point;

/// Grid placement and the fixed line `q→p` every cell is tested against.
#[derive(Clone, Copy, Debug)]
pub struct SignGridCfg {
    pub nx: usize,
    pub ny: usize,
    pub origin: Point,
    /// Cell spacing; the default is 2⁻⁵³, one ulp of values in [0.5, 1).
    pub step: f64,
    pub q: Point,
    pub p: Point,
}

impl Default for SignGridCfg {
    fn default() -> Self {
        Self {
            nx: 512,
            ny: 512,
            origin: Point::new(0.5, 0.5),
            step: f64::EPSILON / 2.0,
            q: Point::new(12.0, 12.0),
            p: Point::new(24.0, 24.0),
        }
    }
}

/// Per-class cell counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SignCounts {
    pub left: usize,
    pub right: usize,
    pub collinear: usize,
}

impl SignCounts {
    #[inline]
    pub fn total(&self) -> usize {
        self.left + self.right + self.collinear
    }
}

/// Row-major (by `j`) classification grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignGrid {
    nx: usize,
    ny: usize,
    cells: Vec<Orientation>,
}

impl SignGrid {
    /// Evaluate `pred` on every cell.
    ///
    /// Returns `None` for an empty grid, a non-finite placement, or if the
    /// predicate yields NaN anywhere.
    pub fn sample<P: OrientationPredicate + ?Sized>(pred: &P, cfg: &SignGridCfg) -> Option<Self> {
        if cfg.nx == 0 || cfg.ny == 0 {
            return None;
        }
        let finite = |v: &Point| v.x.is_finite() && v.y.is_finite();
        if !(cfg.step.is_finite() && finite(&cfg.origin) && finite(&cfg.q) && finite(&cfg.p)) {
            return None;
        }
        let mut cells = Vec::with_capacity(cfg.nx * cfg.ny);
        for j in 0..cfg.ny {
            let y = cfg.origin.y + (j as f64) * cfg.step;
            for i in 0..cfg.nx {
                let r = Point::new(cfg.origin.x + (i as f64) * cfg.step, y);
                cells.push(pred.orientation(&r, &cfg.q, &cfg.p)?);
            }
        }
        Some(Self {
            nx: cfg.nx,
            ny: cfg.ny,
            cells,
        })
    }

    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<Orientation> {
        if i >= self.nx || j >= self.ny {
            return None;
        }
        Some(self.cells[j * self.nx + i])
    }

    /// Rows in increasing `j`.
    pub fn rows(&self) -> impl Iterator<Item = &[Orientation]> + '_ {
        self.cells.chunks(self.nx)
    }

    pub fn counts(&self) -> SignCounts {
        let mut c = SignCounts::default();
        for o in &self.cells {
            match o {
                Orientation::Left => c.left += 1,
                Orientation::Right => c.right += 1,
                Orientation::Collinear => c.collinear += 1,
            }
        }
        c
    }

    /// Number of cells classified differently from `other`; `None` if the
    /// dimensions differ.
    pub fn mismatches(&self, other: &SignGrid) -> Option<usize> {
        if self.dims() != other.dims() {
            return None;
        }
        Some(
            self.cells
                .iter()
                .zip(&other.cells)
                .filter(|(a, b)| a != b)
                .count(),
        )
    }
}
