//! Errors, configuration and insertion outcomes for [`IncrementalHull`](super::IncrementalHull).

use std::fmt;
use std::str::FromStr;

/// Failures of hull construction and insertion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    /// Fewer than three points were available to seed the hull.
    InsufficientInput { got: usize },
    /// The three seed points are exactly collinear (per the predicate).
    DegenerateInput,
    /// Non-finite coordinates, or the predicate returned NaN.
    InvalidGeometry { reason: String },
}

impl HullError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientInput { got } => {
                write!(f, "need at least 3 points to seed a hull, got {got}")
            }
            Self::DegenerateInput => write!(f, "seed points are collinear (no hull orientation)"),
            Self::InvalidGeometry { reason } => write!(f, "invalid geometry: {reason}"),
        }
    }
}

impl std::error::Error for HullError {}

/// What happens to a tangent vertex that ends up collinear with a new apex.
///
/// `Prune` (default) drops it: the hull stays strictly convex and, under an
/// exact predicate, the final hull does not depend on insertion order.
/// `Retain` keeps it, reproducing the plain scan result; the kept vertex then
/// depends on which collinear point arrived first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TiePolicy {
    Retain,
    #[default]
    Prune,
}

impl TiePolicy {
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            TiePolicy::Retain => "retain",
            TiePolicy::Prune => "prune",
        }
    }
}

impl fmt::Display for TiePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown tie policy name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseTiePolicyError {
    pub input: String,
}

impl fmt::Display for ParseTiePolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown tie policy `{}` (expected `retain` or `prune`)",
            self.input
        )
    }
}

impl std::error::Error for ParseTiePolicyError {}

impl FromStr for TiePolicy {
    type Err = ParseTiePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retain" => Ok(TiePolicy::Retain),
            "prune" => Ok(TiePolicy::Prune),
            _ => Err(ParseTiePolicyError {
                input: s.to_string(),
            }),
        }
    }
}

/// Builder configuration, fixed for the lifetime of a hull.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HullCfg {
    pub tie_policy: TiePolicy,
}

impl HullCfg {
    #[inline]
    pub fn with_tie_policy(tie_policy: TiePolicy) -> Self {
        Self { tie_policy }
    }
}

/// Outcome of a single insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insertion {
    /// The point lies inside or on the hull; nothing changed.
    Inside,
    /// The point became a vertex. `removed` counts vertices it replaced,
    /// `pruned` counts collinear tangent vertices dropped by [`TiePolicy::Prune`].
    Extended { removed: usize, pruned: usize },
}

impl Insertion {
    #[inline]
    pub fn is_extended(&self) -> bool {
        matches!(self, Insertion::Extended { .. })
    }
}
