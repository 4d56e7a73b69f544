//! Planar similarity transforms and the segment-to-segment solver.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::math::{angle, approx_eq, Pt2, Real, Vec2};

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("source segment has zero length, similarity scale is undefined")]
    DegenerateSource,
}

/// Similarity transform on the plane (translation + rotation + uniform
/// scale, no shear or reflection), mapping world to screen coordinates.
///
/// Applying the transform to a point means: translate by
/// `pre_translation`, rotate by `rotation` about the origin, scale
/// uniformly by `scale`, then translate by `post_translation`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Similarity2 {
    /// Translation applied before the rotation.
    pub pre_translation: Vec2,
    /// Uniform scale factor.
    pub scale: Real,
    /// Rotation about the origin, in radians.
    pub rotation: Real,
    /// Translation applied after the scale.
    pub post_translation: Vec2,
}

impl Default for Similarity2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Similarity2 {
    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            pre_translation: Vec2::zeros(),
            scale: 1.0,
            rotation: 0.0,
            post_translation: Vec2::zeros(),
        }
    }

    /// Map a point through the transform.
    pub fn apply(&self, p: &Pt2) -> Pt2 {
        let q = p + self.pre_translation;
        let (sin, cos) = self.rotation.sin_cos();
        let rotated = Vec2::new(q.x * cos - q.y * sin, q.x * sin + q.y * cos);
        Pt2::from(rotated * self.scale + self.post_translation)
    }

    /// Component-wise approximate equality within [`crate::math::EPS`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        approx_eq(self.pre_translation.x, other.pre_translation.x)
            && approx_eq(self.pre_translation.y, other.pre_translation.y)
            && approx_eq(self.scale, other.scale)
            && approx_eq(self.rotation, other.rotation)
            && approx_eq(self.post_translation.x, other.post_translation.x)
            && approx_eq(self.post_translation.y, other.post_translation.y)
    }
}

/// Solve for the similarity that maps segment `a -> b` onto `c -> d`.
///
/// The result sends `a` to `c` and `b` to `d`: rotation is the angle
/// between the two segments, scale their length ratio, and the two
/// translations move `a` to the origin and the origin to `c`.
///
/// A zero-length source segment leaves the scale undefined and returns
/// [`SolveError::DegenerateSource`]; the touch resolver guarantees its
/// anchor pairs never degenerate this way.
pub fn solve_similarity(a: &Pt2, b: &Pt2, c: &Pt2, d: &Pt2) -> Result<Similarity2, SolveError> {
    let d1 = b - a;
    let d2 = d - c;

    let len1 = d1.norm();
    if len1 <= Real::EPSILON {
        return Err(SolveError::DegenerateSource);
    }

    Ok(Similarity2 {
        pre_translation: -a.coords,
        scale: d2.norm() / len1,
        rotation: angle(&d2) - angle(&d1),
        post_translation: c.coords,
    })
}
