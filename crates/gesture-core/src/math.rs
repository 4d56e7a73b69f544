//! Mathematical utilities and type definitions.
//!
//! This module provides the scalar and 2D types used throughout the
//! workspace and the small helpers shared by the solver and the tests.

use nalgebra::{Point2, Vector2};

/// Scalar type used throughout the library (currently `f64`).
pub type Real = f64;

/// 2D point with [`Real`] coordinates.
pub type Pt2 = Point2<Real>;
/// 2D vector with [`Real`] components.
pub type Vec2 = Vector2<Real>;

/// Absolute tolerance used by approximate comparisons.
pub const EPS: Real = 1e-6;

/// Polar angle of `v` in radians via `atan2`.
///
/// The result lies in `(-pi, pi]` and is discontinuous across the negative
/// x-axis; callers must not assume continuity of the angle across frames
/// beyond the wrap behavior of `atan2`.
pub fn angle(v: &Vec2) -> Real {
    v.y.atan2(v.x)
}

/// Approximate scalar equality within [`EPS`].
pub fn approx_eq(a: Real, b: Real) -> bool {
    (b - a).abs() < EPS
}

/// Component-wise approximate point equality within [`EPS`].
pub fn approx_eq_pt(a: &Pt2, b: &Pt2) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn angle_of_axes() {
        assert!(approx_eq(angle(&Vec2::new(1.0, 0.0)), 0.0));
        assert!(approx_eq(angle(&Vec2::new(0.0, 1.0)), FRAC_PI_2));
        assert!(approx_eq(angle(&Vec2::new(-1.0, 0.0)), std::f64::consts::PI));
    }

    #[test]
    fn approx_eq_tolerance() {
        assert!(approx_eq(1.0, 1.0 + 1e-9));
        assert!(!approx_eq(1.0, 1.0 + 1e-3));
        assert!(approx_eq_pt(
            &Pt2::new(0.5, -0.5),
            &Pt2::new(0.5 + 1e-9, -0.5)
        ));
    }
}
