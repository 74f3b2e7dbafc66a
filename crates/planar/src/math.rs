//! Small free helpers shared by the shapes.

use nalgebra::Rotation2;

use crate::cfg::{NEARLY_EQUAL_EPS, PI_APPROX};
use crate::coords::{Point, Vector};

/// Displacement from `a` to `b`, i.e. `b - a`.
#[inline]
pub fn vector_from_to(a: &Point, b: &Point) -> Vector {
    b - a
}

/// Degrees to radians. The input is first wrapped into `[0, 360)`.
#[inline]
pub fn deg_to_radians(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0) / 180.0 * PI_APPROX
}

/// `|a - b| < 1e-5`. Absolute, not relative.
#[inline]
pub fn nearly_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < NEARLY_EQUAL_EPS
}

/// Rotate `p` counter-clockwise about `pivot` by `degrees`.
///
/// Uses `deg_to_radians`, so a point rotated here lines up with the axes of
/// `Rectangle::rotated` for the same angle.
pub fn rotate_about(p: &Point, pivot: &Point, degrees: f64) -> Point {
    let rot = Rotation2::new(deg_to_radians(degrees));
    *pivot + rot * vector_from_to(pivot, p)
}
