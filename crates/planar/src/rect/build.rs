//! Rectangle constructors.
//!
//! All three paths end in the same canonical form; see the module invariants
//! in `rect`.

use super::Rectangle;
use crate::coords::{unit_x, unit_y, vector, Point};
use crate::math::{deg_to_radians, vector_from_to};

impl Rectangle {
    /// Axis-aligned rectangle. Negative half extents are taken by magnitude.
    pub fn new(center: Point, half_major: f64, half_minor: f64) -> Self {
        Self {
            center,
            half_major: half_major.abs(),
            half_minor: half_minor.abs(),
            axis_major: unit_x(),
            axis_minor: unit_y(),
        }
    }

    /// Axis-aligned rectangle spanning two opposite corners.
    ///
    /// Named for bottom-left/top-right, but any pair of opposite corners gives
    /// the same rectangle since the half extents are taken by magnitude.
    pub fn from_corners(bottom_left: Point, top_right: Point) -> Self {
        let diag = vector_from_to(&bottom_left, &top_right);
        let center = Point::new(
            bottom_left.x + diag.x / 2.0,
            bottom_left.y + diag.y / 2.0,
        );
        Self::new(center, diag.x / 2.0, diag.y / 2.0)
    }

    /// Rectangle rotated counter-clockwise by `degrees` about its center.
    ///
    /// `axis_major = (cos θ, sin θ)`, `axis_minor = (-sin θ, cos θ)`.
    pub fn rotated(center: Point, half_major: f64, half_minor: f64, degrees: f64) -> Self {
        let mut rect = Self::new(center, half_major, half_minor);
        let (sin, cos) = deg_to_radians(degrees).sin_cos();
        rect.axis_major = vector(cos, sin);
        rect.axis_minor = vector(-sin, cos);
        rect
    }
}
