//! Oriented rectangle (center, half extents, orthonormal axes).
//!
//! Purpose
//! - One canonical representation for every construction path: a center, two
//!   non-negative half extents, and two unit axes (major, minor).
//! - Point membership by projecting onto the axes (oriented-box test), with a
//!   fixed absolute tolerance absorbing rounding at the border.
//!
//! Invariants
//! - `half_major, half_minor >= 0` (constructors take absolute values).
//! - `axis_major ⟂ axis_minor`, both unit length; world X/Y when unrotated.
//!
//! Code cross-refs: `build` (constructors), `contains` (classification),
//! `math::{vector_from_to, nearly_equal, deg_to_radians}`.

mod build;
mod contains;

use crate::coords::{Point, Vector};

/// Oriented rectangle. Equality is exact on all five fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    center: Point,
    half_major: f64,
    half_minor: f64,
    /// Unit vector along the major extent.
    axis_major: Vector,
    /// Unit vector along the minor extent.
    axis_minor: Vector,
}

/// Which test accepted (or rejected) a point, in evaluation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Containment {
    /// Both projections within the half extents.
    Inside,
    /// Both projections within tolerance of their half extents.
    Corner,
    /// On the major-axis border, minor projection within its half extent.
    MajorEdge,
    /// On the minor-axis border, major projection within its half extent.
    MinorEdge,
    Outside,
}

impl Containment {
    #[inline]
    pub fn is_contained(self) -> bool {
        !matches!(self, Containment::Outside)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Containment::Inside => "inside",
            Containment::Corner => "corner",
            Containment::MajorEdge => "major_edge",
            Containment::MinorEdge => "minor_edge",
            Containment::Outside => "outside",
        }
    }
}

impl Rectangle {
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// `(half_major, half_minor)`, both non-negative.
    #[inline]
    pub fn half_extents(&self) -> (f64, f64) {
        (self.half_major, self.half_minor)
    }

    /// `(axis_major, axis_minor)`, orthonormal.
    #[inline]
    pub fn axes(&self) -> (Vector, Vector) {
        (self.axis_major, self.axis_minor)
    }

    /// Corners counter-clockwise, starting at `center - major - minor`.
    pub fn corners(&self) -> [Point; 4] {
        let u = self.axis_major * self.half_major;
        let v = self.axis_minor * self.half_minor;
        let c = self.center;
        [c - u - v, c + u - v, c + u + v, c - u + v]
    }
}

#[cfg(test)]
mod tests;
