//! Points and vectors.
//!
//! `Point` is a location, `Vector` is a displacement or direction. They share
//! a representation but are distinct types: `Point - Point` gives a `Vector`,
//! `Point + Vector` gives a `Point`, and two points cannot be added.
//!
//! Equality on both is exact float comparison. Use `math::nearly_equal` for
//! geometric comparisons.

use nalgebra::{Point2, Vector2};

/// Location in the plane. `Point::default()` is the origin.
pub type Point = Point2<f64>;

/// Displacement in the plane. `Vector::dot` is the Euclidean dot product.
pub type Vector = Vector2<f64>;

#[inline]
pub fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[inline]
pub fn vector(x: f64, y: f64) -> Vector {
    Vector::new(x, y)
}

/// World X axis `(1, 0)`.
#[inline]
pub fn unit_x() -> Vector {
    Vector::x()
}

/// World Y axis `(0, 1)`.
#[inline]
pub fn unit_y() -> Vector {
    Vector::y()
}
