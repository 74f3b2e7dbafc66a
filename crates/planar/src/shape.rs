//! The capability every shape provides.
//!
//! Contract
//! - A shape has a center and answers point membership as a pure predicate.
//! - `contains_point` takes `&self` and never mutates; shapes are safe to query
//!   from several threads at once.
//! - A new shape kind (e.g. a disk built from center and radius, containment
//!   by Euclidean distance ≤ radius) implements this trait, derives
//!   `Clone`/`PartialEq`, and ships its own unit tests next to it.

use crate::coords::Point;

pub trait Shape {
    fn center(&self) -> Point;

    /// Whether `p` lies inside or on the border of the shape.
    fn contains_point(&self, p: &Point) -> bool;
}

impl<S: Shape + ?Sized> Shape for &S {
    #[inline]
    fn center(&self) -> Point {
        (**self).center()
    }
    #[inline]
    fn contains_point(&self, p: &Point) -> bool {
        (**self).contains_point(p)
    }
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    #[inline]
    fn center(&self) -> Point {
        (**self).center()
    }
    #[inline]
    fn contains_point(&self, p: &Point) -> bool {
        (**self).contains_point(p)
    }
}
