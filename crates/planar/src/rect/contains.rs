//! Oriented-box membership.
//!
//! The query point is projected onto both axes; each absolute projection is
//! compared with its half extent. Rounding near the border is handled by
//! three explicit tolerance cases tried after the exact test, in order:
//! both axes on the border, major on the border, minor on the border. The
//! cases are kept separate rather than folded into one inflated comparison:
//! a point just past the border on one axis is accepted only if the other
//! axis passes its own test.

use super::{Containment, Rectangle};
use crate::coords::Point;
use crate::math::{nearly_equal, vector_from_to};
use crate::shape::Shape;

impl Rectangle {
    /// Absolute distances of `p` from the center along `(major, minor)`.
    #[inline]
    pub fn project(&self, p: &Point) -> (f64, f64) {
        let d = vector_from_to(&self.center, p);
        (d.dot(&self.axis_major).abs(), d.dot(&self.axis_minor).abs())
    }

    pub fn classify(&self, p: &Point) -> Containment {
        let (m_major, m_minor) = self.project(p);
        let (h_major, h_minor) = (self.half_major, self.half_minor);

        if m_major <= h_major && m_minor <= h_minor {
            return Containment::Inside;
        }
        let on_major = nearly_equal(m_major, h_major);
        let on_minor = nearly_equal(m_minor, h_minor);
        if on_major && on_minor {
            Containment::Corner
        } else if on_major && m_minor <= h_minor {
            Containment::MajorEdge
        } else if m_major <= h_major && on_minor {
            Containment::MinorEdge
        } else {
            Containment::Outside
        }
    }
}

impl Shape for Rectangle {
    #[inline]
    fn center(&self) -> Point {
        self.center
    }

    #[inline]
    fn contains_point(&self, p: &Point) -> bool {
        self.classify(p).is_contained()
    }
}
