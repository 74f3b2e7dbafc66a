//! 2D geometry primitives: points, vectors, and oriented rectangles.
//!
//! Coordinate system: +X is right, +Y is up. Angles are in degrees at the
//! API boundary and counter-clockwise.
//!
//! Layout
//! - `coords`: `Point`/`Vector` (distinct nalgebra types) and small constructors.
//! - `math`: free helpers (displacement, angle conversion, tolerance compare).
//! - `shape`: the `Shape` capability shared by all shapes.
//! - `rect`: oriented rectangle with projection-based containment.
//!
//! All operations are total over finite inputs; nothing here allocates or
//! returns errors.

pub mod cfg;
pub mod coords;
pub mod math;
pub mod rect;
pub mod shape;

pub use coords::{point, vector, Point, Vector};
pub use rect::{Containment, Rectangle};
pub use shape::Shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::coords::{point, unit_x, unit_y, vector, Point, Vector};
    pub use crate::math::{deg_to_radians, nearly_equal, rotate_about, vector_from_to};
    pub use crate::rect::{Containment, Rectangle};
    pub use crate::shape::Shape;
}
