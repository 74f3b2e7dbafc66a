//! Fixed numeric defaults.
//!
//! Policy
//! - These are constants, not configuration. Border classification and angle
//!   conversion must stay bit-compatible with existing callers, so neither the
//!   tolerance nor the pi literal is adjustable at runtime.

/// Absolute tolerance for `math::nearly_equal` (not scaled by magnitude).
pub const NEARLY_EQUAL_EPS: f64 = 1e-5;

/// Pi as used by `math::deg_to_radians`. Deliberately the 12-digit literal,
/// not `std::f64::consts::PI`.
#[allow(clippy::approx_constant)]
pub const PI_APPROX: f64 = 3.14159265359;
