//! Core-Domänentypen: Fixed-Point-Zahlen, Koordinatensysteme, Splines.

pub mod bounds;
pub mod fixed;
pub mod math;
pub mod point;
/// Kurvenfunktionen und ihr Aufbau
///
/// - Interpolator: Normalisierung und Fallback-Kette der Kurvenarten
/// - PolynomialSpline: stückweises Polynom `y(x)`
/// - Parametric2DSpline: Kurve `(x(t), y(t))` über der Sehnenlänge
pub mod spline;
pub mod transform;

pub use bounds::BoundsRect;
pub use fixed::{Dec16, DecPrecise, Fixed};
pub use math::{binary_search_insertion_index, clamp, rescale};
pub use point::{Point, ScreenPoint, ScreenPointExt};
pub use spline::{
    Interpolator, Normalization, Parametric2DSpline, PolynomialSpline, SplineFunction, SplineType,
};
pub use transform::CoordinateTransform;
