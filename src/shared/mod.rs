//! Geteilte Typen und Funktionen für layer-übergreifende Verträge.
//!
//! Enthält Optionen und Punkt-Geometrie, die von `app` und dem Binary
//! gleichermaßen genutzt werden.

pub mod options;
pub mod point_geometry;

pub use options::EditorOptions;
pub use options::{CURVE_RESOLUTION, MIN_POINT_DELTA, NORMALIZATION_SCALE, POINT_SIZE};
pub use point_geometry::{point_restrict_x, point_to_line_segment_collide, point_to_point_collide};
