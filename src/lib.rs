//! SplineGen Editor Library.
//! Fixed-Point-Kurven und Editor-Logik als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod text;

pub use app::{AppCommand, AppController, AppIntent, AppState};
pub use core::{
    BoundsRect, CoordinateTransform, Dec16, Interpolator, Point, ScreenPoint, SplineFunction,
    SplineType,
};
pub use shared::EditorOptions;
pub use text::{format_point_list, parse_point_list};
