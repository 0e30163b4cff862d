//! Interpolierende Kurven durch Kontrollpunkte.
//!
//! Aufgeteilt in:
//! - `interpolator`: Normalisierung und Aufbau der vier Kurvenarten
//! - `polynomial`: stückweises Polynom `y(x)`
//! - `parametric`: parametrische Kurve `(x(t), y(t))`

mod interpolator;
mod parametric;
mod polynomial;

pub use interpolator::Interpolator;
pub use parametric::Parametric2DSpline;
pub use polynomial::PolynomialSpline;

use serde::{Deserialize, Serialize};

use super::bounds::BoundsRect;
use super::fixed::Dec16;

/// Interpolationsart der Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SplineType {
    /// Gerade Segmente zwischen den Punkten
    Linear,
    /// Natürlicher kubischer Spline (stetige zweite Ableitung)
    Cubic,
    /// Akima-Spline (kaum Überschwingen)
    #[default]
    CubicMonotone,
    /// Akima über Sehnenlänge, X muss nicht monoton sein
    Parametric,
}

impl SplineType {
    /// Alle Arten in Anzeige-Reihenfolge.
    pub const ALL: [SplineType; 4] = [
        SplineType::Linear,
        SplineType::Cubic,
        SplineType::CubicMonotone,
        SplineType::Parametric,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SplineType::Linear => "Linear",
            SplineType::Cubic => "Cubic",
            SplineType::CubicMonotone => "Cubic Monotone",
            SplineType::Parametric => "Parametric",
        }
    }

    pub fn is_parametric(self) -> bool {
        self == SplineType::Parametric
    }
}

/// Abbildung zwischen normalisiertem Raum `[0, scale]` und Original-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalization {
    /// Obere Grenze des normalisierten Definitionsbereichs
    pub x_scale: Dec16,
    /// Obere Grenze des normalisierten Wertebereichs
    pub y_scale: Dec16,
    /// Original-Bereich, auf den zurückskaliert wird
    pub original: BoundsRect,
}

/// Auswertbare Kurve, wie sie der [`Interpolator`] erzeugt.
///
/// Wird pro Bearbeitungszyklus neu gebaut und danach verworfen.
#[derive(Debug, Clone, PartialEq)]
pub enum SplineFunction {
    Polynomial(PolynomialSpline),
    Parametric(Parametric2DSpline),
}

impl SplineFunction {
    /// Liefert `(x, y)` in Benutzer-Koordinaten.
    ///
    /// `coord` ist bei Polynomen die X-Koordinate, bei parametrischen Kurven der
    /// Sehnenparameter. Muss in `[coord_min, coord_max]` liegen.
    pub fn value(&self, coord: Dec16) -> (Dec16, Dec16) {
        match self {
            SplineFunction::Polynomial(spline) => spline.value(coord),
            SplineFunction::Parametric(spline) => spline.value(coord),
        }
    }

    pub fn coord_min(&self) -> Dec16 {
        match self {
            SplineFunction::Polynomial(spline) => spline.coord_min(),
            SplineFunction::Parametric(spline) => spline.coord_min(),
        }
    }

    pub fn coord_max(&self) -> Dec16 {
        match self {
            SplineFunction::Polynomial(spline) => spline.coord_max(),
            SplineFunction::Parametric(spline) => spline.coord_max(),
        }
    }

    /// Index der ersten Stützstelle `>= coord`, `None` hinter der letzten.
    pub fn closest_knot_index(&self, coord: Dec16) -> Option<usize> {
        match self {
            SplineFunction::Polynomial(spline) => spline.closest_knot_index(coord),
            SplineFunction::Parametric(spline) => spline.closest_knot_index(coord),
        }
    }

    pub fn is_parametric(&self) -> bool {
        matches!(self, SplineFunction::Parametric(_))
    }
}
