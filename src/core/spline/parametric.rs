//! Parametrische 2D-Kurve aus zwei Polynom-Splines über dem Sehnenparameter.

use super::polynomial::PolynomialSpline;
use crate::core::fixed::Dec16;
use crate::core::math::binary_search_insertion_index;

/// Kurve `t ↦ (x(t), y(t))`; `t` läuft über die kumulierten Sehnenlängen.
#[derive(Debug, Clone, PartialEq)]
pub struct Parametric2DSpline {
    x_func: PolynomialSpline,
    y_func: PolynomialSpline,
    t_knots: Vec<Dec16>,
}

impl Parametric2DSpline {
    /// Beide Funktionen müssen über denselben Stützstellen `t_knots` definiert sein.
    pub fn new(x_func: PolynomialSpline, y_func: PolynomialSpline, t_knots: Vec<Dec16>) -> Self {
        assert!(
            x_func.knots() == t_knots.as_slice() && y_func.knots() == t_knots.as_slice(),
            "x(t) und y(t) brauchen dieselben Stützstellen"
        );
        Self {
            x_func,
            y_func,
            t_knots,
        }
    }

    /// Liefert `(x, y)` im Original-Koordinatensystem für den Parameter `t`.
    pub fn value(&self, t: Dec16) -> (Dec16, Dec16) {
        (self.x_func.value_norm(t), self.y_func.value_norm(t))
    }

    pub fn coord_min(&self) -> Dec16 {
        self.t_knots[0]
    }

    pub fn coord_max(&self) -> Dec16 {
        self.t_knots[self.t_knots.len() - 1]
    }

    pub fn closest_knot_index(&self, t: Dec16) -> Option<usize> {
        binary_search_insertion_index(&self.t_knots, &t)
    }

    pub fn t_knots(&self) -> &[Dec16] {
        &self.t_knots
    }

    pub fn x_func(&self) -> &PolynomialSpline {
        &self.x_func
    }

    pub fn y_func(&self) -> &PolynomialSpline {
        &self.y_func
    }
}
