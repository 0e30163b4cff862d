//! Stückweise Polynom-Funktion über normalisierten Stützstellen.

use super::Normalization;
use crate::core::fixed::Dec16;
use crate::core::math::{binary_search_insertion_index, rescale};

/// Stückweises Polynom `y(x)` über `segment_count + 1` aufsteigenden Stützstellen.
///
/// Stützstellen und Koeffizienten liegen im normalisierten Raum `[0, scale]`;
/// [`PolynomialSpline::value`] rechnet die Eingabe aus dem Original-Bereich dorthin
/// um und das Ergebnis wieder zurück.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialSpline {
    knots: Vec<Dec16>,
    /// Koeffizienten pro Segment, aufsteigende Potenzen (`[a0, a1, ...]`).
    polynomials: Vec<Vec<Dec16>>,
    normalization: Normalization,
}

impl PolynomialSpline {
    /// Erstellt die Funktion.
    ///
    /// # Panics
    /// Wenn die Anzahl der Stützstellen nicht `polynomials.len() + 1` ist, ein
    /// Segment keine Koeffizienten hat oder die Stützstellen nicht streng aufsteigen.
    pub fn new(
        knots: Vec<Dec16>,
        polynomials: Vec<Vec<Dec16>>,
        normalization: Normalization,
    ) -> Self {
        assert!(!polynomials.is_empty(), "Spline braucht mindestens ein Segment");
        assert_eq!(
            knots.len(),
            polynomials.len() + 1,
            "Stützstellen und Segmente passen nicht zusammen"
        );
        assert!(
            polynomials.iter().all(|coefficients| !coefficients.is_empty()),
            "Segment ohne Koeffizienten"
        );
        assert!(
            knots.windows(2).all(|pair| pair[0] < pair[1]),
            "Stützstellen müssen streng aufsteigend sein: {knots:?}"
        );
        Self {
            knots,
            polynomials,
            normalization,
        }
    }

    /// Wertet die Funktion an `coord` (Original-X-Bereich) aus und liefert `(coord, y)`.
    pub fn value(&self, coord: Dec16) -> (Dec16, Dec16) {
        (coord, self.value_norm(self.normalize_coord(coord)))
    }

    /// Wertet an einer bereits normalisierten Koordinate aus und skaliert das Ergebnis
    /// von `[0, y_scale]` in den Original-Y-Bereich.
    ///
    /// # Panics
    /// Wenn `x_norm` außerhalb von `[erste Stützstelle, letzte Stützstelle]` liegt.
    pub fn value_norm(&self, x_norm: Dec16) -> Dec16 {
        let r = self.segment_value(x_norm);
        let original = &self.normalization.original;
        rescale(
            r,
            Dec16::ZERO,
            self.normalization.y_scale,
            original.y_min,
            original.y_max,
        )
    }

    /// Wert im normalisierten Raum (ohne Rückskalierung).
    pub fn segment_value(&self, x_norm: Dec16) -> Dec16 {
        let first = self.knots[0];
        let last = self.knots[self.segment_count()];
        assert!(
            first <= x_norm && x_norm <= last,
            "Koordinate {x_norm:?} außerhalb von [{first:?}, {last:?}]"
        );
        let index = match binary_search_insertion_index(&self.knots, &x_norm) {
            Some(0) => 0,
            Some(index) => index - 1,
            None => self.segment_count() - 1,
        };
        horner(&self.polynomials[index], x_norm - self.knots[index])
    }

    pub fn coord_min(&self) -> Dec16 {
        self.normalization.original.x_min
    }

    pub fn coord_max(&self) -> Dec16 {
        self.normalization.original.x_max
    }

    /// Index der ersten Stützstelle `>=` der (normalisierten) Koordinate.
    pub fn closest_knot_index(&self, coord: Dec16) -> Option<usize> {
        binary_search_insertion_index(&self.knots, &self.normalize_coord(coord))
    }

    pub fn knots(&self) -> &[Dec16] {
        &self.knots
    }

    pub fn polynomials(&self) -> &[Vec<Dec16>] {
        &self.polynomials
    }

    pub fn segment_count(&self) -> usize {
        self.polynomials.len()
    }

    pub fn normalization(&self) -> &Normalization {
        &self.normalization
    }

    fn normalize_coord(&self, coord: Dec16) -> Dec16 {
        let original = &self.normalization.original;
        rescale(
            coord,
            original.x_min,
            original.x_max,
            Dec16::ZERO,
            self.normalization.x_scale,
        )
    }
}

/// Horner-Schema für `a0 + a1·t + a2·t² + ...`.
fn horner(coefficients: &[Dec16], t: Dec16) -> Dec16 {
    coefficients
        .iter()
        .rev()
        .copied()
        .reduce(|acc, coefficient| t * acc + coefficient)
        .unwrap_or(Dec16::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bounds::BoundsRect;

    fn dec(value: i32) -> Dec16 {
        Dec16::from_int(value)
    }

    fn identity_normalization(max: i32) -> Normalization {
        Normalization {
            x_scale: dec(max),
            y_scale: dec(max),
            original: BoundsRect::from_ints(0, max, 0, max),
        }
    }

    #[test]
    fn test_horner_evaluates_ascending_powers() {
        // 1 + 2t + 3t²
        let coefficients = [dec(1), dec(2), dec(3)];
        assert_eq!(horner(&coefficients, dec(0)), dec(1));
        assert_eq!(horner(&coefficients, dec(2)), dec(17));
        assert_eq!(horner(&coefficients, dec(-1)), dec(2));
    }

    #[test]
    fn test_segment_selection_at_knots() {
        let spline = PolynomialSpline::new(
            vec![dec(0), dec(5), dec(10)],
            vec![vec![dec(0), dec(1)], vec![dec(5), dec(0)]],
            identity_normalization(10),
        );
        assert_eq!(spline.value(dec(0)), (dec(0), dec(0)));
        assert_eq!(spline.value(dec(3)), (dec(3), dec(3)));
        // Stützstelle gehört zum linken Segment
        assert_eq!(spline.value(dec(5)), (dec(5), dec(5)));
        assert_eq!(spline.value(dec(8)), (dec(8), dec(5)));
        assert_eq!(spline.value(dec(10)), (dec(10), dec(5)));
    }

    #[test]
    fn test_closest_knot_index_normalizes_coord() {
        let spline = PolynomialSpline::new(
            vec![dec(0), dec(5), dec(10)],
            vec![vec![dec(0), dec(1)], vec![dec(5), dec(0)]],
            Normalization {
                x_scale: dec(10),
                y_scale: dec(10),
                original: BoundsRect::from_ints(0, 100, 0, 100),
            },
        );
        assert_eq!(spline.closest_knot_index(dec(0)), Some(0));
        assert_eq!(spline.closest_knot_index(dec(30)), Some(1));
        assert_eq!(spline.closest_knot_index(dec(50)), Some(1));
        assert_eq!(spline.closest_knot_index(dec(51)), Some(2));
        assert_eq!(spline.closest_knot_index(dec(100)), Some(2));
    }

    #[test]
    #[should_panic]
    fn test_non_ascending_knots_panic() {
        let _ = PolynomialSpline::new(
            vec![dec(0), dec(5), dec(5)],
            vec![vec![dec(0)], vec![dec(0)]],
            identity_normalization(10),
        );
    }

    #[test]
    #[should_panic]
    fn test_out_of_domain_query_panics() {
        let spline = PolynomialSpline::new(
            vec![dec(0), dec(10)],
            vec![vec![dec(0), dec(1)]],
            identity_normalization(10),
        );
        let _ = spline.segment_value(dec(11));
    }
}
