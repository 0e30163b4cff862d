//! Achsenparalleles Koordinaten-Rechteck.

use super::fixed::Dec16;
use super::math::clamp;
use super::point::Point;

/// Grenzen eines Koordinatensystems (Benutzer, Fenster oder Spline-intern).
///
/// Wird ein Rechteck als Nenner einer Skalierung benutzt, muss `x_max > x_min`
/// und `y_max > y_min` gelten. Benutzereingaben laufen über
/// [`BoundsRect::with_min_span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsRect {
    pub x_min: Dec16,
    pub x_max: Dec16,
    pub y_min: Dec16,
    pub y_max: Dec16,
}

impl BoundsRect {
    /// Minimale Spannweite pro Achse für benutzerdefinierte Grenzen.
    pub const MIN_SPAN: Dec16 = Dec16::ONE;

    /// Erstellt ein Rechteck aus vier Grenzen.
    pub const fn new(x_min: Dec16, x_max: Dec16, y_min: Dec16, y_max: Dec16) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Erstellt ein Rechteck aus ganzzahligen Grenzen.
    pub const fn from_ints(x_min: i32, x_max: i32, y_min: i32, y_max: i32) -> Self {
        Self::new(
            Dec16::from_int(x_min),
            Dec16::from_int(x_max),
            Dec16::from_int(y_min),
            Dec16::from_int(y_max),
        )
    }

    /// Fenster-Rechteck `[0, width] × [0, height]`.
    pub const fn window(width: i32, height: i32) -> Self {
        Self::from_ints(0, width, 0, height)
    }

    /// Übernimmt neue Achsenbereiche und erzwingt [`BoundsRect::MIN_SPAN`].
    ///
    /// Ist ein Bereich zu klein, wird die unveränderte Grenze behalten und die
    /// geänderte nachgezogen: wurde das Minimum bewegt, rückt es unter das Maximum,
    /// sonst rückt das Maximum über das Minimum.
    pub fn with_min_span(&self, x_range: [Dec16; 2], y_range: [Dec16; 2]) -> Self {
        let (x_min, x_max) = validate_span(x_range[0], x_range[1], self.x_min);
        let (y_min, y_max) = validate_span(y_range[0], y_range[1], self.y_min);
        Self::new(x_min, x_max, y_min, y_max)
    }

    /// Spannweite der X-Achse.
    pub fn width(&self) -> Dec16 {
        self.x_max - self.x_min
    }

    /// Spannweite der Y-Achse.
    pub fn height(&self) -> Dec16 {
        self.y_max - self.y_min
    }

    pub fn clamp_x(&self, x: Dec16) -> Dec16 {
        clamp(x, self.x_min, self.x_max)
    }

    pub fn clamp_y(&self, y: Dec16) -> Dec16 {
        clamp(y, self.y_min, self.y_max)
    }

    /// Begrenzt beide Koordinaten eines Punkts auf das Rechteck.
    pub fn clamp_point(&self, point: Point) -> Point {
        Point::new(self.clamp_x(point.x), self.clamp_y(point.y))
    }

    /// Linke untere Ecke (Benutzer-Koordinaten, y wächst nach oben).
    pub fn min_corner(&self) -> Point {
        Point::new(self.x_min, self.y_min)
    }

    /// Rechte obere Ecke.
    pub fn max_corner(&self) -> Point {
        Point::new(self.x_max, self.y_max)
    }
}

fn validate_span(new_min: Dec16, new_max: Dec16, old_min: Dec16) -> (Dec16, Dec16) {
    if new_max - new_min >= BoundsRect::MIN_SPAN {
        return (new_min, new_max);
    }
    if new_min != old_min {
        (new_max - BoundsRect::MIN_SPAN, new_max)
    } else {
        (new_min, new_min + BoundsRect::MIN_SPAN)
    }
}
