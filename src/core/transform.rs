//! Umrechnung zwischen Benutzer- und Fenster-Koordinaten.

use super::bounds::BoundsRect;
use super::fixed::Dec16;
use super::math::rescale;
use super::point::{Point, ScreenPoint};

/// Affine Abbildung zwischen zwei unabhängig skalierten Rechtecken.
///
/// Quelle ist das Benutzer-Koordinatensystem (y nach oben), Ziel ist das Fenster
/// (y nach unten). Werte außerhalb der Quelle werden nicht begrenzt.
/// Muss neu erstellt werden, sobald sich eines der Rechtecke ändert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateTransform {
    source: BoundsRect,
    destination: BoundsRect,
}

impl CoordinateTransform {
    pub fn new(source: BoundsRect, destination: BoundsRect) -> Self {
        Self {
            source,
            destination,
        }
    }

    pub fn source(&self) -> &BoundsRect {
        &self.source
    }

    pub fn destination(&self) -> &BoundsRect {
        &self.destination
    }

    /// Benutzer-Koordinaten → Fenster-Pixel (gerundet, y gespiegelt).
    pub fn to_destination(&self, point: Point) -> ScreenPoint {
        let (src, dst) = (&self.source, &self.destination);
        let x = rescale(point.x, src.x_min, src.x_max, dst.x_min, dst.x_max);
        let y = rescale(point.y, src.y_min, src.y_max, dst.y_min, dst.y_max);
        ScreenPoint::new(x.to_int(), (dst.y_max - y).to_int())
    }

    /// Fenster-Pixel → Benutzer-Koordinaten.
    pub fn to_source(&self, point: ScreenPoint) -> Point {
        let (src, dst) = (&self.source, &self.destination);
        let x = Dec16::from_int(point.x);
        let y = dst.y_max - Dec16::from_int(point.y);
        Point::new(
            rescale(x, dst.x_min, dst.x_max, src.x_min, src.x_max),
            rescale(y, dst.y_min, dst.y_max, src.y_min, src.y_max),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform() -> CoordinateTransform {
        CoordinateTransform::new(
            BoundsRect::from_ints(0, 100, 0, 100),
            BoundsRect::window(800, 600),
        )
    }

    #[test]
    fn test_corners_flip_y() {
        let t = transform();
        assert_eq!(t.to_destination(Point::from_ints(0, 0)), ScreenPoint::new(0, 600));
        assert_eq!(t.to_destination(Point::from_ints(100, 100)), ScreenPoint::new(800, 0));
        assert_eq!(t.to_destination(Point::from_ints(50, 50)), ScreenPoint::new(400, 300));
    }

    #[test]
    fn test_to_source_inverts_to_destination() {
        let t = transform();
        assert_eq!(t.to_source(ScreenPoint::new(0, 600)), Point::from_ints(0, 0));
        assert_eq!(t.to_source(ScreenPoint::new(800, 0)), Point::from_ints(100, 100));
        for (x, y) in [(13, 577), (400, 300), (799, 1), (250, 420)] {
            let screen = ScreenPoint::new(x, y);
            assert_eq!(t.to_destination(t.to_source(screen)), screen);
        }
    }

    #[test]
    fn test_out_of_range_is_not_clamped() {
        let t = transform();
        let outside = t.to_destination(Point::from_ints(-50, 150));
        assert_eq!(outside, ScreenPoint::new(-400, -300));
    }
}
