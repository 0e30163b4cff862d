//! Use-Case-Funktionen für Aufbau und Abtastung der Kurve.

use crate::core::{
    BoundsRect, CoordinateTransform, Dec16, Interpolator, Point, ScreenPoint, SplineFunction,
    SplineType,
};

/// Baut die Kurve aus getrennten X/Y-Folgen.
///
/// Zu wenige Punkte für die gewünschte Art führen zum Rückfall auf eine einfachere,
/// nie zu einem Fehler. Mindestens zwei Punkte sind Pflicht.
pub fn build_spline(
    xs: &[Dec16],
    ys: &[Dec16],
    spline_type: SplineType,
    scale: Dec16,
) -> SplineFunction {
    Interpolator::with_scale(xs, ys, scale, scale).interpolate(spline_type)
}

/// Wie [`build_spline`], aber aus einer Punktfolge.
pub fn build_spline_from_points(
    points: &[Point],
    spline_type: SplineType,
    scale: Dec16,
) -> SplineFunction {
    let (xs, ys): (Vec<Dec16>, Vec<Dec16>) = points.iter().map(|p| (p.x, p.y)).unzip();
    build_spline(&xs, &ys, spline_type, scale)
}

/// Abtast-Koordinaten `c_min, c_min + step, …` bis einschließlich `c_max`.
///
/// Die Schrittweite ist mindestens ein Rohwert-Bit; verfehlt die Schrittfolge
/// `c_max`, wird es angehängt. Liefert nie eine leere Folge.
pub fn sample_coords(spline: &SplineFunction, step_count: u32) -> Vec<Dec16> {
    let c_min = spline.coord_min();
    let c_max = spline.coord_max();
    let divisor = i32::try_from(step_count.max(1)).unwrap_or(i32::MAX);
    let step = ((c_max - c_min) / divisor).max(Dec16::EPSILON);

    // Laufvariable in i64, damit `c + step` nahe am Wertebereichsende nicht überläuft
    let end = c_max.raw() as i64;
    let mut raw = c_min.raw() as i64;
    let sample_count = (end - raw).max(0) / step.raw() as i64 + 2;
    let mut coords = Vec::with_capacity(usize::try_from(sample_count).unwrap_or(0));
    while raw <= end {
        coords.push(Dec16::from_raw(raw as i32));
        raw += step.raw() as i64;
    }
    if coords.last() != Some(&c_max) {
        coords.push(c_max);
    }
    coords
}

/// Tastet die Kurve ab und liefert den Polygonzug in Fenster-Pixeln.
///
/// Jeder Punkt wird vor der Transformation auf den Benutzer-Bereich begrenzt.
pub fn sample_curve(
    spline: &SplineFunction,
    transform: &CoordinateTransform,
    user_bounds: &BoundsRect,
    step_count: u32,
) -> Vec<ScreenPoint> {
    sample_coords(spline, step_count)
        .into_iter()
        .map(|coord| to_screen(spline, transform, user_bounds, coord))
        .collect()
}

/// Wertet die Kurve an `coord` aus und bildet das Ergebnis ins Fenster ab.
pub(crate) fn to_screen(
    spline: &SplineFunction,
    transform: &CoordinateTransform,
    user_bounds: &BoundsRect,
    coord: Dec16,
) -> ScreenPoint {
    let (x, y) = spline.value(coord);
    transform.to_destination(user_bounds.clamp_point(Point::new(x, y)))
}
