//! Kollisions- und Begrenzungsfunktionen für Kontrollpunkte im Fenster.
//!
//! Layer-neutral: wird von den Drag- und Hit-Test-Use-Cases genutzt.

use glam::{IVec2, Vec2};

use crate::core::ScreenPoint;

/// Schiebt `move_point` auf Abstand `min_dist` vom `anchor`, falls er näher liegt.
///
/// Die Richtung bleibt erhalten (Anker → Punkt); liegen beide Punkte aufeinander,
/// wird entlang `+x` verschoben. Koordinaten werden auf ganze Pixel gerundet.
pub fn point_to_point_collide(
    move_point: ScreenPoint,
    anchor: ScreenPoint,
    min_dist: i32,
) -> ScreenPoint {
    let diff = move_point - anchor;
    let min_dist_sq = (min_dist as i64) * (min_dist as i64);
    if diff.as_i64vec2().length_squared() >= min_dist_sq {
        return move_point;
    }

    let direction = if diff == IVec2::ZERO {
        Vec2::X
    } else {
        diff.as_vec2().normalize()
    };
    anchor + (direction * min_dist as f32).round().as_ivec2()
}

/// Hält `point.x` mindestens `min_dist` von beiden Nachbarn entfernt.
///
/// Reicht der Platz nicht für beide Seiten, hat der linke Nachbar Vorrang.
pub fn point_restrict_x(
    point: ScreenPoint,
    x_right: i32,
    x_left: i32,
    min_dist: i32,
) -> ScreenPoint {
    let mut restricted = point;
    if point.x - x_left < min_dist {
        restricted.x = x_left + min_dist;
    } else if x_right - point.x < min_dist {
        restricted.x = x_right - min_dist;
    }
    restricted
}

/// `true`, wenn `p` näher als `dist` am Segment `[s0, s1]` liegt.
///
/// Nur Punkte, deren Lot auf das Segment fällt, zählen (keine runden Endkappen).
/// Abstand genau `dist` gilt nicht als Treffer. Rechnet exakt in `i64`.
pub fn point_to_line_segment_collide(
    s0: ScreenPoint,
    s1: ScreenPoint,
    p: ScreenPoint,
    dist: i32,
) -> bool {
    let s0p = (p - s0).as_i64vec2();
    let s0s1 = (s1 - s0).as_i64vec2();

    let a = s0s1.dot(s0s1);
    if a == 0 {
        return false;
    }
    // t = b / a ist die Projektion von s0p auf s0s1
    let b = s0s1.dot(s0p);
    if b < 0 || b > a {
        return false;
    }
    // Lot² = c - b²/a, mit a multipliziert um ganzzahlig zu bleiben
    let c = s0p.dot(s0p);
    let dist_sq = (dist as i64) * (dist as i64);
    c * a - b * b < dist_sq * a
}
