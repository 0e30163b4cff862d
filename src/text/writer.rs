//! Ausgabe von Punktlisten als kommaseparierter Text.

use crate::core::{Dec16, Point};

/// Trennzeichen zwischen zwei Werten.
const SEPARATOR: &str = ", ";

/// Formatiert die X- und Y-Werte der Punkte als getrennte Listen.
///
/// Ganzzahlen werden gerundet ausgegeben, mit `raw` die rohen Fixed-Point-Bits.
/// Die Ausgabe lässt sich mit [`crate::text::parse_point_list`] wieder einlesen.
pub fn format_point_list(points: &[Point], raw: bool) -> (String, String) {
    let format_value = |value: Dec16| {
        if raw {
            value.raw().to_string()
        } else {
            value.to_int().to_string()
        }
    };
    let xs: Vec<String> = points.iter().map(|p| format_value(p.x)).collect();
    let ys: Vec<String> = points.iter().map(|p| format_value(p.y)).collect();
    (xs.join(SEPARATOR), ys.join(SEPARATOR))
}
