//! Use-Case-Funktionen für Kontrollpunkte: Einfügen, Entfernen, Ziehen, Laden.

use anyhow::bail;

use super::hit_test::hit_test_curve;
use crate::app::AppState;
use crate::core::{Point, ScreenPoint};
use crate::text::parse_point_list;

/// Startet einen Drag auf dem Punkt mit Index `index`.
pub fn begin_drag(state: &mut AppState, index: usize) {
    if index < state.window_points().len() {
        state.drag_point = Some(index);
    }
}

/// Beendet einen laufenden Drag.
pub fn end_drag(state: &mut AppState) {
    state.drag_point = None;
}

/// Prüft, ob ein Klick bei `pos` einen neuen Punkt auf der Kurve einfügt.
///
/// Gibt den Einfügeindex zurück. Nicht-parametrisch muss der Klick in X mindestens
/// `min_point_delta` Pixel von beiden Nachbarn entfernt liegen.
pub fn insertion_target(state: &mut AppState, pos: ScreenPoint) -> Option<usize> {
    let spline = state.spline();
    let (click, index) = hit_test_curve(
        &spline,
        &state.transform,
        &state.user_bounds,
        state.options.step_count(),
        pos,
        state.options.point_size,
    )?;

    let points = state.window_points();
    if index == 0 || index >= points.len() {
        return None;
    }
    if state.is_parametric() {
        return Some(index);
    }
    let min_delta = state.options.min_point_delta;
    let prev_allows = click.x - points[index - 1].x >= min_delta;
    let next_allows = points[index].x - click.x >= min_delta;
    (prev_allows && next_allows).then_some(index)
}

/// Fügt einen Punkt vor `index` ein und startet darauf einen Drag.
///
/// Gibt `true` zurück, wenn der Punkt eingefügt wurde.
pub fn insert_point(state: &mut AppState, index: usize, pos: ScreenPoint) -> bool {
    let points = state.window_points();
    if index == 0 || index >= points.len() {
        log::warn!("Einfügeindex {} ungültig, Punkt verworfen", index);
        return false;
    }
    if points[index - 1] == pos || points[index] == pos {
        log::warn!("Punkt ({}, {}) existiert bereits, verworfen", pos.x, pos.y);
        return false;
    }
    if !state.is_parametric() && !(points[index - 1].x < pos.x && pos.x < points[index].x) {
        log::warn!(
            "Punkt ({}, {}) liegt in X nicht zwischen seinen Nachbarn, verworfen",
            pos.x,
            pos.y
        );
        return false;
    }
    state.modify_points(|points| points.insert(index, pos));
    state.drag_point = Some(index);
    true
}

/// Entfernt einen Punkt, solange mehr als zwei übrig sind.
///
/// Randpunkte lassen sich nur im parametrischen Modus entfernen. Gibt `true`
/// zurück, wenn ein Punkt entfernt wurde.
pub fn remove_point(state: &mut AppState, index: usize) -> bool {
    let len = state.window_points().len();
    if len <= 2 || index >= len {
        return false;
    }
    let is_border = index == 0 || index == len - 1;
    if is_border && !state.is_parametric() {
        return false;
    }
    // Gleiche Nachbarn würden nach dem Entfernen zusammenfallen
    let points = state.window_points();
    if !is_border && points[index - 1] == points[index + 1] {
        return false;
    }
    state.modify_points(|points| {
        points.remove(index);
    });
    true
}

/// Setzt die Punkte auf die linke untere und rechte obere Ecke des Benutzer-Rechtecks.
pub fn reset_points(state: &mut AppState) {
    let corners = [
        state.transform.to_destination(state.user_bounds.min_corner()),
        state.transform.to_destination(state.user_bounds.max_corner()),
    ];
    state.modify_points(|points| {
        points.clear();
        points.extend(corners);
    });
    state.drag_point = None;
    log::info!("Kontrollpunkte zurückgesetzt");
}

/// Übernimmt Punkte in Benutzer-Koordinaten.
///
/// Die Punkte werden ins Fenster abgebildet und dort geprüft. Benachbarte Punkte
/// brauchen denselben Mindestabstand wie beim Ziehen (`min_point_delta`); bei
/// ungültiger Folge bleibt der bisherige Zustand unverändert.
pub fn set_points(state: &mut AppState, points: &[Point]) -> anyhow::Result<()> {
    let transform = state.transform;
    let window_points: Vec<ScreenPoint> = points
        .iter()
        .map(|&p| transform.to_destination(p))
        .collect();

    let min_delta = state.options.min_point_delta;
    if let Err(e) = validate_points(&window_points, state.is_parametric(), min_delta) {
        log::warn!("Punkte abgelehnt: {:#}", e);
        return Err(e);
    }

    state.modify_points(|current| *current = window_points);
    state.drag_point = None;
    log::info!("{} Punkte übernommen", points.len());
    Ok(())
}

/// Parsed X/Y-Listen und übernimmt die Punkte (Rohwerte je nach Option).
pub fn load_points(state: &mut AppState, x_text: &str, y_text: &str) -> anyhow::Result<()> {
    let points = parse_point_list(x_text, y_text, state.options.raw_values)?;
    set_points(state, &points)
}

/// `true`, wenn die Fenster-Punkte eine gültige Kurve ergeben.
///
/// Benachbarte Punkte liegen mindestens `min_delta` Pixel auseinander: in X,
/// parametrisch als Abstand. Mit `min_delta = 1` reicht strenge X-Ordnung bzw.
/// Verschiedenheit.
pub fn points_valid(points: &[ScreenPoint], is_parametric: bool, min_delta: i32) -> bool {
    validate_points(points, is_parametric, min_delta).is_ok()
}

fn validate_points(
    points: &[ScreenPoint],
    is_parametric: bool,
    min_delta: i32,
) -> anyhow::Result<()> {
    if points.len() < 2 {
        bail!("Mindestens zwei Punkte erforderlich, erhalten: {}", points.len());
    }
    let min_delta = min_delta.max(1);
    for (index, pair) in points.windows(2).enumerate() {
        if is_parametric {
            let delta = (pair[1] - pair[0]).as_i64vec2();
            let min_sq = i64::from(min_delta) * i64::from(min_delta);
            if delta.length_squared() < min_sq {
                bail!(
                    "Punkte {} und {} liegen im Fenster näher als {} Pixel",
                    index,
                    index + 1,
                    min_delta
                );
            }
        } else if pair[1].x - pair[0].x < min_delta {
            bail!(
                "X-Werte müssen im Fenster um mindestens {} Pixel aufsteigen (Punkt {}: {} → {})",
                min_delta,
                index + 1,
                pair[0].x,
                pair[1].x
            );
        }
    }
    Ok(())
}
