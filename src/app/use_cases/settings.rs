//! Use-Case-Funktionen für Editor-Einstellungen und Koordinatenbereiche.

use std::path::Path;

use super::points::{points_valid, reset_points};
use crate::app::AppState;
use crate::core::{Dec16, Point, ScreenPoint, SplineType};
use crate::shared::EditorOptions;

/// Wechselt die Kurvenart.
///
/// Beim Wechsel von parametrisch zu nicht-parametrisch werden die Punkte
/// zurückgesetzt, da ihre X-Werte nicht mehr aufsteigend sein müssen.
pub fn set_spline_type(state: &mut AppState, spline_type: SplineType) {
    let was_parametric = state.is_parametric();
    state.options.spline_type = spline_type;
    if was_parametric && !spline_type.is_parametric() {
        reset_points(state);
    }
}

/// Übernimmt neue Benutzer-Bereiche (Mindestspanne 1) und baut die Abbildung neu.
///
/// Die Kontrollpunkte bleiben im Fenster stehen, ihre Benutzer-Koordinaten ändern sich.
pub fn set_user_bounds(state: &mut AppState, x_range: [Dec16; 2], y_range: [Dec16; 2]) {
    state.user_bounds = state.user_bounds.with_min_span(x_range, y_range);
    state.options.set_user_bounds(&state.user_bounds);
    state.refresh_coordinate_system();
}

/// Passt das Fenster-Rechteck an eine neue Fenstergröße an.
///
/// Die Benutzer-Koordinaten der Punkte bleiben erhalten. Wird die Folge durch
/// die neue Pixel-Rundung ungültig, werden die Punkte zurückgesetzt.
pub fn resize_window(state: &mut AppState, width: i32, height: i32) {
    let user_points: Vec<Point> = state.user_points().to_vec();

    state.options.window_size = [width.max(1), height.max(1)];
    state.window_bounds = state.options.window_bounds();
    state.refresh_coordinate_system();

    let transform = state.transform;
    let projected: Vec<ScreenPoint> = user_points
        .iter()
        .map(|&p| transform.to_destination(p))
        .collect();
    if points_valid(&projected, state.is_parametric(), 1) {
        state.modify_points(|points| *points = projected);
    } else {
        log::warn!(
            "Punkte passen nicht in das Fenster {}x{}, setze zurück",
            width,
            height
        );
        reset_points(state);
    }
}

/// Stellt die Standard-Optionen wieder her. Die Fenstergröße bleibt erhalten.
pub fn reset_settings(state: &mut AppState) {
    let was_parametric = state.is_parametric();
    let window_size = state.options.window_size;

    state.options = EditorOptions {
        window_size,
        ..EditorOptions::default()
    };
    state.user_bounds = state.options.user_bounds();
    state.refresh_coordinate_system();

    if was_parametric && !state.is_parametric() {
        reset_points(state);
    }
    log::info!("Einstellungen zurückgesetzt");
}

/// Schaltet die Anzeige und Eingabe von rohen Fixed-Point-Werten.
pub fn set_raw_values(state: &mut AppState, enabled: bool) {
    state.options.raw_values = enabled;
}

/// Schaltet das Zeichnen der Hilfslinien.
pub fn set_draw_ref_lines(state: &mut AppState, enabled: bool) {
    state.options.draw_ref_lines = enabled;
}

/// Setzt die Anzahl der Abtastschritte (mindestens 1).
pub fn set_resolution(state: &mut AppState, resolution: u32) {
    state.options.resolution = resolution.max(1);
}

/// Setzt den Punkt-Radius in Pixeln (mindestens 1).
pub fn set_point_size(state: &mut AppState, size: i32) {
    state.options.point_size = size.max(1);
}

/// Speichert die aktuellen Optionen.
pub fn save_options(state: &AppState, path: &Path) -> anyhow::Result<()> {
    state.options.save_to_file(path)
}
