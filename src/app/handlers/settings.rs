//! Handler für Editor-Einstellungen, Bereiche und Fenstergröße.

use std::path::Path;

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{Dec16, SplineType};

/// Setzt die Interpolationsart.
pub fn set_spline_type(state: &mut AppState, spline_type: SplineType) {
    use_cases::settings::set_spline_type(state, spline_type);
    log::info!("Kurvenart: {}", spline_type.label());
}

/// Setzt den Benutzer-Bereich.
pub fn set_user_bounds(state: &mut AppState, x: [Dec16; 2], y: [Dec16; 2]) {
    use_cases::settings::set_user_bounds(state, x, y);
    let bounds = state.user_bounds;
    log::info!(
        "Benutzer-Bereich: x [{}, {}], y [{}, {}]",
        bounds.x_min,
        bounds.x_max,
        bounds.y_min,
        bounds.y_max
    );
}

/// Passt den State an eine neue Fenstergröße an.
pub fn set_window_size(state: &mut AppState, width: i32, height: i32) {
    use_cases::settings::resize_window(state, width, height);
}

/// Stellt die Standard-Einstellungen wieder her.
pub fn reset(state: &mut AppState) {
    use_cases::settings::reset_settings(state);
}

/// Setzt den Rohwert-Modus.
pub fn set_raw_values(state: &mut AppState, enabled: bool) {
    use_cases::settings::set_raw_values(state, enabled);
}

/// Setzt das Zeichnen der Hilfslinien.
pub fn set_draw_ref_lines(state: &mut AppState, enabled: bool) {
    use_cases::settings::set_draw_ref_lines(state, enabled);
}

/// Setzt die Abtastschritte.
pub fn set_resolution(state: &mut AppState, resolution: u32) {
    use_cases::settings::set_resolution(state, resolution);
}

/// Setzt die Punktgröße.
pub fn set_point_size(state: &mut AppState, size: i32) {
    use_cases::settings::set_point_size(state, size);
}

/// Speichert die Optionen und propagiert Fehler an den Aufrufer.
pub fn save_options(state: &AppState, path: &Path) -> anyhow::Result<()> {
    use_cases::settings::save_options(state, path)
}
