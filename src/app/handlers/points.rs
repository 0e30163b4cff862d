//! Handler für Kontrollpunkte: Drag, Einfügen, Entfernen, Laden.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ScreenPoint;

/// Startet einen Drag auf dem Punkt.
pub fn begin_drag(state: &mut AppState, index: usize) {
    use_cases::points::begin_drag(state, index);
}

/// Bewegt den gezogenen Punkt.
pub fn update_drag(state: &mut AppState, pos: ScreenPoint) {
    use_cases::drag::update_drag(state, pos);
}

/// Beendet den Drag.
pub fn end_drag(state: &mut AppState) {
    use_cases::points::end_drag(state);
}

/// Fügt einen Punkt ein und startet darauf einen Drag.
pub fn insert(state: &mut AppState, index: usize, pos: ScreenPoint) {
    if use_cases::points::insert_point(state, index, pos) {
        log::info!("Punkt eingefügt an Index {} ({}, {})", index, pos.x, pos.y);
    }
}

/// Entfernt einen Punkt, sofern erlaubt.
pub fn remove(state: &mut AppState, index: usize) {
    if use_cases::points::remove_point(state, index) {
        log::info!("Punkt {} entfernt", index);
    } else {
        log::debug!("Punkt {} nicht entfernbar", index);
    }
}

/// Setzt die Punkte auf die Ecken des Benutzer-Bereichs zurück.
pub fn reset(state: &mut AppState) {
    use_cases::points::reset_points(state);
}

/// Lädt Punkte aus Textlisten und propagiert Fehler an den Aufrufer.
pub fn load(state: &mut AppState, x_text: &str, y_text: &str) -> anyhow::Result<()> {
    use_cases::points::load_points(state, x_text, y_text)
}
