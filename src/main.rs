//! SplineGen Editor (Kommandozeile).
//!
//! Lädt die Editor-Optionen, baut den Startzustand und gibt Kontrollpunkte
//! sowie den abgetasteten Polygonzug als JSON auf stdout aus.

use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;
use spline_gen::{format_point_list, AppState, EditorOptions, SplineType};

/// Ausgabe eines Durchlaufs.
#[derive(Debug, Serialize)]
struct CurveReport {
    spline_type: SplineType,
    /// Kontrollpunkte als kommaseparierte Listen (wie im Einstellungs-Panel)
    points_x: String,
    points_y: String,
    /// Kontrollpunkte in Benutzer-Koordinaten
    user_points: Vec<[f64; 2]>,
    /// Abgetastete Kurve in Fenster-Pixeln
    polyline: Vec<[i32; 2]>,
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("SplineGen Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let options_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(EditorOptions::config_path);
    let options = EditorOptions::load_from_file(&options_path);
    let raw = options.raw_values;
    let mut state = AppState::with_options(options);

    let (points_x, points_y) = format_point_list(state.user_points(), raw);
    let user_points = state
        .user_points()
        .iter()
        .map(|p| [p.x.to_f64(), p.y.to_f64()])
        .collect();
    let polyline = state
        .curve_polyline()
        .into_iter()
        .map(|p| p.to_array())
        .collect();

    let report = CurveReport {
        spline_type: state.options.spline_type,
        points_x,
        points_y,
        user_points,
        polyline,
    };
    let json = serde_json::to_string_pretty(&report).context("JSON-Ausgabe fehlgeschlagen")?;
    println!("{json}");
    Ok(())
}
