//! Zentrale Konfiguration für den SplineGen-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::{BoundsRect, Dec16, SplineType};

// ── Spline ──────────────────────────────────────────────────────────

/// Obergrenze des normalisierten Spline-Raums.
///
/// Kleine Werte kosten Präzision bei kleinen X-Abständen, große lassen den
/// Ganzzahlanteil der Koeffizienten überlaufen.
pub const NORMALIZATION_SCALE: i32 = 15;
/// Anzahl der Abtastschritte entlang der Kurve.
pub const CURVE_RESOLUTION: u32 = 100;

// ── Benutzer-Koordinaten ────────────────────────────────────────────

/// Standard-Bereich der Benutzer-Koordinaten auf beiden Achsen.
pub const USER_RANGE_DEFAULT: [i32; 2] = [0, 100];

// ── Fenster ─────────────────────────────────────────────────────────

/// Standard-Fenstergröße in Pixeln (Breite, Höhe).
pub const WINDOW_SIZE_DEFAULT: [i32; 2] = [800, 800];

// ── Punkte ──────────────────────────────────────────────────────────

/// Radius der Kontrollpunkte in Pixeln (auch Hit-Test-Radius).
pub const POINT_SIZE: i32 = 6;
/// Radius der Kurven-Stützpunkte in Pixeln.
pub const CON_POINT_SIZE: i32 = 3;
/// Linienstärke der Kurve in Pixeln.
pub const LINE_THICKNESS: i32 = 1;
/// Minimaler Pixelabstand benachbarter Kontrollpunkte.
pub const MIN_POINT_DELTA: i32 = 10;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `spline_gen_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Spline ──────────────────────────────────────────────────
    /// Interpolationsart
    pub spline_type: SplineType,
    /// Skala des normalisierten Raums (beide Achsen)
    pub normalization_scale: i32,
    /// Abtastschritte entlang der Kurve
    pub resolution: u32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Radius der Kontrollpunkte in Pixeln
    pub point_size: i32,
    /// Radius der Kurven-Stützpunkte in Pixeln
    pub con_point_size: i32,
    /// Linienstärke der Kurve in Pixeln
    pub line_thickness: i32,
    /// Hilfslinien von den Punkten zu den Achsen zeichnen
    #[serde(default)]
    pub draw_ref_lines: bool,
    /// Werte als rohe Fixed-Point-Bits statt Ganzzahlen anzeigen und einlesen
    #[serde(default)]
    pub raw_values: bool,

    // ── Bearbeitung ─────────────────────────────────────────────
    /// Minimaler Pixelabstand benachbarter Kontrollpunkte
    pub min_point_delta: i32,

    // ── Koordinaten ─────────────────────────────────────────────
    /// Benutzer-Bereich der X-Achse
    pub user_x_range: [i32; 2],
    /// Benutzer-Bereich der Y-Achse
    pub user_y_range: [i32; 2],
    /// Fenstergröße in Pixeln (Breite, Höhe)
    #[serde(default = "default_window_size")]
    pub window_size: [i32; 2],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            spline_type: SplineType::default(),
            normalization_scale: NORMALIZATION_SCALE,
            resolution: CURVE_RESOLUTION,

            point_size: POINT_SIZE,
            con_point_size: CON_POINT_SIZE,
            line_thickness: LINE_THICKNESS,
            draw_ref_lines: false,
            raw_values: false,

            min_point_delta: MIN_POINT_DELTA,

            user_x_range: USER_RANGE_DEFAULT,
            user_y_range: USER_RANGE_DEFAULT,
            window_size: WINDOW_SIZE_DEFAULT,
        }
    }
}

/// Serde-Default für `window_size` (ältere Dateien ohne Fenstergröße).
fn default_window_size() -> [i32; 2] {
    WINDOW_SIZE_DEFAULT
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("spline_gen_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("spline_gen_editor.toml")
    }

    /// Benutzer-Rechteck aus den gespeicherten Bereichen (Mindestspanne erzwungen).
    pub fn user_bounds(&self) -> BoundsRect {
        let defaults = BoundsRect::from_ints(
            USER_RANGE_DEFAULT[0],
            USER_RANGE_DEFAULT[1],
            USER_RANGE_DEFAULT[0],
            USER_RANGE_DEFAULT[1],
        );
        defaults.with_min_span(
            self.user_x_range.map(Dec16::saturating_from_int),
            self.user_y_range.map(Dec16::saturating_from_int),
        )
    }

    /// Schreibt ein Benutzer-Rechteck zurück (ganzzahlig gerundet).
    pub fn set_user_bounds(&mut self, bounds: &BoundsRect) {
        self.user_x_range = [bounds.x_min.to_int(), bounds.x_max.to_int()];
        self.user_y_range = [bounds.y_min.to_int(), bounds.y_max.to_int()];
    }

    /// Skala des normalisierten Raums als Fixed-Point-Wert (mindestens 1).
    pub fn normalization_scale(&self) -> Dec16 {
        Dec16::from_int(self.normalization_scale.max(1))
    }

    /// Abtastschritte, mindestens 1.
    pub fn step_count(&self) -> u32 {
        self.resolution.max(1)
    }

    /// Fenster-Rechteck aus `window_size` (mindestens 1×1 Pixel).
    pub fn window_bounds(&self) -> BoundsRect {
        BoundsRect::window(self.window_size[0].max(1), self.window_size[1].max(1))
    }
}
