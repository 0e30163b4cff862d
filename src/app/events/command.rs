use std::path::PathBuf;

use crate::core::{Dec16, ScreenPoint, SplineType};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Punkte ===
    /// Drag eines Kontrollpunkts starten
    BeginDrag { index: usize },
    /// Gezogenen Punkt zur Zeigerposition bewegen (mit Abstandsregeln)
    UpdateDrag { pos: ScreenPoint },
    /// Drag beenden
    EndDrag,
    /// Neuen Kontrollpunkt vor `index` einfügen
    InsertPoint { index: usize, pos: ScreenPoint },
    /// Kontrollpunkt entfernen
    RemovePoint { index: usize },
    /// Zwei Punkte an den Ecken des Benutzer-Bereichs
    ResetPoints,
    /// Punkte aus Textlisten laden
    LoadPoints { x_text: String, y_text: String },

    // === Einstellungen ===
    /// Interpolationsart setzen
    SetSplineType { spline_type: SplineType },
    /// Benutzer-Bereich setzen (Mindestspanne wird erzwungen)
    SetUserBounds { x: [Dec16; 2], y: [Dec16; 2] },
    /// Fenstergröße setzen, Punkte werden mitskaliert
    SetWindowSize { width: i32, height: i32 },
    /// Einstellungen auf Standard zurücksetzen
    ResetSettings,
    /// Rohwert-Modus setzen
    SetRawValues { enabled: bool },
    /// Hilfslinien setzen
    SetDrawRefLines { enabled: bool },
    /// Abtastschritte setzen
    SetResolution { resolution: u32 },
    /// Punktgröße setzen
    SetPointSize { size: i32 },
    /// Optionen als TOML speichern
    SaveOptions { path: PathBuf },
}
