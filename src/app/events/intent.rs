use std::path::PathBuf;

use crate::core::{ScreenPoint, SplineType};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Linke Maustaste gedrückt (Punkt greifen oder auf der Kurve einfügen)
    PrimaryPressed { pos: ScreenPoint },
    /// Linke Maustaste losgelassen (Drag beenden)
    PrimaryReleased,
    /// Rechte Maustaste gedrückt (Punkt entfernen)
    SecondaryPressed { pos: ScreenPoint },
    /// Mauszeiger bewegt
    PointerMoved { pos: ScreenPoint },
    /// Fenstergröße hat sich geändert
    WindowResized { width: i32, height: i32 },
    /// Interpolationsart im Panel gewählt
    SplineTypeChanged { spline_type: SplineType },
    /// Benutzer-Koordinatenbereich geändert (Ganzzahlen oder Rohwerte je nach Modus)
    UserBoundsChanged { x: [i32; 2], y: [i32; 2] },
    /// Punkte auf Ausgangszustand zurücksetzen
    ResetPointsRequested,
    /// Einstellungen auf Standard zurücksetzen
    ResetSettingsRequested,
    /// Punktlisten aus Textfeldern laden
    LoadPointsRequested { x_text: String, y_text: String },
    /// Anzeige/Eingabe als Rohwerte umgeschaltet
    RawValuesToggled { enabled: bool },
    /// Hilfslinien umgeschaltet
    RefLinesToggled { enabled: bool },
    /// Abtastschritte der Kurve geändert
    ResolutionChanged { resolution: u32 },
    /// Punktgröße geändert
    PointSizeChanged { size: i32 },
    /// Optionen speichern
    SaveOptionsRequested { path: PathBuf },
}
