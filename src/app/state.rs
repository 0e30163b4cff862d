//! Application State: zentrale Datenhaltung.
//!
//! Der Editor kennt drei Koordinatensysteme: Benutzer-Koordinaten (y nach oben),
//! Fenster-Pixel (y nach unten) und den normalisierten Spline-Raum. Kontrollpunkte
//! werden in Fenster-Pixeln gehalten, die Benutzer-Koordinaten daraus abgeleitet.

use super::use_cases;
use crate::core::{BoundsRect, CoordinateTransform, Point, ScreenPoint, SplineFunction};
use crate::shared::EditorOptions;

/// Hauptzustand der Anwendung
#[derive(Debug)]
pub struct AppState {
    /// Laufzeit-Optionen (Kurvenart, Größen, Bereiche)
    pub options: EditorOptions,
    /// Benutzer-Koordinatenbereich
    pub user_bounds: BoundsRect,
    /// Fenster-Rechteck in Pixeln
    pub window_bounds: BoundsRect,
    /// Abbildung Benutzer ↔ Fenster, neu gebaut bei jeder Bereichsänderung
    pub transform: CoordinateTransform,
    /// Index des gerade gezogenen Punkts
    pub drag_point: Option<usize>,
    window_points: Vec<ScreenPoint>,
    user_points: Vec<Point>,
    user_points_dirty: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State aus geladenen Optionen.
    ///
    /// Startet mit zwei Punkten in der linken unteren und rechten oberen Ecke.
    pub fn with_options(options: EditorOptions) -> Self {
        let user_bounds = options.user_bounds();
        let window_bounds = options.window_bounds();
        let mut state = Self {
            options,
            user_bounds,
            window_bounds,
            transform: CoordinateTransform::new(user_bounds, window_bounds),
            drag_point: None,
            window_points: Vec::new(),
            user_points: Vec::new(),
            user_points_dirty: true,
        };
        use_cases::points::reset_points(&mut state);
        state
    }

    /// Kontrollpunkte in Fenster-Pixeln.
    pub fn window_points(&self) -> &[ScreenPoint] {
        &self.window_points
    }

    /// Ändert die Kontrollpunkte und markiert die Benutzer-Punkte als veraltet.
    pub fn modify_points(&mut self, modify: impl FnOnce(&mut Vec<ScreenPoint>)) {
        modify(&mut self.window_points);
        self.user_points_dirty = true;
    }

    /// Baut die Koordinaten-Abbildung aus den aktuellen Rechtecken neu.
    pub fn refresh_coordinate_system(&mut self) {
        self.transform = CoordinateTransform::new(self.user_bounds, self.window_bounds);
        self.user_points_dirty = true;
    }

    /// Kontrollpunkte in Benutzer-Koordinaten (bei Bedarf neu berechnet).
    pub fn user_points(&mut self) -> &[Point] {
        if self.user_points_dirty {
            let transform = self.transform;
            self.user_points = self
                .window_points
                .iter()
                .map(|&p| transform.to_source(p))
                .collect();
            self.user_points_dirty = false;
        }
        &self.user_points
    }

    /// Kurve durch die aktuellen Kontrollpunkte.
    pub fn spline(&mut self) -> SplineFunction {
        let spline_type = self.options.spline_type;
        let scale = self.options.normalization_scale();
        use_cases::curve::build_spline_from_points(self.user_points(), spline_type, scale)
    }

    /// Abgetastete Kurve in Fenster-Pixeln.
    pub fn curve_polyline(&mut self) -> Vec<ScreenPoint> {
        let spline = self.spline();
        use_cases::curve::sample_curve(
            &spline,
            &self.transform,
            &self.user_bounds,
            self.options.step_count(),
        )
    }

    /// Index des ersten Kontrollpunkts unter dem Zeiger.
    pub fn hovered_point(&self, pos: ScreenPoint) -> Option<usize> {
        use_cases::hit_test::hit_test_point(&self.window_points, pos, self.options.point_size)
    }

    /// Gibt `true` zurück, wenn die gewählte Kurvenart parametrisch ist.
    pub fn is_parametric(&self) -> bool {
        self.options.spline_type.is_parametric()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
