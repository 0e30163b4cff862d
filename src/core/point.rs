//! Punkte im Benutzer- und im Bildschirm-Koordinatensystem.

use std::cmp::Ordering;

use glam::IVec2;

use super::fixed::Dec16;

/// Kontrollpunkt in Benutzer-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: Dec16,
    pub y: Dec16,
}

impl Point {
    /// Erstellt einen Punkt aus zwei Fixed-Point-Werten.
    pub const fn new(x: Dec16, y: Dec16) -> Self {
        Self { x, y }
    }

    /// Erstellt einen Punkt aus ganzzahligen Koordinaten.
    pub const fn from_ints(x: i32, y: i32) -> Self {
        Self {
            x: Dec16::from_int(x),
            y: Dec16::from_int(y),
        }
    }

    /// Vergleicht nur die X-Koordinate (Ordnung für nicht-parametrische Splines).
    pub fn cmp_x(&self, other: &Self) -> Ordering {
        self.x.cmp(&other.x)
    }
}

/// Pixel-Position im Fenster (y wächst nach unten).
pub type ScreenPoint = IVec2;

/// Zusätzliche Abfragen auf Bildschirm-Punkten.
pub trait ScreenPointExt {
    /// Zusätzlicher Toleranzrand in Pixeln für [`ScreenPointExt::is_in_bounds`].
    const FALL_OFF: i32 = 2;

    /// `true`, wenn `(px, py)` höchstens `r` (plus Toleranzrand) von diesem Punkt entfernt ist.
    fn is_in_bounds(self, px: i32, py: i32, r: i32) -> bool;
}

impl ScreenPointExt for ScreenPoint {
    fn is_in_bounds(self, px: i32, py: i32, r: i32) -> bool {
        let reach = (r + Self::FALL_OFF) as i64;
        let delta = (IVec2::new(px, py) - self).as_i64vec2();
        // Quadrate vergleichen statt Wurzel ziehen
        reach * reach > delta.length_squared()
    }
}
