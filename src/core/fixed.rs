//! Deterministische Fixed-Point-Zahlen.
//!
//! `Fixed<F>` speichert einen vorzeichenbehafteten Wert als `i32` mit `F`
//! Nachkommabits. Multiplikation und Division rechnen über ein `i64`-Zwischenergebnis
//! und runden das letzte Bit kaufmännisch (halbe Einheit weg von Null).
//! Ergebnisse werden ohne Sättigung auf `i32` verengt; die Aufrufer halten die Werte
//! in Bereichen, in denen das nicht überläuft (Normalisierung auf `[0, scale]`).

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Vorzeichenbehaftete Fixed-Point-Zahl mit `FRAC` Nachkommabits.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixed<const FRAC: u32>(i32);

/// Großer Wertebereich, geringere Präzision (16 Nachkommabits, ganzzahlig ±32767).
pub type Dec16 = Fixed<16>;

/// Hohe Präzision für den Bereich `[-128, 128)` (24 Nachkommabits).
pub type DecPrecise = Fixed<24>;

impl<const FRAC: u32> Fixed<FRAC> {
    /// Anzahl der Nachkommabits.
    pub const FRAC_BITS: u32 = FRAC;
    /// Rohwert von `1`.
    pub const ONE_RAW: i32 = 1 << FRAC;
    /// Wert `0`.
    pub const ZERO: Self = Self(0);
    /// Wert `1`.
    pub const ONE: Self = Self(1 << FRAC);
    /// Kleinster darstellbarer positiver Schritt.
    pub const EPSILON: Self = Self(1);
    /// Kleinster darstellbarer Wert.
    pub const MIN: Self = Self(i32::MIN);
    /// Größter darstellbarer Wert.
    pub const MAX: Self = Self(i32::MAX);

    /// Erstellt einen Wert aus der skalierten Rohdarstellung.
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Kleinste exakt darstellbare Ganzzahl.
    pub const INT_MIN: i32 = i32::MIN >> FRAC;
    /// Größte exakt darstellbare Ganzzahl.
    pub const INT_MAX: i32 = i32::MAX >> FRAC;

    /// Erstellt einen Wert aus einer Ganzzahl (exakt innerhalb des Wertebereichs).
    pub const fn from_int(value: i32) -> Self {
        Self(value << FRAC)
    }

    /// Wie [`Fixed::from_int`], aber `None` außerhalb von `[INT_MIN, INT_MAX]`.
    pub const fn checked_from_int(value: i32) -> Option<Self> {
        if value < Self::INT_MIN || value > Self::INT_MAX {
            None
        } else {
            Some(Self::from_int(value))
        }
    }

    /// Wie [`Fixed::from_int`], begrenzt auf `[INT_MIN, INT_MAX]`.
    pub const fn saturating_from_int(value: i32) -> Self {
        if value < Self::INT_MIN {
            Self::from_int(Self::INT_MIN)
        } else if value > Self::INT_MAX {
            Self::from_int(Self::INT_MAX)
        } else {
            Self::from_int(value)
        }
    }

    /// Liefert die skalierte Rohdarstellung.
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Rundet auf die nächste Ganzzahl; `.5` wird von Null weg gerundet.
    pub const fn round(self) -> Self {
        let one = Self::ONE_RAW as i64;
        let value = self.0 as i64;
        let shifted = if value >= 0 {
            value + one / 2
        } else {
            value - one / 2
        };
        Self((shifted / one * one) as i32)
    }

    /// Wandelt in eine Ganzzahl um (Rundung wie [`Fixed::round`], kein Abschneiden).
    pub const fn to_int(self) -> i32 {
        self.round().0 / Self::ONE_RAW
    }

    /// Rundet Richtung minus unendlich.
    pub const fn floor(self) -> Self {
        Self((self.0 >> FRAC) << FRAC)
    }

    /// Betrag.
    pub const fn abs(self) -> Self {
        Self(self.0.wrapping_abs())
    }

    /// Quadratwurzel, auf das nächste darstellbare Bit gerundet.
    ///
    /// Negative Werte verletzen den Vertrag.
    pub fn sqrt(self) -> Self {
        assert!(self.0 >= 0, "Quadratwurzel aus negativem Wert: {self}");
        let scaled = (self.0 as u64) << FRAC;
        let root = scaled.isqrt();
        // (r + 0.5)^2 = r^2 + r + 0.25
        let rounded = if scaled - root * root > root {
            root + 1
        } else {
            root
        };
        Self(rounded as i32)
    }

    /// Wechselt die Nachkommabreite, gerundet wie die Multiplikation.
    pub fn convert<const OTHER: u32>(self) -> Fixed<OTHER> {
        let value = self.0 as i64;
        let shift = FRAC.abs_diff(OTHER);
        if OTHER >= FRAC {
            Fixed::<OTHER>::from_raw((value << shift) as i32)
        } else {
            let doubled = value / (1i64 << (shift - 1));
            Fixed::<OTHER>::from_raw((doubled / 2 + doubled % 2) as i32)
        }
    }

    /// Näherungswert als `f64` (nur für Anzeige und Tests).
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::ONE_RAW as f64
    }
}

impl<const FRAC: u32> From<i32> for Fixed<FRAC> {
    fn from(value: i32) -> Self {
        Self::from_int(value)
    }
}

impl<const FRAC: u32> Add for Fixed<FRAC> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl<const FRAC: u32> AddAssign for Fixed<FRAC> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const FRAC: u32> Sub for Fixed<FRAC> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl<const FRAC: u32> SubAssign for Fixed<FRAC> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const FRAC: u32> Neg for Fixed<FRAC> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

impl<const FRAC: u32> Mul for Fixed<FRAC> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        // Ein Bit mehr behalten, dann halbe Einheit von Null weg runden
        let value = (self.0 as i64 * rhs.0 as i64) / (Self::ONE_RAW as i64 / 2);
        Self((value / 2 + value % 2) as i32)
    }
}

impl<const FRAC: u32> Div for Fixed<FRAC> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        assert!(rhs.0 != 0, "Fixed-Point-Division durch Null");
        let value = (self.0 as i64 * Self::ONE_RAW as i64 * 2) / rhs.0 as i64;
        Self((value / 2 + value % 2) as i32)
    }
}

/// Skalierung mit einer Ganzzahl direkt auf dem Rohwert.
impl<const FRAC: u32> Mul<i32> for Fixed<FRAC> {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self(self.0.wrapping_mul(rhs))
    }
}

impl<const FRAC: u32> Mul<Fixed<FRAC>> for i32 {
    type Output = Fixed<FRAC>;

    fn mul(self, rhs: Fixed<FRAC>) -> Fixed<FRAC> {
        rhs * self
    }
}

/// Ganzzahl-Division auf dem Rohwert (schneidet ab).
impl<const FRAC: u32> Div<i32> for Fixed<FRAC> {
    type Output = Self;

    fn div(self, rhs: i32) -> Self {
        Self(self.0 / rhs)
    }
}

impl<const FRAC: u32> fmt::Display for Fixed<FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}

impl<const FRAC: u32> fmt::Debug for Fixed<FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (raw {})", self.to_f64(), self.0)
    }
}
