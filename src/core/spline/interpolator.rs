//! Aufbau der Kurven aus Kontrollpunkten.
//!
//! Alle Werte werden vor der Berechnung pro Achse auf `[0, scale]` normalisiert.
//! Kleine Skalen verlieren Präzision bei kleinen X-Abständen, große Skalen lassen
//! den Ganzzahlanteil der kubischen Koeffizienten überlaufen; 15 ist der bewährte
//! Kompromiss.

use super::parametric::Parametric2DSpline;
use super::polynomial::PolynomialSpline;
use super::{Normalization, SplineFunction, SplineType};
use crate::core::bounds::BoundsRect;
use crate::core::fixed::Dec16;
use crate::core::math::rescale;

/// Erzeugt Kurvenfunktionen aus einer Punktfolge.
///
/// Hat eine Kurvenart zu wenige Punkte, fällt sie auf die nächst einfachere zurück:
/// Akima (ab 5 Punkten) → natürlich kubisch (ab 3) → linear (ab 2).
#[derive(Debug, Clone)]
pub struct Interpolator {
    x_norm: Vec<Dec16>,
    y_norm: Vec<Dec16>,
    x_scale: Dec16,
    y_scale: Dec16,
    original: BoundsRect,
}

impl Interpolator {
    /// Standard-Skala des normalisierten Raums.
    pub const DEFAULT_SCALE: Dec16 = Dec16::from_int(15);

    /// Interpolator mit [`Interpolator::DEFAULT_SCALE`] auf beiden Achsen.
    pub fn new(xs: &[Dec16], ys: &[Dec16]) -> Self {
        Self::with_scale(xs, ys, Self::DEFAULT_SCALE, Self::DEFAULT_SCALE)
    }

    /// # Panics
    /// Wenn die Folgen unterschiedlich lang sind oder weniger als zwei Punkte enthalten.
    pub fn with_scale(xs: &[Dec16], ys: &[Dec16], x_scale: Dec16, y_scale: Dec16) -> Self {
        assert_eq!(xs.len(), ys.len(), "x- und y-Folge müssen gleich lang sein");
        assert!(xs.len() >= 2, "Interpolation braucht mindestens 2 Punkte");

        let (x_min, x_max) = min_max(xs);
        let (y_min, y_max) = min_max(ys);

        Self {
            x_norm: normalize(xs, x_min, x_max, x_scale),
            y_norm: normalize(ys, y_min, y_max, y_scale),
            x_scale,
            y_scale,
            original: BoundsRect::new(x_min, x_max, y_min, y_max),
        }
    }

    /// Normalisierte X-Werte.
    pub fn x_norm(&self) -> &[Dec16] {
        &self.x_norm
    }

    /// Normalisierte Y-Werte.
    pub fn y_norm(&self) -> &[Dec16] {
        &self.y_norm
    }

    /// Erzeugt die Kurve der gewünschten Art.
    pub fn interpolate(&self, spline_type: SplineType) -> SplineFunction {
        log::debug!(
            "Erzeuge {} aus {} Punkten",
            spline_type.label(),
            self.x_norm.len()
        );
        match spline_type {
            SplineType::Linear => SplineFunction::Polynomial(self.interpolate_linear()),
            SplineType::Cubic => SplineFunction::Polynomial(self.interpolate_natural()),
            SplineType::CubicMonotone => SplineFunction::Polynomial(self.interpolate_akima()),
            SplineType::Parametric => SplineFunction::Parametric(self.interpolate_2d()),
        }
    }

    pub fn interpolate_linear(&self) -> PolynomialSpline {
        linear(&self.x_norm, &self.y_norm, self.normalization())
    }

    pub fn interpolate_natural(&self) -> PolynomialSpline {
        natural(&self.x_norm, &self.y_norm, self.normalization())
    }

    pub fn interpolate_akima(&self) -> PolynomialSpline {
        akima(&self.x_norm, &self.y_norm, self.normalization())
    }

    /// Parametrische Akima-Kurve über der kumulierten Sehnenlänge.
    ///
    /// Benachbarte Punkte müssen verschieden sein, sonst steigen die Stützstellen
    /// nicht streng an.
    pub fn interpolate_2d(&self) -> Parametric2DSpline {
        let t_knots = chord_parameters(&self.x_norm, &self.y_norm);
        let t_min = t_knots[0];
        let t_max = t_knots[t_knots.len() - 1];
        let original = &self.original;

        let x_func = akima(
            &t_knots,
            &self.x_norm,
            Normalization {
                x_scale: t_max,
                y_scale: self.x_scale,
                original: BoundsRect::new(t_min, t_max, original.x_min, original.x_max),
            },
        );
        let y_func = akima(
            &t_knots,
            &self.y_norm,
            Normalization {
                x_scale: t_max,
                y_scale: self.y_scale,
                original: BoundsRect::new(t_min, t_max, original.y_min, original.y_max),
            },
        );
        Parametric2DSpline::new(x_func, y_func, t_knots)
    }

    fn normalization(&self) -> Normalization {
        Normalization {
            x_scale: self.x_scale,
            y_scale: self.y_scale,
            original: self.original,
        }
    }
}

fn min_max(values: &[Dec16]) -> (Dec16, Dec16) {
    values
        .iter()
        .fold((Dec16::MAX, Dec16::MIN), |(min, max), &value| {
            (min.min(value), max.max(value))
        })
}

/// Skaliert auf `[0, scale]`; ein entarteter Bereich wird durch `min` ersetzt.
fn normalize(values: &[Dec16], min: Dec16, max: Dec16, scale: Dec16) -> Vec<Dec16> {
    values
        .iter()
        .map(|&value| {
            if max != min {
                rescale(value, min, max, Dec16::ZERO, scale)
            } else {
                min
            }
        })
        .collect()
}

/// Kumulierte Sehnenlänge mit Schrittweite `sqrt(|Δx| + |Δy|)`.
///
/// Ergibt ruhigere Kurven als die euklidische Länge.
fn chord_parameters(xs: &[Dec16], ys: &[Dec16]) -> Vec<Dec16> {
    let mut t_knots = Vec::with_capacity(xs.len());
    let mut sum = Dec16::ZERO;
    t_knots.push(sum);
    for (x, y) in xs.windows(2).zip(ys.windows(2)) {
        let g = (x[1] - x[0]).abs() + (y[1] - y[0]).abs();
        sum += g.sqrt();
        t_knots.push(sum);
    }
    t_knots
}

/// Ableitung an `xs[at]` über die Parabel durch drei aufeinanderfolgende Samples.
fn differentiate_three_point(xs: &[Dec16], ys: &[Dec16], at: usize, samples: [usize; 3]) -> Dec16 {
    let [first, second, third] = samples;
    let y0 = ys[first];
    let y1 = ys[second];
    let y2 = ys[third];

    let t = xs[at] - xs[first];
    let t1 = xs[second] - xs[first];
    let t2 = xs[third] - xs[first];

    let a = (y2 - y0 - t2 / t1 * (y1 - y0)) / (t2 * t2 - t1 * t2);
    let b = (y1 - y0 - a * t1 * t1) / t1;

    2 * a * t + b
}

fn linear(xs: &[Dec16], ys: &[Dec16], normalization: Normalization) -> PolynomialSpline {
    debug_assert_eq!(xs.len(), ys.len());
    let polynomials = xs
        .windows(2)
        .zip(ys.windows(2))
        .map(|(x, y)| vec![y[0], (y[1] - y[0]) / (x[1] - x[0])])
        .collect();
    PolynomialSpline::new(xs.to_vec(), polynomials, normalization)
}

/// Natürlicher kubischer Spline (zweite Ableitung an den Rändern 0).
fn natural(xs: &[Dec16], ys: &[Dec16], normalization: Normalization) -> PolynomialSpline {
    let m = xs.len();
    if m < 3 {
        log::debug!("Kubischer Spline mit {} Punkten: Rückfall auf linear", m);
        return linear(xs, ys, normalization);
    }
    let n = m - 1;

    let h: Vec<Dec16> = xs.windows(2).map(|x| x[1] - x[0]).collect();

    let mut alpha = vec![Dec16::ZERO; n];
    for i in 1..n {
        alpha[i] = 3 * (ys[i + 1] - ys[i]) / h[i] - 3 * (ys[i] - ys[i - 1]) / h[i - 1];
    }

    // Tridiagonales System: Vorwärts-Elimination
    let mut mu = vec![Dec16::ZERO; n];
    let mut z = vec![Dec16::ZERO; n + 1];
    for i in 1..n {
        let l = 2 * (xs[i + 1] - xs[i - 1]) - h[i - 1] * mu[i - 1];
        mu[i] = h[i] / l;
        z[i] = (alpha[i] - h[i - 1] * z[i - 1]) / l;
    }

    // Rückwärts-Substitution
    let mut b = vec![Dec16::ZERO; n];
    let mut c = vec![Dec16::ZERO; n + 1];
    let mut d = vec![Dec16::ZERO; n];
    for j in (0..n).rev() {
        c[j] = z[j] - mu[j] * c[j + 1];
        b[j] = (ys[j + 1] - ys[j]) / h[j] - h[j] * (c[j + 1] + 2 * c[j]) / 3;
        d[j] = (c[j + 1] - c[j]) / 3 / h[j];
    }

    let polynomials = (0..n).map(|i| vec![ys[i], b[i], c[i], d[i]]).collect();
    PolynomialSpline::new(xs.to_vec(), polynomials, normalization)
}

/// Akima-Spline: Hermite-Segmente mit gewichteten Sekanten-Ableitungen.
fn akima(xs: &[Dec16], ys: &[Dec16], normalization: Normalization) -> PolynomialSpline {
    let m = xs.len();
    if m < 5 {
        log::debug!("Akima-Spline mit {} Punkten: Rückfall auf kubisch", m);
        return natural(xs, ys, normalization);
    }
    let n = m - 1;

    let differences: Vec<Dec16> = xs
        .windows(2)
        .zip(ys.windows(2))
        .map(|(x, y)| (y[1] - y[0]) / (x[1] - x[0]))
        .collect();

    let mut weights = vec![Dec16::ZERO; n];
    for i in 1..n {
        weights[i] = (differences[i] - differences[i - 1]).abs();
    }

    let mut derivatives = vec![Dec16::ZERO; m];
    for i in 2..m - 2 {
        let w_next = weights[i + 1];
        let w_prev = weights[i - 1];
        derivatives[i] = if w_next == Dec16::ZERO && w_prev == Dec16::ZERO {
            let (x, x_next, x_prev) = (xs[i], xs[i + 1], xs[i - 1]);
            ((x_next - x) * differences[i - 1] + (x - x_prev) * differences[i]) / (x_next - x_prev)
        } else {
            (w_next * differences[i - 1] + w_prev * differences[i]) / (w_next + w_prev)
        };
    }

    derivatives[0] = differentiate_three_point(xs, ys, 0, [0, 1, 2]);
    derivatives[1] = differentiate_three_point(xs, ys, 1, [0, 1, 2]);
    derivatives[m - 2] = differentiate_three_point(xs, ys, m - 2, [m - 3, m - 2, m - 1]);
    derivatives[m - 1] = differentiate_three_point(xs, ys, m - 1, [m - 3, m - 2, m - 1]);

    let polynomials = (0..n)
        .map(|i| {
            let w = xs[i + 1] - xs[i];
            let w2 = w * w;
            let (y, y_next) = (ys[i], ys[i + 1]);
            let (d, d_next) = (derivatives[i], derivatives[i + 1]);
            vec![
                y,
                d,
                (3 * (y_next - y) / w - 2 * d - d_next) / w,
                (2 * (y - y_next) / w + d + d_next) / w2,
            ]
        })
        .collect();
    PolynomialSpline::new(xs.to_vec(), polynomials, normalization)
}
