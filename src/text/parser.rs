//! Parser für kommaseparierte Punktlisten.

use anyhow::bail;
use anyhow::{Context, Result};

use crate::core::{Dec16, Point};

/// Parsed getrennte X- und Y-Listen (`"0, 25, 100"`) zu Punkten.
///
/// Mit `raw` werden die Zahlen als rohe Fixed-Point-Bits gelesen, sonst als Ganzzahlen.
/// Leere Einträge (z.B. ein abschließendes Komma) werden übersprungen.
pub fn parse_point_list(x_text: &str, y_text: &str, raw: bool) -> Result<Vec<Point>> {
    let xs: Vec<i32> = parse_list(x_text, ',').context("X-Werte ungültig")?;
    let ys: Vec<i32> = parse_list(y_text, ',').context("Y-Werte ungültig")?;

    if xs.len() != ys.len() {
        bail!(
            "Anzahl der X-Werte ({}) passt nicht zur Anzahl der Y-Werte ({})",
            xs.len(),
            ys.len()
        );
    }

    let to_dec = |value: i32| -> Result<Dec16> {
        if raw {
            return Ok(Dec16::from_raw(value));
        }
        match Dec16::checked_from_int(value) {
            Some(dec) => Ok(dec),
            None => bail!(
                "Wert {} liegt außerhalb von [{}, {}]",
                value,
                Dec16::INT_MIN,
                Dec16::INT_MAX
            ),
        }
    };
    xs.into_iter()
        .zip(ys)
        .map(|(x, y)| -> Result<Point> { Ok(Point::new(to_dec(x)?, to_dec(y)?)) })
        .collect()
}

/// Hilfsfunktion zum Parsen einer getrennten Liste.
fn parse_list<T: std::str::FromStr>(text: &str, delimiter: char) -> Result<Vec<T>>
where
    <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    text.split(delimiter)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|trimmed| {
            trimmed.parse::<T>().with_context(|| {
                format!(
                    "Wert '{}' konnte nicht geparst werden",
                    truncate_for_error(trimmed)
                )
            })
        })
        .collect::<Result<Vec<T>, _>>()
}

/// Kürzt einen String für Fehlermeldungen auf max. 40 Zeichen
fn truncate_for_error(s: &str) -> &str {
    match s.char_indices().nth(40) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
