//! Skalierung, Begrenzung und Suche auf Fixed-Point-Werten.

use super::fixed::Fixed;

/// Bildet `val` linear von `[val_min, val_max]` auf `[res_min, res_max]` ab.
///
/// Je nachdem welcher Bereich größer ist, wird zuerst dividiert oder zuerst
/// multipliziert, damit das Zwischenergebnis nicht überläuft.
/// `val_max` muss ungleich `val_min` sein.
pub fn rescale<const F: u32>(
    val: Fixed<F>,
    val_min: Fixed<F>,
    val_max: Fixed<F>,
    res_min: Fixed<F>,
    res_max: Fixed<F>,
) -> Fixed<F> {
    if val_max > res_max {
        return res_min + (val - val_min) / (val_max - val_min) * (res_max - res_min);
    }
    res_min + (res_max - res_min) / (val_max - val_min) * (val - val_min)
}

/// Begrenzt `val` auf `[res_min, res_max]`.
///
/// Anders als `Ord::clamp` panikt die Funktion nicht bei vertauschten Grenzen,
/// dann gewinnt `res_min`.
pub fn clamp<const F: u32>(val: Fixed<F>, res_min: Fixed<F>, res_max: Fixed<F>) -> Fixed<F> {
    val.min(res_max).max(res_min)
}

/// Liefert den Index des ersten Elements `>= val` in einer aufsteigend sortierten
/// Folge, oder `None`, wenn `val` größer als das letzte Element ist.
pub fn binary_search_insertion_index<T: Ord>(sorted: &[T], val: &T) -> Option<usize> {
    let index = sorted.partition_point(|element| element < val);
    (index < sorted.len()).then_some(index)
}
