//! Frontier ("outline") helpers.
//!
//! An outline holds one entry per column: the extent reached so far in that
//! column along the scroll axis. The placement engine advances it as items
//! land; these helpers cover the fill/scan primitives it needs.

/// Per-column frontier along the primary axis.
pub type Outline = Vec<f64>;

/// Uniform outline of `length` columns, every frontier at `pos`.
pub fn uniform(length: usize, pos: f64) -> Outline {
    vec![pos; length]
}

/// Smallest frontier value, or `0.0` when the outline is empty or holds no
/// finite values.
pub fn lowest(outline: &[f64]) -> f64 {
    let value = outline.iter().copied().fold(f64::INFINITY, f64::min);
    if value.is_finite() { value } else { 0.0 }
}

/// Largest frontier value, or `0.0` when the outline is empty or holds no
/// finite values.
pub fn highest(outline: &[f64]) -> f64 {
    let value = outline.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if value.is_finite() { value } else { 0.0 }
}

/// Index of the first column whose frontier equals `value` exactly.
///
/// The engine only ever looks up values it just scanned out of the same
/// outline, so a miss cannot occur under sequential use; column 0 is the
/// defensive fallback.
pub fn position_of(outline: &[f64], value: f64) -> usize {
    outline
        .iter()
        .position(|&entry| entry == value)
        .unwrap_or(0)
}
