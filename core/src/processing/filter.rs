use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Open longitude interval `(lo, hi)` in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LongitudeWindow {
    pub lo: f64,
    pub hi: f64,
}

impl LongitudeWindow {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Strict on both ends; `NaN` never matches.
    pub fn contains(&self, glon: f64) -> bool {
        glon > self.lo && glon < self.hi
    }
}

/// Keep the `(glon, vterm)` pairs whose longitude falls inside `window`.
pub fn filter_longitude(
    glon: &Array1<f64>,
    vterm: &Array1<f64>,
    window: LongitudeWindow,
) -> (Array1<f64>, Array1<f64>) {
    let (kept_glon, kept_vterm): (Vec<f64>, Vec<f64>) = glon
        .iter()
        .zip(vterm.iter())
        .filter(|(l, _)| window.contains(**l))
        .map(|(&l, &v)| (l, v))
        .unzip();
    (Array1::from(kept_glon), Array1::from(kept_vterm))
}
