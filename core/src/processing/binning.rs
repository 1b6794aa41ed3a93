use ndarray::Array1;

use crate::math::stats::StatsHelper;
use crate::prelude::{SurveyError, SurveyResult};

/// Upper bound on the number of bins a single call may allocate.
pub const MAX_BINS: usize = 100_000;

/// Average `(glon, vterm)` pairs into longitude bins of width `dl`.
///
/// Bins start at `floor(min(glon))` and cover `[lo + i*dl, lo + (i+1)*dl)`
/// up to the bin holding `max(glon)`. Empty bins yield `NaN` for both outputs.
pub fn bin_longitudes(
    glon: &Array1<f64>,
    vterm: &Array1<f64>,
    dl: f64,
) -> SurveyResult<(Array1<f64>, Array1<f64>)> {
    if !(dl.is_finite() && dl > 0.0) {
        return Err(SurveyError::InvalidInput(format!(
            "bin width must be positive, got {}",
            dl
        )));
    }
    if glon.len() != vterm.len() {
        return Err(SurveyError::InvalidInput(format!(
            "{} longitudes but {} velocities",
            glon.len(),
            vterm.len()
        )));
    }

    let glon_slice = glon.to_vec();
    let (min, max) = StatsHelper::finite_range(&glon_slice).ok_or_else(|| {
        SurveyError::DataUnavailable("no longitudes left to bin".to_string())
    })?;

    let lo = min.floor();
    let span = ((max - lo) / dl).floor();
    if !span.is_finite() || span >= MAX_BINS as f64 {
        return Err(SurveyError::InvalidInput(format!(
            "bin width {} over [{}, {}] exceeds {} bins",
            dl, lo, max, MAX_BINS
        )));
    }
    let nout = span as usize + 1;

    let mut glon_members: Vec<Vec<f64>> = vec![Vec::new(); nout];
    let mut vterm_members: Vec<Vec<f64>> = vec![Vec::new(); nout];
    for (&l, &v) in glon.iter().zip(vterm.iter()) {
        if !l.is_finite() {
            continue;
        }
        let idx = (((l - lo) / dl).floor() as usize).min(nout - 1);
        glon_members[idx].push(l);
        vterm_members[idx].push(v);
    }

    let glon_out = glon_members.iter().map(|m| StatsHelper::mean(m)).collect();
    let vterm_out = vterm_members.iter().map(|m| StatsHelper::mean(m)).collect();
    Ok((glon_out, vterm_out))
}

/// Remove bins whose mean longitude is `NaN`.
pub fn drop_nan_bins(glon: &Array1<f64>, vterm: &Array1<f64>) -> (Array1<f64>, Array1<f64>) {
    let (kept_glon, kept_vterm): (Vec<f64>, Vec<f64>) = glon
        .iter()
        .zip(vterm.iter())
        .filter(|(l, _)| !l.is_nan())
        .map(|(&l, &v)| (l, v))
        .unzip();
    (Array1::from(kept_glon), Array1::from(kept_vterm))
}
