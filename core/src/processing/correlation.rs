use ndarray::{Array1, Array2};

use crate::math::matrix::MatrixHelper;
use crate::prelude::{SurveyError, SurveyResult};

/// Diagonal term added before inversion.
pub const DIAGONAL_REGULARIZATION: f64 = 1e-10;

/// `sin(l)` for longitudes given in degrees.
pub fn sine_longitude(glon: &Array1<f64>) -> Array1<f64> {
    glon.mapv(|l| l.to_radians().sin())
}

/// Exponential kernel `exp(-|s_i - s_j| / dsinl)` over sine-longitudes.
pub fn calc_corr(singlon: &Array1<f64>, dsinl: f64) -> SurveyResult<Array2<f64>> {
    if !(dsinl.is_finite() && dsinl > 0.0) {
        return Err(SurveyError::InvalidInput(format!(
            "correlation scale must be positive, got {}",
            dsinl
        )));
    }

    let n = singlon.len();
    let corr = Array2::from_shape_fn((n, n), |(i, j)| {
        (-(singlon[i] - singlon[j]).abs() / dsinl).exp()
    });
    let symmetric = (&corr + &corr.t()) * 0.5;
    Ok(symmetric + Array2::<f64>::eye(n) * DIAGONAL_REGULARIZATION)
}

/// Inverse correlation matrix for a set of longitudes in degrees.
pub fn inverse_corr(glon: &Array1<f64>, dsinl: f64) -> SurveyResult<Array2<f64>> {
    let corr = calc_corr(&sine_longitude(glon), dsinl)?;
    MatrixHelper::invert(corr.view())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn corr_is_symmetric_with_unit_diagonal() {
        let singlon = sine_longitude(&array![41.0, 42.5, 47.0, 60.2]);
        let corr = calc_corr(&singlon, 0.0625).unwrap();

        for i in 0..4 {
            assert_eq!(corr[[i, i]], 1.0 + DIAGONAL_REGULARIZATION);
            for j in 0..i {
                assert_eq!(corr[[i, j]], corr[[j, i]]);
            }
        }
        assert!(corr.iter().all(|&v| v > 0.0 && v <= 1.0 + DIAGONAL_REGULARIZATION));
    }

    #[test]
    fn corr_matches_kernel_formula() {
        let singlon = array![0.0, 0.125];
        let corr = calc_corr(&singlon, 0.0625).unwrap();
        assert!((corr[[0, 1]] - (-2.0_f64).exp()).abs() < 1e-15);
    }

    #[test]
    fn inverse_times_corr_is_identity() {
        let glon = array![40.5, 41.5, 42.5, 43.5, 45.5, 50.5];
        let corr = calc_corr(&sine_longitude(&glon), 0.0625).unwrap();
        let inverse = inverse_corr(&glon, 0.0625).unwrap();
        let product = MatrixHelper::multiply(corr.view(), inverse.view());

        for i in 0..glon.len() {
            for j in 0..glon.len() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((product[[i, j]] - expected).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn empty_longitudes_give_empty_matrix() {
        let inverse = inverse_corr(&Array1::zeros(0), 0.0625).unwrap();
        assert_eq!(inverse.dim(), (0, 0));
    }

    #[test]
    fn non_positive_scale_is_rejected() {
        assert!(matches!(
            calc_corr(&array![0.5], 0.0),
            Err(SurveyError::InvalidInput(_))
        ));
    }
}
