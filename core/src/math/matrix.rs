use nalgebra::DMatrix;
use ndarray::{Array2, ArrayView2};

use crate::prelude::{SurveyError, SurveyResult};

pub struct MatrixHelper;

impl MatrixHelper {
    /// Multiply two 2D arrays.
    pub fn multiply(lhs: ArrayView2<f64>, rhs: ArrayView2<f64>) -> Array2<f64> {
        lhs.dot(&rhs)
    }

    /// Invert a square matrix through an LU decomposition.
    ///
    /// A zero pivot fails with [`SurveyError::NumericallySingular`]. Non-finite
    /// entries are not rejected; they propagate into the result.
    pub fn invert(matrix: ArrayView2<f64>) -> SurveyResult<Array2<f64>> {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(SurveyError::InvalidInput(format!(
                "cannot invert a {}x{} matrix",
                rows, cols
            )));
        }
        if rows == 0 {
            return Ok(Array2::zeros((0, 0)));
        }

        let entries: Vec<f64> = matrix.iter().copied().collect();
        let dense = DMatrix::<f64>::from_row_slice(rows, cols, &entries);
        let inverse = dense.lu().try_inverse().ok_or_else(|| {
            SurveyError::NumericallySingular(format!("{}x{} matrix has no inverse", rows, cols))
        })?;

        Ok(Array2::from_shape_fn((rows, cols), |(i, j)| inverse[(i, j)]))
    }
}
