//! Closed-form least-squares regression via the normal equation.
//!
//! A dataset is a slice of equally-long feature rows paired with one
//! target per row. [`fit`] assembles the design matrix `X` and target
//! column `Y`, then solves
//!
//! ```text
//! theta = (XᵗX)⁻¹ Xᵗ Y
//! ```
//!
//! which minimizes the summed squared residuals in closed form — no
//! iteration, no convergence criterion, no learning rate. [`predict`]
//! applies the fitted weight column to a new feature row.
//!
//! No intercept column is added implicitly: callers that want a bias term
//! include a constant feature themselves, alongside whatever engineered
//! features (squared terms, indicator flags) the problem calls for.
//!
//! ```
//! use normalis::regress;
//!
//! // y = 3a + 2b, recovered exactly from two independent rows
//! let rows: [&[f64]; 2] = [&[1.0, 0.0], &[0.0, 1.0]];
//! let theta = regress::fit(&rows, &[3.0, 2.0]).unwrap();
//! assert!((theta[(0, 0)] - 3.0).abs() < 1e-12);
//! assert!((theta[(1, 0)] - 2.0).abs() < 1e-12);
//!
//! let y = regress::predict(&[2.0, 5.0], &theta).unwrap();
//! assert!((y - 16.0).abs() < 1e-9);
//! ```

use alloc::vec::Vec;

use crate::linalg::LinalgError;
use crate::matrix::Matrix;
use crate::traits::FloatScalar;

/// Build the `N x F` design matrix from dataset rows.
///
/// Rows are taken verbatim; no intercept column is inserted. Returns
/// `DimensionMismatch` for an empty dataset or ragged rows.
pub fn design_matrix<T: FloatScalar>(rows: &[&[T]]) -> Result<Matrix<T>, LinalgError> {
    Matrix::from_row_slices(rows)
}

/// Fit a weight column to the dataset by the normal equation.
///
/// `rows` is the dataset (N rows of F features each) and `targets` the N
/// observed outcomes. Returns the unique `F x 1` least-squares solution
/// `theta = (XᵗX)⁻¹ Xᵗ Y`, exact up to floating-point rounding.
///
/// Fitting twice on identical inputs yields identical theta; there is no
/// internal randomness and no state carried between calls.
///
/// # Errors
///
/// - `DimensionMismatch` when `rows.len() != targets.len()`, the dataset
///   is empty, or rows are ragged.
/// - `Singular` when `XᵗX` is not invertible — collinear features, or
///   fewer samples than features. No pseudo-inverse fallback is applied;
///   the error is the result.
pub fn fit<T: FloatScalar>(rows: &[&[T]], targets: &[T]) -> Result<Matrix<T>, LinalgError> {
    let x = design_matrix(rows)?;
    if targets.len() != x.nrows() {
        return Err(LinalgError::DimensionMismatch {
            left: (x.nrows(), x.ncols()),
            right: (targets.len(), 1),
        });
    }
    let y = Matrix::column_vector(targets);

    let xt = x.transpose();
    let xtx = xt.matmul(&x)?;
    let xty = xt.matmul(&y)?;
    xtx.inverse()?.matmul(&xty)
}

/// Predict the outcome for one feature row under a fitted weight column.
///
/// Computes the `1 x F` by `F x 1` product and returns the single scalar.
/// Returns `DimensionMismatch` when `features.len()` differs from
/// `theta.nrows()` or `theta` is not a column.
pub fn predict<T: FloatScalar>(features: &[T], theta: &Matrix<T>) -> Result<T, LinalgError> {
    if theta.ncols() != 1 || features.len() != theta.nrows() {
        return Err(LinalgError::DimensionMismatch {
            left: (1, features.len()),
            right: (theta.nrows(), theta.ncols()),
        });
    }
    let row = Matrix::row_vector(features);
    let product = row.matmul(theta)?;
    Ok(product[(0, 0)])
}

/// Signed prediction errors, one per dataset row: `predict(row) - target`.
///
/// Shares [`fit`]'s shape requirements on `rows` and `targets`.
pub fn residuals<T: FloatScalar>(
    rows: &[&[T]],
    targets: &[T],
    theta: &Matrix<T>,
) -> Result<Vec<T>, LinalgError> {
    if rows.len() != targets.len() {
        return Err(LinalgError::DimensionMismatch {
            left: (rows.len(), theta.nrows()),
            right: (targets.len(), 1),
        });
    }
    let mut out = Vec::with_capacity(rows.len());
    for (row, &target) in rows.iter().zip(targets.iter()) {
        out.push(predict(row, theta)? - target);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) {
        assert!(
            (a - b).abs() < tol,
            "expected {} ≈ {} (diff = {}, tol = {})",
            a,
            b,
            (a - b).abs(),
            tol
        );
    }

    #[test]
    fn theta_shape() {
        let rows: [&[f64]; 4] = [
            &[1.0, 2.0, 0.5],
            &[2.0, 1.0, 1.5],
            &[3.0, 5.0, 2.5],
            &[4.0, 3.0, 0.1],
        ];
        let theta = fit(&rows, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(theta.nrows(), 3);
        assert_eq!(theta.ncols(), 1);
    }

    #[test]
    fn exact_recovery_square_system() {
        // Y generated as X * theta_true with N == F and full column rank:
        // fit must recover theta_true to floating-point tolerance.
        let rows: [&[f64]; 3] = [&[1.0, 2.0, 0.0], &[0.0, 1.0, 4.0], &[5.0, 6.0, 0.0]];
        let theta_true = [2.0, -1.0, 0.5];
        let targets: Vec<f64> = rows
            .iter()
            .map(|r| r.iter().zip(theta_true.iter()).map(|(a, b)| a * b).sum())
            .collect();

        let theta = fit(&rows, &targets).unwrap();
        for (i, &expected) in theta_true.iter().enumerate() {
            approx_eq(theta[(i, 0)], expected, 1e-9);
        }

        // Predictions on the training rows reproduce the targets
        for (row, &target) in rows.iter().zip(targets.iter()) {
            approx_eq(predict(row, &theta).unwrap(), target, 1e-9);
        }
    }

    #[test]
    fn overdetermined_exact_fit() {
        // More samples than features, targets still exactly linear
        let rows: [&[f64]; 5] = [
            &[1.0, 1.0],
            &[1.0, 2.0],
            &[1.0, 3.0],
            &[1.0, 4.0],
            &[1.0, 5.0],
        ];
        // y = 10 + 3x, intercept supplied as a constant feature column
        let targets = [13.0, 16.0, 19.0, 22.0, 25.0];
        let theta = fit(&rows, &targets).unwrap();
        approx_eq(theta[(0, 0)], 10.0, 1e-9);
        approx_eq(theta[(1, 0)], 3.0, 1e-9);
    }

    #[test]
    fn fit_is_deterministic() {
        let rows: [&[f64]; 3] = [&[1.0, 2.0], &[3.0, 4.0], &[5.0, 7.0]];
        let targets = [1.0, 2.0, 4.0];
        let a = fit(&rows, &targets).unwrap();
        let b = fit(&rows, &targets).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn target_count_mismatch() {
        let rows: [&[f64]; 2] = [&[1.0, 2.0], &[3.0, 4.0]];
        let err = fit(&rows, &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            LinalgError::DimensionMismatch {
                left: (2, 2),
                right: (3, 1),
            }
        );
    }

    #[test]
    fn duplicate_rows_singular() {
        // Two identical rows among N == F samples: X'X is rank-deficient
        let rows: [&[f64]; 3] = [&[1.0, 2.0, 4.0], &[1.0, 2.0, 4.0], &[2.0, 8.0, 16.0]];
        let err = fit(&rows, &[1.0, 1.0, 2.0]).unwrap_err();
        assert_eq!(err, LinalgError::Singular);
    }

    #[test]
    fn fewer_samples_than_features_singular() {
        let rows: [&[f64]; 2] = [&[1.0, 2.0, 4.0], &[2.0, 4.0, 8.0]];
        let err = fit(&rows, &[1.0, 2.0]).unwrap_err();
        assert_eq!(err, LinalgError::Singular);
    }

    #[test]
    fn empty_dataset_rejected() {
        let rows: [&[f64]; 0] = [];
        assert!(fit(&rows, &[]).is_err());
    }

    #[test]
    fn ragged_rows_rejected() {
        let rows: [&[f64]; 2] = [&[1.0, 2.0], &[3.0]];
        let err = fit(&rows, &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, LinalgError::DimensionMismatch { .. }));
    }

    #[test]
    fn predict_length_mismatch() {
        let theta = Matrix::column_vector(&[1.0_f64, 2.0, 3.0]);
        let err = predict(&[1.0, 2.0], &theta).unwrap_err();
        assert_eq!(
            err,
            LinalgError::DimensionMismatch {
                left: (1, 2),
                right: (3, 1),
            }
        );
        assert!(predict(&[1.0, 2.0, 3.0, 4.0], &theta).is_err());
    }

    #[test]
    fn predict_rejects_non_column_theta() {
        let theta = Matrix::from_rows(2, 2, &[1.0_f64, 0.0, 0.0, 1.0]);
        assert!(predict(&[1.0, 2.0], &theta).is_err());
    }

    #[test]
    fn predict_applies_weights() {
        let theta = Matrix::column_vector(&[2.0_f64, -1.0, 0.5]);
        let y = predict(&[1.0, 2.0, 4.0], &theta).unwrap();
        approx_eq(y, 2.0, 1e-12);
    }

    #[test]
    fn residuals_values() {
        let theta = Matrix::column_vector(&[1.0_f64, 1.0]);
        let rows: [&[f64]; 2] = [&[1.0, 2.0], &[3.0, 4.0]];
        let r = residuals(&rows, &[2.0, 8.0], &theta).unwrap();
        approx_eq(r[0], 1.0, 1e-12); // 3 - 2
        approx_eq(r[1], -1.0, 1e-12); // 7 - 8
    }

    #[test]
    fn fit_leaves_inputs_usable() {
        // The same rows can back repeated fits: nothing is consumed or mutated
        let rows: [&[f64]; 2] = [&[1.0, 0.0], &[0.0, 1.0]];
        let targets = [3.0, 2.0];
        let first = fit(&rows, &targets).unwrap();
        let second = fit(&rows, &targets).unwrap();
        assert_eq!(first, second);
        assert_eq!(rows[0], &[1.0, 0.0]);
    }
}
