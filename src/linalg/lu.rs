use alloc::vec;
use alloc::vec::Vec;

use crate::linalg::LinalgError;
use crate::matrix::Matrix;
use crate::traits::FloatScalar;

/// Perform LU decomposition with partial pivoting, in place.
///
/// On return, `a` contains both L and U packed together:
/// - Upper triangle (including diagonal): U
/// - Lower triangle (excluding diagonal): L (diagonal of L is implicitly 1)
///
/// `perm` is filled with the row permutation indices.
/// Returns `true` if the number of row swaps was even.
///
/// The pivot threshold is machine epsilon scaled by the largest element
/// magnitude of the input, so near-singularity is judged relative to the
/// matrix rather than in absolute terms. Non-finite input is rejected as
/// `Singular` up front: letting a NaN or infinity through the elimination
/// would otherwise surface as a garbage result instead of an error.
pub(crate) fn lu_in_place<T: FloatScalar>(
    a: &mut Matrix<T>,
    perm: &mut [usize],
) -> Result<bool, LinalgError> {
    let n = a.nrows();
    debug_assert_eq!(n, a.ncols());
    debug_assert_eq!(n, perm.len());

    let mut scale = T::zero();
    for &x in a.as_slice() {
        if !x.is_finite() {
            return Err(LinalgError::Singular);
        }
        let m = x.abs();
        if m > scale {
            scale = m;
        }
    }
    if scale == T::zero() {
        return Err(LinalgError::Singular);
    }
    let tol = T::epsilon() * scale;

    for (i, p) in perm.iter_mut().enumerate() {
        *p = i;
    }

    let mut even = true;

    for col in 0..n {
        // Partial pivoting: pick the largest-magnitude candidate in this column
        let mut max_row = col;
        let mut max_val = a[(col, col)].abs();
        for row in (col + 1)..n {
            let val = a[(row, col)].abs();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }

        if max_val < tol {
            return Err(LinalgError::Singular);
        }

        if max_row != col {
            perm.swap(col, max_row);
            for j in 0..n {
                let tmp = a[(col, j)];
                a[(col, j)] = a[(max_row, j)];
                a[(max_row, j)] = tmp;
            }
            even = !even;
        }

        // Doolittle elimination: store the multiplier in the L slot, then
        // subtract the scaled pivot row from each row below.
        let pivot = a[(col, col)];
        for row in (col + 1)..n {
            let factor = a[(row, col)] / pivot;
            a[(row, col)] = factor;
            for j in (col + 1)..n {
                a[(row, j)] = a[(row, j)] - factor * a[(col, j)];
            }
        }
    }

    Ok(even)
}

/// Solve Ax = b given the packed LU decomposition and permutation.
///
/// `lu` is the packed L/U matrix from `lu_in_place`.
/// `perm` is the row permutation from `lu_in_place`.
/// `b` (input) and `x` (output) are separate slices of length n.
pub(crate) fn lu_solve<T: FloatScalar>(lu: &Matrix<T>, perm: &[usize], b: &[T], x: &mut [T]) {
    let n = lu.nrows();

    // Apply permutation and forward substitution (solve Ly = Pb)
    for i in 0..n {
        let mut sum = b[perm[i]];
        for j in 0..i {
            sum = sum - lu[(i, j)] * x[j];
        }
        x[i] = sum;
    }

    // Back substitution (solve Ux = y)
    for i in (0..n).rev() {
        let mut sum = x[i];
        for j in (i + 1)..n {
            sum = sum - lu[(i, j)] * x[j];
        }
        x[i] = sum / lu[(i, i)];
    }
}

/// LU decomposition of a square matrix, with partial pivoting.
///
/// Stores the packed L/U factors and permutation vector.
/// Use `solve()`, `inverse()`, or `det()` to work with the decomposition.
///
/// # Example
///
/// ```
/// use normalis::{Lu, Matrix};
///
/// let a = Matrix::from_rows(2, 2, &[2.0_f64, 1.0, 5.0, 3.0]);
/// let lu = Lu::new(&a).unwrap();
///
/// let x = lu.solve(&[4.0, 11.0]).unwrap();
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
///
/// assert!((lu.det() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct Lu<T> {
    lu: Matrix<T>,
    perm: Vec<usize>,
    even: bool,
}

impl<T: FloatScalar> Lu<T> {
    /// Decompose a matrix.
    ///
    /// Returns `NotSquare` for rectangular input and `Singular` when a
    /// pivot falls below the scaled epsilon threshold.
    pub fn new(a: &Matrix<T>) -> Result<Self, LinalgError> {
        if !a.is_square() {
            return Err(LinalgError::NotSquare {
                nrows: a.nrows(),
                ncols: a.ncols(),
            });
        }
        let n = a.nrows();
        let mut lu = a.clone();
        let mut perm = vec![0usize; n];
        let even = lu_in_place(&mut lu, &mut perm)?;
        Ok(Self { lu, perm, even })
    }

    /// Solve Ax = b for x.
    ///
    /// Returns `DimensionMismatch` if `b.len()` differs from the matrix size.
    pub fn solve(&self, b: &[T]) -> Result<Vec<T>, LinalgError> {
        let n = self.lu.nrows();
        if b.len() != n {
            return Err(LinalgError::DimensionMismatch {
                left: (n, n),
                right: (b.len(), 1),
            });
        }
        let mut x = vec![T::zero(); n];
        lu_solve(&self.lu, &self.perm, b, &mut x);
        Ok(x)
    }

    /// Compute the matrix inverse by solving against identity columns.
    pub fn inverse(&self) -> Matrix<T> {
        let n = self.lu.nrows();
        let mut inv = Matrix::zeros(n, n, T::zero());
        let mut e = vec![T::zero(); n];
        let mut col_buf = vec![T::zero(); n];

        for col in 0..n {
            if col > 0 {
                e[col - 1] = T::zero();
            }
            e[col] = T::one();

            lu_solve(&self.lu, &self.perm, &e, &mut col_buf);

            for row in 0..n {
                inv[(row, col)] = col_buf[row];
            }
        }

        inv
    }

    /// Compute the determinant from the pivot product and swap parity.
    pub fn det(&self) -> T {
        let n = self.lu.nrows();
        let mut d = if self.even {
            T::one()
        } else {
            T::zero() - T::one()
        };
        for i in 0..n {
            d = d * self.lu[(i, i)];
        }
        d
    }
}

/// Convenience methods on square matrices.
impl<T: FloatScalar> Matrix<T> {
    /// LU decomposition with partial pivoting.
    pub fn lu(&self) -> Result<Lu<T>, LinalgError> {
        Lu::new(self)
    }

    /// Compute the matrix inverse.
    ///
    /// The result is exact up to floating-point rounding; a matrix that
    /// cannot be inverted that way is reported as `Singular`, never
    /// approximated.
    ///
    /// ```
    /// use normalis::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[4.0_f64, 7.0, 2.0, 6.0]);
    /// let a_inv = a.inverse().unwrap();
    /// let id = a.matmul(&a_inv).unwrap();
    /// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!(id[(0, 1)].abs() < 1e-12);
    /// ```
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        Ok(self.lu()?.inverse())
    }

    /// Solve `Ax = b` for `x` via LU decomposition.
    ///
    /// ```
    /// use normalis::Matrix;
    /// let a = Matrix::from_rows(3, 3, &[
    ///     2.0_f64, 1.0, -1.0,
    ///     -3.0, -1.0, 2.0,
    ///     -2.0, 1.0, 2.0,
    /// ]);
    /// let x = a.solve(&[8.0, -11.0, -3.0]).unwrap();
    /// assert!((x[0] - 2.0).abs() < 1e-12);
    /// assert!((x[1] - 3.0).abs() < 1e-12);
    /// assert!((x[2] - (-1.0)).abs() < 1e-12);
    /// ```
    pub fn solve(&self, b: &[T]) -> Result<Vec<T>, LinalgError> {
        self.lu()?.solve(b)
    }
}
