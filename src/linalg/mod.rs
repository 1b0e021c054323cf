mod lu;

pub use lu::Lu;

/// Errors from matrix arithmetic and factorization.
///
/// One taxonomy is shared by the whole crate: the regression layer
/// propagates these unchanged rather than wrapping them.
///
/// ```
/// use normalis::{LinalgError, Matrix};
///
/// let singular = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]);
/// assert_eq!(singular.inverse().unwrap_err(), LinalgError::Singular);
///
/// let rect = Matrix::from_rows(2, 3, &[0.0_f64; 6]);
/// assert_eq!(
///     rect.inverse().unwrap_err(),
///     LinalgError::NotSquare { nrows: 2, ncols: 3 },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinalgError {
    /// Operand shapes are incompatible for the requested operation.
    ///
    /// `left` and `right` are the `(rows, cols)` shapes of the two
    /// operands as seen by the failing call.
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Inversion was attempted on a rectangular matrix.
    NotSquare { nrows: usize, ncols: usize },
    /// Matrix is singular or numerically indistinguishable from singular.
    Singular,
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::DimensionMismatch { left, right } => write!(
                f,
                "dimension mismatch: {}x{} is incompatible with {}x{}",
                left.0, left.1, right.0, right.1
            ),
            LinalgError::NotSquare { nrows, ncols } => {
                write!(f, "matrix is not square: {}x{}", nrows, ncols)
            }
            LinalgError::Singular => write!(f, "matrix is singular"),
        }
    }
}
