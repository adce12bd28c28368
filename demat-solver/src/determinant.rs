//! Recursive cofactor determinant.

use demat_core::{DenseMatrix, Element, MatrixError};

/// Recursion ceiling for the cofactor expansion. One level is consumed per
/// unit of matrix order, so orders up to 102 stay under the guard.
const MAX_COFACTOR_DEPTH: usize = 100;

/// Determinant of a square matrix, starting the recursion guard at depth 0.
pub fn determinant<T: Element>(matrix: &DenseMatrix<T>) -> Result<T, MatrixError> {
    determinant_at_depth(matrix, 0)
}

/// Determinant via cofactor expansion along row 0.
///
/// Orders 0 and 1 are the empty and singleton products (`one()` and the sole
/// element); order 2 is the closed form `a*d - b*c`. Larger orders expand
/// along row 0: the minor for column `i` is `copy_part(i + 1, 1, w - 1,
/// h - 1)`, whose modulo wrap takes the columns after `i` followed by the
/// columns before it. Minor matrices are dropped as each term completes, on
/// success and error paths alike.
///
/// # Errors
///
/// * `NotSquare` for rectangular input.
/// * `DepthLimit` once `depth` passes the recursion ceiling.
pub fn determinant_at_depth<T: Element>(
    matrix: &DenseMatrix<T>,
    depth: usize,
) -> Result<T, MatrixError> {
    let (rows, cols) = matrix.dims();
    if rows != cols {
        return Err(MatrixError::NotSquare { rows, cols });
    }
    if depth > MAX_COFACTOR_DEPTH {
        log::warn!(
            "cofactor recursion depth limit reached at depth {}, remaining size {}:{}",
            depth,
            cols,
            rows
        );
        return Err(MatrixError::DepthLimit { depth, rows, cols });
    }
    match cols {
        0 => Ok(T::one()),
        1 => Ok(matrix.read(0, 0)),
        2 => Ok(matrix.read(0, 0) * matrix.read(1, 1) - matrix.read(0, 1) * matrix.read(1, 0)),
        width => {
            let mut out = T::zero();
            for i in 0..width {
                let coefficient = matrix.read(i, 0);
                if coefficient.is_zero() {
                    continue;
                }
                let minor = matrix.copy_part(i + 1, 1, width - 1, rows - 1);
                out = out + determinant_at_depth(&minor, depth + 1)? * coefficient;
            }
            Ok(out)
        }
    }
}
