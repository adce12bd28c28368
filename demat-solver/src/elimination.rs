//! Single-column Gaussian elimination.
//!
//! One call clears at most one row: the first row below the pivot with a
//! nonzero entry in the working column. Full row reduction is composed from
//! repeated calls with increasing column indices.

use demat_core::{DenseMatrix, Element, MatrixError};

/// Selects the working column for an elimination step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pivot {
    /// Eliminate below the given column index.
    Column(usize),
    /// Scan columns left to right and adopt the first one with a nonzero
    /// entry below its diagonal.
    Search,
}

/// Out-of-place elimination step: copies `matrix`, performs one elimination
/// on the copy and returns it. See [`eliminate_column_in_place`] for the
/// operation itself.
pub fn eliminate_column<T: Element>(
    matrix: &DenseMatrix<T>,
    pivot: Pivot,
    dual: Option<&mut DenseMatrix<T>>,
) -> Result<DenseMatrix<T>, MatrixError> {
    let mut out = matrix.clone();
    eliminate_column_in_place(&mut out, pivot, dual)?;
    Ok(out)
}

/// Performs one elimination step on `matrix` directly.
///
/// For the first row `i` below the working column's diagonal with
/// `read(column, i) != 0`, adds `multiplier * row[column]` to `row[i]`,
/// where `multiplier = -(read(column, i) / read(column, column))` computed
/// in `f32` and narrowed back to the element type on every write. When a
/// `dual` matrix is supplied the identical row operation is applied to it
/// with the same multiplier, which lets callers track the elimination
/// against an augmented system or an identity matrix.
///
/// # Errors
///
/// * `InvalidDimensions` if `Pivot::Column(c)` names a column at or past the
///   matrix width.
/// * `SingularPivot` if the working column's diagonal is zero while a
///   nonzero entry exists below it.
///
/// A `Pivot::Search` that finds no candidate column leaves the matrix
/// unchanged and returns `Ok`.
pub fn eliminate_column_in_place<T: Element>(
    matrix: &mut DenseMatrix<T>,
    pivot: Pivot,
    mut dual: Option<&mut DenseMatrix<T>>,
) -> Result<(), MatrixError> {
    let column = match pivot {
        Pivot::Column(column) => {
            if column >= matrix.width() {
                return Err(MatrixError::InvalidDimensions(format!(
                    "Elimination column ({}) is out of range for width {}",
                    column,
                    matrix.width()
                )));
            }
            Some(column)
        }
        Pivot::Search => find_pivot_column(matrix),
    };
    let Some(column) = column else {
        log::debug!("no column with sub-diagonal entries; matrix left unchanged");
        return Ok(());
    };

    for row in column + 1..matrix.height() {
        if !matrix.read(column, row).is_zero() {
            let diagonal = matrix.read(column, column);
            if diagonal.is_zero() {
                return Err(MatrixError::SingularPivot { column });
            }
            let multiplier = -(matrix.read(column, row).to_float() / diagonal.to_float());
            combine_rows(matrix, column, row, multiplier);
            if let Some(dual) = dual.as_deref_mut() {
                combine_rows(dual, column, row, multiplier);
            }
            break;
        }
    }
    Ok(())
}

/// First column whose sub-diagonal holds a nonzero entry, scanning columns
/// ascending. The last column is never adopted.
fn find_pivot_column<T: Element>(matrix: &DenseMatrix<T>) -> Option<usize> {
    for column in 0..matrix.width().saturating_sub(1) {
        for row in column + 1..matrix.height() {
            if !matrix.read(column, row).is_zero() {
                return Some(column);
            }
        }
    }
    None
}

/// `row[target] += multiplier * row[source]` across every column, promoted
/// through `f32` and narrowed back to the element type on write.
fn combine_rows<T: Element>(
    matrix: &mut DenseMatrix<T>,
    source: usize,
    target: usize,
    multiplier: f32,
) {
    for t in 0..matrix.width() {
        let combined =
            matrix.read(t, target).to_float() + multiplier * matrix.read(t, source).to_float();
        matrix.write(t, target, T::from_float(combined));
    }
}
