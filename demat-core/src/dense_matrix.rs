use crate::element::Element;
use crate::error::MatrixError;
use crate::traits::Matrix;
use std::fmt;

/// Represents a dense matrix stored in row-major order on the CPU.
///
/// The element at coordinate `(x, y)` (column `x`, row `y`) lives at linear
/// index `x + y * cols`. A matrix with zero rows or zero columns owns an
/// empty buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T: Element> {
    rows: usize,
    cols: usize,
    data: Vec<T>, // Data stored row-major: data[x + y * cols]
}

impl<T: Element> DenseMatrix<T> {
    /// Creates a new DenseMatrix from raw data and dimensions, assuming
    /// row-major order.
    pub fn from_data(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        if data.len() != rows * cols {
            return Err(MatrixError::InvalidDimensions(format!(
                "Data length ({}) does not match dimensions ({}x{})",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a new DenseMatrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Creates the identity matrix of the given order.
    pub fn identity(order: usize) -> Self {
        let mut out = Self::zeros(order, order);
        for i in 0..order {
            out.write(i, i, T::one());
        }
        out
    }

    /// Returns the dimensions of the matrix (rows, cols).
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Width of the matrix: the number of columns.
    pub fn width(&self) -> usize {
        self.cols
    }

    /// Height of the matrix: the number of rows.
    pub fn height(&self) -> usize {
        self.rows
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns a slice view of the underlying data vector.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Returns a mutable slice view of the underlying data vector.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Reads the element at column `x`, row `y`.
    ///
    /// Lenient bounds policy: out-of-range coordinates read as the zero
    /// value, never a fault. Use [`DenseMatrix::get`] for the strict variant.
    pub fn read(&self, x: usize, y: usize) -> T {
        if x >= self.cols || y >= self.rows {
            return T::zero();
        }
        self.data[x + y * self.cols]
    }

    /// Writes `value` at column `x`, row `y` and returns the element that was
    /// there before the write.
    ///
    /// Lenient bounds policy: out-of-range writes are silent no-ops that
    /// return the zero value. Use [`DenseMatrix::get_mut`] for the strict
    /// variant.
    pub fn write(&mut self, x: usize, y: usize, value: T) -> T {
        if x >= self.cols || y >= self.rows {
            return T::zero();
        }
        let index = x + y * self.cols;
        let previous = self.data[index];
        self.data[index] = value;
        previous
    }

    /// Gets the element at the specified column and row (immutable).
    /// Returns None if indices are out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.cols && y < self.rows {
            self.data.get(x + y * self.cols)
        } else {
            None
        }
    }

    /// Gets the element at the specified column and row (mutable).
    /// Returns None if indices are out of bounds.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if x < self.cols && y < self.rows {
            self.data.get_mut(x + y * self.cols)
        } else {
            None
        }
    }

    /// Overwrites every element with zero, then drops the buffer contents and
    /// resets the dimensions to 0x0. The allocation itself is released when
    /// the value is dropped.
    pub fn scrub(&mut self) {
        for value in self.data.iter_mut() {
            *value = T::zero();
        }
        self.data.clear();
        self.rows = 0;
        self.cols = 0;
    }
}

// Implement the generic Matrix trait
impl<T: Element> Matrix for DenseMatrix<T> {
    type Value = T;

    fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    // rows(), cols(), is_square() are provided by default impls in the trait
}

/// Diagnostic rendering. Goes through the lenient `read` accessor only, never
/// through the raw buffer.
impl<T: Element + fmt::Display> fmt::Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix: <{}:{}>", self.width(), self.height())?;
        for y in 0..self.height() {
            for x in 0..self.width() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.read(x, y))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{DenseMatrix, MatrixError};

    #[test]
    fn test_dense_matrix_zeros() {
        let matrix: DenseMatrix<i32> = DenseMatrix::zeros(3, 4);
        assert_eq!(matrix.dims(), (3, 4));
        assert_eq!(matrix.width(), 4);
        assert_eq!(matrix.height(), 3);
        assert!(matrix.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_dense_matrix_empty_shapes_own_no_elements() {
        let matrix: DenseMatrix<f32> = DenseMatrix::zeros(0, 5);
        assert_eq!(matrix.data().len(), 0);
        assert_eq!(matrix.read(0, 0), 0.0);

        let matrix: DenseMatrix<f32> = DenseMatrix::zeros(5, 0);
        assert_eq!(matrix.data().len(), 0);
    }

    #[test]
    fn test_dense_matrix_from_data_valid() {
        let matrix = DenseMatrix::from_data(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(matrix.read(0, 0), 1);
        assert_eq!(matrix.read(1, 0), 2);
        assert_eq!(matrix.read(0, 1), 3);
        assert_eq!(matrix.read(1, 1), 4);
    }

    #[test]
    fn test_dense_matrix_from_data_invalid_length() {
        let matrix = DenseMatrix::from_data(2, 2, vec![1, 2, 3]);
        assert!(matrix.is_err());
        match matrix.err().unwrap() {
            MatrixError::InvalidDimensions(msg) => assert!(msg.contains("Data length")),
            _ => panic!("Expected InvalidDimensions error"),
        }
    }

    #[test]
    fn test_dense_matrix_identity() {
        let matrix: DenseMatrix<i32> = DenseMatrix::identity(3);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(matrix.read(x, y), if x == y { 1 } else { 0 });
            }
        }
    }

    #[test]
    fn test_write_returns_previous_element() {
        let mut matrix = DenseMatrix::from_data(2, 2, vec![1, 2, 3, 4]).unwrap();
        let previous = matrix.write(1, 1, 9);
        assert_eq!(previous, 4);
        assert_eq!(matrix.read(1, 1), 9);
    }

    #[test]
    fn test_out_of_range_read_is_zero() {
        let matrix = DenseMatrix::from_data(2, 2, vec![1.0f32, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(matrix.read(2, 0), 0.0);
        assert_eq!(matrix.read(0, 2), 0.0);
        assert_eq!(matrix.read(7, 7), 0.0);
    }

    #[test]
    fn test_out_of_range_write_is_a_silent_no_op() {
        let mut matrix = DenseMatrix::from_data(2, 2, vec![1, 2, 3, 4]).unwrap();
        let previous = matrix.write(2, 0, 99);
        assert_eq!(previous, 0);
        let previous = matrix.write(0, 2, 99);
        assert_eq!(previous, 0);
        assert_eq!(matrix.data(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_strict_accessors_return_none_out_of_range() {
        let mut matrix = DenseMatrix::from_data(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(matrix.get(2, 1), Some(&6));
        assert_eq!(matrix.get(3, 0), None);
        assert_eq!(matrix.get(0, 2), None);
        assert!(matrix.get_mut(3, 0).is_none());
        *matrix.get_mut(0, 0).unwrap() = 7;
        assert_eq!(matrix.read(0, 0), 7);
    }

    #[test]
    fn test_clone_uses_a_distinct_buffer() {
        let original = DenseMatrix::from_data(2, 2, vec![1, 2, 3, 4]).unwrap();
        let mut copy = original.clone();
        copy.write(0, 0, 42);
        assert_eq!(original.read(0, 0), 1);
        assert_eq!(copy.read(0, 0), 42);
    }

    #[test]
    fn test_scrub_clears_elements_and_dimensions() {
        let mut matrix = DenseMatrix::from_data(2, 2, vec![1, 2, 3, 4]).unwrap();
        matrix.scrub();
        assert_eq!(matrix.dims(), (0, 0));
        assert!(matrix.data().is_empty());
        // Reads against the scrubbed matrix stay neutral.
        assert_eq!(matrix.read(0, 0), 0);
    }

    #[test]
    fn test_display_renders_banner_and_grid() {
        let matrix = DenseMatrix::from_data(2, 2, vec![1, 2, 3, 4]).unwrap();
        let rendered = format!("{}", matrix);
        assert_eq!(rendered, "Matrix: <2:2>\n1 2\n3 4\n");
    }
}
