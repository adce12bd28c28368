//! Elementwise and structural operators over [`DenseMatrix`].
//!
//! All kernels go through the lenient accessor layer rather than the raw
//! buffer, so stray coordinates read as zero instead of faulting.

use crate::dense_matrix::DenseMatrix;
use crate::element::Element;
use crate::error::MatrixError;

impl<T: Element> DenseMatrix<T> {
    /// Pairwise sum of two equally shaped matrices.
    ///
    /// Allocates a fresh matrix; neither input is mutated.
    pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.width() != other.width() || self.height() != other.height() {
            return Err(MatrixError::ShapeMismatch(format!(
                "add requires equal shapes, got {}x{} and {}x{}",
                self.height(),
                self.width(),
                other.height(),
                other.width()
            )));
        }
        let data = self
            .data()
            .iter()
            .zip(other.data())
            .map(|(&a, &b)| a + b)
            .collect();
        Self::from_data(self.rows(), self.cols(), data)
    }

    /// Matrix product in the engine's column-dot-column convention.
    ///
    /// Requires `self.width() == other.height()`; the result has shape
    /// `other.width() x self.height()`, and the element at `(i, j)` is
    /// `sum over l of self.read(i, l) * other.read(j, l)` with
    /// `l in 0..self.width()`. Reads go through the lenient accessors, so
    /// coordinates past a matrix edge contribute zero to the accumulation.
    pub fn multiply(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.width() != other.height() {
            return Err(MatrixError::ShapeMismatch(format!(
                "multiply requires width ({}) to match the right-hand height ({})",
                self.width(),
                other.height()
            )));
        }
        let mut out = Self::zeros(self.height(), other.width());
        for i in 0..other.width() {
            for j in 0..self.height() {
                let mut acc = T::zero();
                for l in 0..self.width() {
                    acc = acc + self.read(i, l) * other.read(j, l);
                }
                out.write(i, j, acc);
            }
        }
        Ok(out)
    }

    /// Extracts a `width x height` block starting at `(x, y)`.
    ///
    /// Destination `(j, i)` is filled from source
    /// `((j + x) % width(), (i + y) % width())`: both coordinates wrap
    /// modulo the source width. Row coordinates past the source height read
    /// as zero through the lenient accessor.
    pub fn copy_part(&self, x: usize, y: usize, width: usize, height: usize) -> Self {
        let mut out = Self::zeros(height, width);
        if self.width() == 0 {
            return out;
        }
        for i in 0..height {
            for j in 0..width {
                let value = self.read((j + x) % self.width(), (i + y) % self.width());
                out.write(j, i, value);
            }
        }
        out
    }
}
