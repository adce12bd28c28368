//! `demat-solver`: row-reduction and determinant routines over dense matrices.
//!
//! This library provides the single-column elimination primitive (usable for
//! row reduction and augmented-system tracking via a dual matrix) and the
//! recursive cofactor determinant.

// Core modules
pub mod determinant;
pub mod elimination;

// Re-export from demat_core
pub use demat_core::{DenseMatrix, Element, Matrix, MatrixError};

pub use determinant::{determinant, determinant_at_depth};
pub use elimination::{eliminate_column, eliminate_column_in_place, Pivot};
