//! # Dense Matrix Core Library
//!
//! Provides the dense matrix container, the bounds-checked accessor layer and
//! the elementwise arithmetic operators shared by the solver crates.

// Declare modules
pub mod dense_matrix;
pub mod element;
pub mod error;
pub mod traits;

mod ops; // arithmetic impl blocks on DenseMatrix

// Re-export public types
pub use dense_matrix::DenseMatrix;
pub use element::Element;
pub use error::MatrixError;
pub use traits::Matrix;
