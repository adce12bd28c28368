use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("Invalid matrix dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Matrix shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Singular pivot in column {column}")]
    SingularPivot { column: usize },

    #[error("Matrix must be square (dims: {rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    #[error("Cofactor recursion depth limit reached at depth {depth} (remaining size {cols}:{rows})")]
    DepthLimit {
        depth: usize,
        rows: usize,
        cols: usize,
    },
    // Add more specific errors as needed
}
