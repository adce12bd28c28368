use demat_solver::{determinant, eliminate_column_in_place, DenseMatrix, Pivot};

/// Reduces a small system to row echelon form while tracking the operations
/// against an identity dual, then reports the determinant.
fn main() {
    // Initialize logging based on RUST_LOG environment variable
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut a = DenseMatrix::from_data(
        3,
        3,
        vec![2.0f32, 1.0, -1.0, -3.0, -1.0, 2.0, -2.0, 1.0, 2.0],
    )
    .expect("system matrix is 3x3");
    let mut dual: DenseMatrix<f32> = DenseMatrix::identity(3);

    log::info!("Input system:");
    println!("{}", a);

    let det = determinant(&a).expect("3x3 determinant");
    log::info!("Determinant before reduction: {}", det);

    // One call clears one row; two passes on column 0, one on column 1.
    for column in [0usize, 0, 1] {
        eliminate_column_in_place(&mut a, Pivot::Column(column), Some(&mut dual))
            .expect("elimination step");
    }

    log::info!("Row echelon form:");
    println!("{}", a);
    log::info!("Accumulated row operations (dual):");
    println!("{}", dual);
}
