use demat_solver::{
    determinant, eliminate_column, eliminate_column_in_place, DenseMatrix, Pivot,
};

// Helper for float comparison in tests
fn assert_approx_eq_vec(a: &[f32], b: &[f32], tolerance: f32) {
    assert_eq!(a.len(), b.len(), "Vector lengths differ");
    for i in 0..a.len() {
        let diff = (a[i] - b[i]).abs();
        assert!(
            diff <= tolerance,
            "Verification failed at index {}: expected {}, got {}, diff {}",
            i,
            b[i],
            a[i],
            diff
        );
    }
}

#[test]
fn test_full_row_reduction_with_dual_tracking() {
    // Reduce A to row echelon form while mirroring every row operation onto
    // an identity dual. One elimination call clears one row, so column 0
    // takes two calls before column 1 finishes the reduction.
    let mut a = DenseMatrix::from_data(
        3,
        3,
        vec![2.0f32, 1.0, -1.0, -3.0, -1.0, 2.0, -2.0, 1.0, 2.0],
    )
    .unwrap();
    let mut dual: DenseMatrix<f32> = DenseMatrix::identity(3);

    eliminate_column_in_place(&mut a, Pivot::Column(0), Some(&mut dual)).unwrap();
    eliminate_column_in_place(&mut a, Pivot::Column(0), Some(&mut dual)).unwrap();
    eliminate_column_in_place(&mut a, Pivot::Column(1), Some(&mut dual)).unwrap();

    let expected = [
        2.0, 1.0, -1.0, //
        0.0, 0.5, 0.5, //
        0.0, 0.0, -1.0,
    ];
    assert_approx_eq_vec(a.data(), &expected, 1e-6);

    // The dual accumulated the same three row operations applied to I.
    let expected_dual = [
        1.0, 0.0, 0.0, //
        1.5, 1.0, 0.0, //
        -5.0, -4.0, 1.0,
    ];
    assert_approx_eq_vec(dual.data(), &expected_dual, 1e-6);
}

#[test]
fn test_search_driven_reduction_matches_explicit_columns() {
    let a = DenseMatrix::from_data(
        3,
        3,
        vec![1.0f32, 2.0, 0.0, 2.0, 5.0, 1.0, 0.0, 3.0, 4.0],
    )
    .unwrap();

    let searched = eliminate_column(&a, Pivot::Search, None).unwrap();
    let explicit = eliminate_column(&a, Pivot::Column(0), None).unwrap();
    assert_approx_eq_vec(searched.data(), explicit.data(), 1e-6);
}

#[test]
fn test_identity_determinant_stays_under_the_depth_guard() {
    let identity: DenseMatrix<f32> = DenseMatrix::identity(100);
    assert_eq!(determinant(&identity).unwrap(), 1.0);
}

#[test]
fn test_elimination_does_not_change_the_determinant() {
    // A row combination is a unit-determinant operation.
    let a = DenseMatrix::from_data(
        3,
        3,
        vec![2.0f32, 1.0, 0.0, 4.0, 5.0, 6.0, 0.0, 1.0, 3.0],
    )
    .unwrap();
    let before = determinant(&a).unwrap();
    let reduced = eliminate_column(&a, Pivot::Column(0), None).unwrap();
    let after = determinant(&reduced).unwrap();
    assert!((before - after).abs() <= 1e-4 * before.abs().max(1.0));
}
