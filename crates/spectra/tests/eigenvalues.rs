//! End-to-end eigenvalue pipeline: matrix to characteristic polynomial
//! to real roots.

use spectra::prelude::*;

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "roots: {actual:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-6, "expected {e}, found {a}");
    }
}

#[test]
fn eigenvalues_of_two_by_two() {
    let a = DenseMatrix::from_rows(vec![vec![4.0, -1.0], vec![2.0, 1.0]]).unwrap();
    let p = char_poly(&a).unwrap();
    assert_eq!(p, SparsePoly::new([(6.0, 0), (-5.0, 1), (1.0, 2)]));

    let eigenvalues = real_roots(&p).unwrap();
    assert_close(&eigenvalues, &[2.0, 3.0]);
}

#[test]
fn eigenvalues_of_block_diagonal() {
    // [[2, 1, 0], [1, 2, 0], [0, 0, 5]]: the 2x2 block has eigenvalues
    // 1 and 3, and the trailing entry contributes 5
    let a = DenseMatrix::from_rows(vec![
        vec![2.0, 1.0, 0.0],
        vec![1.0, 2.0, 0.0],
        vec![0.0, 0.0, 5.0],
    ])
    .unwrap();
    let p = char_poly(&a).unwrap();
    assert_eq!(
        p,
        SparsePoly::new([(15.0, 0), (-23.0, 1), (9.0, 2), (-1.0, 3)])
    );

    let eigenvalues = real_roots(&p).unwrap();
    assert_close(&eigenvalues, &[1.0, 3.0, 5.0]);
}

#[test]
fn eigenvalues_with_each_method() {
    let a = DenseMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
    let p = char_poly(&a).unwrap();
    for method in [RefineMethod::Newton, RefineMethod::Combined] {
        let eigenvalues = real_roots_with(&p, method).unwrap();
        assert_close(&eigenvalues, &[-1.0, 1.0]);
    }
}

#[test]
fn eigenvalue_residuals_are_small() {
    let a = DenseMatrix::from_rows(vec![
        vec![1.0, 2.0, 0.0],
        vec![2.0, 1.0, 3.0],
        vec![0.0, 3.0, 1.0],
    ])
    .unwrap();
    let p = char_poly(&a).unwrap();
    let eigenvalues = real_roots(&p).unwrap();
    assert!(!eigenvalues.is_empty());
    for lambda in &eigenvalues {
        assert!(p.eval(*lambda).abs() < 1e-6, "residual at {lambda}");
    }
}

#[test]
fn rotation_matrix_has_no_real_eigenvalues() {
    // a quarter-turn rotation: characteristic polynomial x^2 + 1
    let a = DenseMatrix::from_rows(vec![vec![0.0, -1.0], vec![1.0, 0.0]]).unwrap();
    let p = char_poly(&a).unwrap();
    assert_eq!(p, SparsePoly::new([(1.0, 0), (1.0, 2)]));
    assert!(real_roots(&p).unwrap().is_empty());
}
