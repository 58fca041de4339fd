//! Tests for Matrix storage, access and row/column permutation.

use linprim::backend::AsFaerMat;
use linprim::operations::{matvec, permuted_matrix, permuted_matrix_back};
use linprim::{LinalgError, Matrix, Permutation, Vector};

fn sample(height: usize, width: usize) -> Matrix<'static> {
    Matrix::from_fn(height, width, |i, j| (10 * i + j) as f64)
}

#[test]
fn test_new_matrix_is_zeroed() {
    let m = Matrix::zeros(3, 2);
    assert_eq!(m.shape(), (3, 2));
    assert!(m.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_row_major_layout() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(m[(0, 2)], 3.0);
    assert_eq!(m[(1, 0)], 4.0);
    assert_eq!(m.row(1).unwrap(), &[4.0, 5.0, 6.0]);
    assert!(m.row(2).is_err());
}

#[test]
fn test_from_vec_rejects_wrong_length() {
    let err = Matrix::from_vec(2, 2, vec![1.0; 3]).unwrap_err();
    assert!(matches!(err, LinalgError::DimensionMismatch { .. }));
}

#[test]
fn test_from_vec_rejects_overflowing_shape() {
    let err = Matrix::from_vec(1 << 63, 2, vec![]).unwrap_err();
    assert!(matches!(err, LinalgError::InvalidArgument { .. }));
    assert!(Matrix::try_zeros(usize::MAX, 3).is_err());
}

#[test]
fn test_wrapped_matrix_writes_through() {
    let mut raw = [0.0; 4];
    {
        let mut m = Matrix::from_slice_mut(2, 2, &mut raw).unwrap();
        assert!(m.is_borrowed());
        m[(1, 0)] = 5.0;
        *m.get_mut(0, 1).unwrap() = -1.0;
    }
    assert_eq!(raw, [0.0, -1.0, 5.0, 0.0]);
}

#[test]
fn test_wrapped_matrix_rejects_short_buffer() {
    let mut raw = [0.0; 5];
    assert!(Matrix::from_slice_mut(2, 3, &mut raw).is_err());
}

#[test]
fn test_clone_is_deep() {
    let mut raw = [1.0, 2.0];
    let copy = {
        let m = Matrix::from_slice_mut(1, 2, &mut raw).unwrap();
        m.to_owned_matrix()
    };
    raw[1] = 0.0;
    assert!(!copy.is_borrowed());
    assert_eq!(copy.as_slice(), &[1.0, 2.0]);
}

#[test]
fn test_assign() {
    let src = sample(2, 2);
    let mut dest = Matrix::zeros(2, 2);
    dest.assign(&src).unwrap();
    assert_eq!(dest, src);

    let mut wide = Matrix::zeros(1, 4);
    assert!(wide.assign(&src).is_err());
    assert!(wide.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_checked_access() {
    let m = sample(2, 3);
    assert_eq!(m.get(1, 2).unwrap(), 12.0);
    assert_eq!(
        m.get(2, 0),
        Err(LinalgError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(
        m.get(0, 3),
        Err(LinalgError::IndexOutOfRange { index: 3, len: 3 })
    );
}

#[test]
fn test_permute_rows_and_columns() {
    let a = sample(3, 2);
    let mut rows = Permutation::new(3).unwrap();
    rows.add_cycle(0, 2).unwrap();
    let mut cols = Permutation::new(2).unwrap();
    cols.add_cycle(0, 1).unwrap();

    let mut b = Matrix::zeros(3, 2);
    b.permute(&a, &rows, &cols).unwrap();
    for i in 0..3 {
        for j in 0..2 {
            assert_eq!(b[(i, j)], a[(rows[i], cols[j])]);
        }
    }

    let mut back = Matrix::zeros(3, 2);
    back.permute_back(&b, &rows, &cols).unwrap();
    assert_eq!(back, a);

    assert_eq!(permuted_matrix(&a, &rows, &cols).unwrap(), b);
    assert_eq!(permuted_matrix_back(&b, &rows, &cols).unwrap(), a);
}

#[test]
fn test_permute_checks_permutation_sizes() {
    let a = sample(2, 3);
    let rows = Permutation::new(2).unwrap();
    let cols = Permutation::new(2).unwrap();
    let mut b = Matrix::zeros(2, 3);

    let err = b.permute(&a, &rows, &cols).unwrap_err();
    assert_eq!(
        err,
        LinalgError::DimensionMismatch {
            op: "permute",
            expected: vec![2, 3, 2, 3],
            actual: vec![2, 3, 2, 2],
        }
    );
    assert!(b.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_permute_checks_shapes() {
    let a = sample(2, 3);
    let rows = Permutation::new(2).unwrap();
    let cols = Permutation::new(3).unwrap();
    let mut b = Matrix::zeros(3, 2);
    assert!(b.permute(&a, &rows, &cols).is_err());
    assert!(b.permute_back(&a, &rows, &cols).is_err());
}

#[test]
fn test_matvec_identity() {
    let eye = Matrix::from_fn(3, 3, |i, j| if i == j { 1.0 } else { 0.0 });
    let v = Vector::from_vec(vec![1.5, -2.0, 0.25]);
    assert_eq!(matvec(&eye, &v).unwrap(), v);
}

#[test]
fn test_faer_view_shape() {
    let m = sample(4, 2);
    let view = m.as_faer_mat();
    assert_eq!((view.nrows(), view.ncols()), (4, 2));
    assert_eq!(view[(3, 1)], 31.0);
}

#[test]
fn test_display() {
    let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.5]).unwrap();
    assert_eq!(m.to_string(), "Matrix 2x2\n  [1, 2]\n  [3, 4.5]\n");
}
