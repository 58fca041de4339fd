//! Permutation of vectors and matrices.
//!
//! ```text
//! permuted(v, p)                     y[i]      = v[p[i]]
//! permuted_back(v, p)                y[p[i]]   = v[i]
//! permuted_matrix(a, rp, cp)         b(i, j)   = a(rp[i], cp[j])
//! permuted_matrix_back(a, rp, cp)    b(rp[i], cp[j]) = a(i, j)
//! ```

use crate::error::Result;
use crate::matrix::Matrix;
use crate::permutation::Permutation;
use crate::vector::Vector;

/// Gather `v` through `p` into a new vector.
///
/// # Errors
///
/// Returns `LinalgError::DimensionMismatch` if `p.dim() != v.dim()`.
///
/// # Example
///
/// ```
/// use linprim::{Permutation, Vector};
/// use linprim::operations::{permuted, permuted_back};
///
/// let v = Vector::from_vec(vec![1.0, 2.0, 3.0]);
/// let p = Permutation::from_map(vec![1, 2, 0]).unwrap();
///
/// let y = permuted(&v, &p).unwrap();
/// assert_eq!(y.as_slice(), &[2.0, 3.0, 1.0]);
/// assert_eq!(permuted_back(&y, &p).unwrap(), v);
/// ```
pub fn permuted(v: &Vector<'_>, p: &Permutation) -> Result<Vector<'static>> {
    let mut result = Vector::zeros(v.dim());
    result.permute(v, p)?;
    Ok(result)
}

/// Scatter `v` through `p` into a new vector.
///
/// # Errors
///
/// Returns `LinalgError::DimensionMismatch` if `p.dim() != v.dim()`.
pub fn permuted_back(v: &Vector<'_>, p: &Permutation) -> Result<Vector<'static>> {
    let mut result = Vector::zeros(v.dim());
    result.permute_back(v, p)?;
    Ok(result)
}

/// Gather the rows and columns of `a` into a new matrix.
///
/// # Errors
///
/// Returns `LinalgError::DimensionMismatch` unless
/// `row_p.dim() == a.height()` and `col_p.dim() == a.width()`.
pub fn permuted_matrix(
    a: &Matrix<'_>,
    row_p: &Permutation,
    col_p: &Permutation,
) -> Result<Matrix<'static>> {
    let mut result = Matrix::zeros(a.height(), a.width());
    result.permute(a, row_p, col_p)?;
    Ok(result)
}

/// Scatter the rows and columns of `a` into a new matrix.
///
/// # Errors
///
/// Same conditions as [`permuted_matrix`].
pub fn permuted_matrix_back(
    a: &Matrix<'_>,
    row_p: &Permutation,
    col_p: &Permutation,
) -> Result<Matrix<'static>> {
    let mut result = Matrix::zeros(a.height(), a.width());
    result.permute_back(a, row_p, col_p)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permuted_identity() {
        let v = Vector::from_vec(vec![5.0, 6.0, 7.0]);
        let p = Permutation::new(3).unwrap();
        assert_eq!(permuted(&v, &p).unwrap(), v);
        assert_eq!(permuted_back(&v, &p).unwrap(), v);
    }

    #[test]
    fn test_permuted_back_uses_inverse() {
        let v = Vector::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
        let p = Permutation::from_map(vec![3, 0, 1, 2]).unwrap();
        assert_eq!(
            permuted_back(&v, &p).unwrap(),
            permuted(&v, &p.inverse()).unwrap()
        );
    }

    #[test]
    fn test_permuted_matrix_rows_only() {
        let a = Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let rows = Permutation::from_map(vec![2, 1, 0]).unwrap();
        let cols = Permutation::new(2).unwrap();

        let b = permuted_matrix(&a, &rows, &cols).unwrap();
        assert_eq!(b.as_slice(), &[5.0, 6.0, 3.0, 4.0, 1.0, 2.0]);
        assert_eq!(permuted_matrix_back(&b, &rows, &cols).unwrap(), a);
    }

    #[test]
    fn test_permuted_mismatch() {
        let v = Vector::zeros(3);
        let p = Permutation::new(2).unwrap();
        assert!(permuted(&v, &p).is_err());
        assert!(permuted_back(&v, &p).is_err());

        let a = Matrix::zeros(2, 3);
        assert!(permuted_matrix(&a, &p, &p).is_err());
        assert!(permuted_matrix_back(&a, &p, &p).is_err());
    }
}
