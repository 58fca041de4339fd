//! Matrix-vector product.

use crate::error::Result;
use crate::matrix::Matrix;
use crate::vector::Vector;

/// Return `a * v` as a new vector of dimension `a.height()`.
///
/// # Errors
///
/// Returns `LinalgError::DimensionMismatch` if `v.dim() != a.width()`.
///
/// # Example
///
/// ```
/// use linprim::{Matrix, Vector};
/// use linprim::operations::matvec;
///
/// let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let v = Vector::from_vec(vec![1.0, 1.0]);
/// assert_eq!(matvec(&a, &v).unwrap().as_slice(), &[3.0, 7.0]);
/// ```
pub fn matvec(a: &Matrix<'_>, v: &Vector<'_>) -> Result<Vector<'static>> {
    let mut result = Vector::zeros(a.height());
    result.matrix_mult(a, v)?;
    Ok(result)
}
