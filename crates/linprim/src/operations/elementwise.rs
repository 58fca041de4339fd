//! Element-wise vector operations.

use crate::Real;
use crate::error::Result;
use crate::vector::Vector;

/// Return `v + w` as a new vector.
///
/// # Errors
///
/// Returns `LinalgError::DimensionMismatch` if the dimensions differ.
///
/// # Example
///
/// ```
/// use linprim::Vector;
/// use linprim::operations::sum;
///
/// let v = Vector::from_vec(vec![1.0, 2.0]);
/// let w = Vector::from_vec(vec![3.0, 4.0]);
/// assert_eq!(sum(&v, &w).unwrap().as_slice(), &[4.0, 6.0]);
/// ```
pub fn sum(v: &Vector<'_>, w: &Vector<'_>) -> Result<Vector<'static>> {
    let mut result = Vector::zeros(v.dim());
    result.sum(v, w)?;
    Ok(result)
}

/// Return `v - w` as a new vector.
///
/// # Errors
///
/// Returns `LinalgError::DimensionMismatch` if the dimensions differ.
pub fn diff(v: &Vector<'_>, w: &Vector<'_>) -> Result<Vector<'static>> {
    let mut result = Vector::zeros(v.dim());
    result.diff(v, w)?;
    Ok(result)
}

/// Return `x * v` as a new vector.
///
/// # Example
///
/// ```
/// use linprim::Vector;
/// use linprim::operations::scaled;
///
/// let v = Vector::from_vec(vec![1.0, -2.0]);
/// assert_eq!(scaled(&v, 0.5).as_slice(), &[0.5, -1.0]);
/// ```
pub fn scaled(v: &Vector<'_>, x: Real) -> Vector<'static> {
    let mut result = v.to_owned_vector();
    result.scale_in_place(x);
    result
}
