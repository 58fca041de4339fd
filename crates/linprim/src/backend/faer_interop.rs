//! Zero-copy conversion between linprim containers and faer.
//!
//! `Matrix` stores its elements row-major, so its faer view has a row
//! stride of `width` and a column stride of 1. A `Vector` maps onto a
//! contiguous faer column.

use faer::{ColMut, ColRef, MatMut, MatRef};

use crate::Real;
use crate::matrix::Matrix;
use crate::vector::Vector;

/// Extension trait viewing a `Matrix` as a faer matrix.
pub trait AsFaerMat {
    /// View the matrix as an immutable faer matrix (zero-copy).
    ///
    /// # Example
    ///
    /// ```
    /// use linprim::Matrix;
    /// use linprim::backend::AsFaerMat;
    ///
    /// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let view = m.as_faer_mat();
    /// assert_eq!(view.nrows(), 2);
    /// assert_eq!(view.ncols(), 3);
    /// assert_eq!(view[(1, 0)], 4.0);
    /// ```
    fn as_faer_mat(&self) -> MatRef<'_, Real>;

    /// View the matrix as a mutable faer matrix (zero-copy).
    fn as_faer_mat_mut(&mut self) -> MatMut<'_, Real>;
}

impl AsFaerMat for Matrix<'_> {
    fn as_faer_mat(&self) -> MatRef<'_, Real> {
        let (rows, cols) = self.shape();
        MatRef::from_row_major_slice(self.as_slice(), rows, cols)
    }

    fn as_faer_mat_mut(&mut self) -> MatMut<'_, Real> {
        let (rows, cols) = self.shape();
        MatMut::from_row_major_slice_mut(self.as_mut_slice(), rows, cols)
    }
}

/// Extension trait viewing a `Vector` as a faer column.
pub trait AsFaerCol {
    /// View the vector as an immutable faer column (zero-copy).
    fn as_faer_col(&self) -> ColRef<'_, Real>;

    /// View the vector as a mutable faer column (zero-copy).
    fn as_faer_col_mut(&mut self) -> ColMut<'_, Real>;
}

impl AsFaerCol for Vector<'_> {
    fn as_faer_col(&self) -> ColRef<'_, Real> {
        ColRef::from_slice(self.as_slice())
    }

    fn as_faer_col_mut(&mut self) -> ColMut<'_, Real> {
        ColMut::from_slice_mut(self.as_mut_slice())
    }
}

/// Create an owned `Matrix` from a faer matrix (copies data).
///
/// # Example
///
/// ```
/// use faer::Mat;
/// use linprim::backend::matrix_from_faer;
///
/// let mat = Mat::from_fn(2, 3, |i, j| (i * 3 + j) as f64);
/// let m = matrix_from_faer(mat.as_ref());
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn matrix_from_faer(mat: MatRef<'_, Real>) -> Matrix<'static> {
    Matrix::from_fn(mat.nrows(), mat.ncols(), |i, j| mat[(i, j)])
}

/// Create an owned `Vector` from a faer column (copies data).
pub fn vector_from_faer(col: ColRef<'_, Real>) -> Vector<'static> {
    (0..col.nrows()).map(|i| col[i]).collect()
}
