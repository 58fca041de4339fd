//! Fixed-length real vectors.
//!
//! Every arithmetic or permutation method writes its result into the
//! receiver and reads from the operands it is given:
//!
//! ```text
//! y.sum(&v, &w)          y = v + w
//! y.diff(&v, &w)         y = v - w
//! y.real_mult(&v, x)     y = x * v
//! y.real_div(&v, x)      y = v / x
//! y.permute(&v, &p)      y[i] = v[p[i]]
//! y.permute_back(&v, &p) y[p[i]] = v[i]
//! y.matrix_mult(&a, &v)  y = A v
//! ```
//!
//! Fallible methods check dimensions first and return
//! `LinalgError::DimensionMismatch` without touching the receiver.

use std::fmt;
use std::ops::{DivAssign, Index, IndexMut, MulAssign};

use crate::Real;
use crate::backend::{GenericBackend, KernelBackend};
use crate::error::{Result, ensure_dims, ensure_index};
use crate::matrix::Matrix;
use crate::permutation::Permutation;
use crate::storage::Buffer;

/// A vector of `dim` reals over owned or borrowed storage.
///
/// The dimension is fixed at construction. `clone()` always allocates a
/// fresh owned buffer, even when `self` wraps caller storage.
///
/// # Examples
///
/// ```
/// use linprim::Vector;
///
/// let v = Vector::from_vec(vec![1.0, 2.0, 3.0]);
/// let w = Vector::from_vec(vec![4.0, 5.0, 6.0]);
///
/// let mut y = Vector::zeros(3);
/// y.sum(&v, &w).unwrap();
/// assert_eq!(y.as_slice(), &[5.0, 7.0, 9.0]);
/// assert_eq!(v.dot(&w).unwrap(), 32.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<'a> {
    buf: Buffer<'a>,
}

impl<'a> Vector<'a> {
    /// Create an owned vector of `dim` zeros.
    pub fn zeros(dim: usize) -> Self {
        Self {
            buf: Buffer::zeros(dim),
        }
    }

    /// Create an owned vector from existing data (takes ownership).
    pub fn from_vec(data: Vec<Real>) -> Self {
        Self {
            buf: Buffer::from_vec(data),
        }
    }

    /// Wrap caller storage without taking ownership.
    ///
    /// Writes through the vector land in `data`; dropping the vector does
    /// not free it.
    ///
    /// ```
    /// use linprim::Vector;
    ///
    /// let mut raw = [1.0, 2.0];
    /// {
    ///     let mut v = Vector::from_slice_mut(&mut raw);
    ///     v *= 3.0;
    /// }
    /// assert_eq!(raw, [3.0, 6.0]);
    /// ```
    pub fn from_slice_mut(data: &'a mut [Real]) -> Self {
        log::trace!("wrapping caller storage as vector of dim {}", data.len());
        Self {
            buf: Buffer::borrowed(data),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn dim(&self) -> usize {
        self.buf.len()
    }

    /// `true` when the storage belongs to the caller.
    #[inline]
    pub fn is_borrowed(&self) -> bool {
        self.buf.is_borrowed()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Real] {
        self.buf.as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Real] {
        self.buf.as_mut_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Real> {
        self.as_slice().iter()
    }

    /// Element `i`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::IndexOutOfRange` if `i >= dim`.
    pub fn get(&self, i: usize) -> Result<Real> {
        ensure_index(i, self.dim())?;
        Ok(self.buf[i])
    }

    /// Mutable reference to element `i`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::IndexOutOfRange` if `i >= dim`.
    pub fn get_mut(&mut self, i: usize) -> Result<&mut Real> {
        ensure_index(i, self.dim())?;
        Ok(&mut self.buf[i])
    }

    /// Fill all elements with a value.
    pub fn fill(&mut self, value: Real) {
        self.as_mut_slice().fill(value);
    }

    /// Copy into a fresh owned vector, detached from any borrowed storage.
    pub fn to_owned_vector(&self) -> Vector<'static> {
        Vector {
            buf: self.buf.to_owned_buffer(),
        }
    }

    /// Consume the vector and return its contents, copying if borrowed.
    pub fn into_vec(self) -> Vec<Real> {
        self.buf.into_vec()
    }

    /// Inner product `sum_i self[i] * v[i]`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::DimensionMismatch` if the dimensions differ.
    pub fn dot(&self, v: &Vector<'_>) -> Result<Real> {
        ensure_dims("dot", &[self.dim()], &[v.dim()])?;
        Ok(GenericBackend::dot(self.as_slice(), v.as_slice()))
    }

    /// Euclidean norm.
    pub fn norm(&self) -> Real {
        GenericBackend::dot(self.as_slice(), self.as_slice()).sqrt()
    }

    /// Copy `v` into `self` element-wise.
    ///
    /// Returns the receiver so calls can be chained.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::DimensionMismatch` if the dimensions differ.
    pub fn assign(&mut self, v: &Vector<'_>) -> Result<&mut Self> {
        ensure_dims("assign", &[self.dim()], &[v.dim()])?;
        self.as_mut_slice().copy_from_slice(v.as_slice());
        Ok(self)
    }

    /// `self = v + w`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::DimensionMismatch` unless
    /// `self.dim() == v.dim() == w.dim()`.
    pub fn sum(&mut self, v: &Vector<'_>, w: &Vector<'_>) -> Result<&mut Self> {
        self.zip_with("sum", v, w, |a, b| a + b)
    }

    /// `self = v - w`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::DimensionMismatch` unless
    /// `self.dim() == v.dim() == w.dim()`.
    pub fn diff(&mut self, v: &Vector<'_>, w: &Vector<'_>) -> Result<&mut Self> {
        self.zip_with("diff", v, w, |a, b| a - b)
    }

    /// `self = x * v`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::DimensionMismatch` if `self.dim() != v.dim()`.
    pub fn real_mult(&mut self, v: &Vector<'_>, x: Real) -> Result<&mut Self> {
        self.map_from("real_mult", v, |a| a * x)
    }

    /// `self = v / x`.
    ///
    /// Division by zero is not guarded and yields IEEE infinities or NaN.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::DimensionMismatch` if `self.dim() != v.dim()`.
    pub fn real_div(&mut self, v: &Vector<'_>, x: Real) -> Result<&mut Self> {
        self.map_from("real_div", v, |a| a / x)
    }

    /// `self += v`.
    pub fn add_assign_vec(&mut self, v: &Vector<'_>) -> Result<&mut Self> {
        self.update_with("add_assign", v, |a, b| a + b)
    }

    /// `self -= v`.
    pub fn sub_assign_vec(&mut self, v: &Vector<'_>) -> Result<&mut Self> {
        self.update_with("sub_assign", v, |a, b| a - b)
    }

    /// `self *= x`.
    pub fn scale_in_place(&mut self, x: Real) -> &mut Self {
        for a in self.as_mut_slice() {
            *a *= x;
        }
        self
    }

    /// `self /= x`.
    pub fn div_in_place(&mut self, x: Real) -> &mut Self {
        for a in self.as_mut_slice() {
            *a /= x;
        }
        self
    }

    /// Gather through `p`: `self[i] = v[p[i]]`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::DimensionMismatch` unless
    /// `self.dim() == v.dim() == p.dim()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linprim::{Permutation, Vector};
    ///
    /// let v = Vector::from_vec(vec![10.0, 20.0, 30.0]);
    /// let p = Permutation::from_map(vec![2, 0, 1]).unwrap();
    ///
    /// let mut y = Vector::zeros(3);
    /// y.permute(&v, &p).unwrap();
    /// assert_eq!(y.as_slice(), &[30.0, 10.0, 20.0]);
    /// ```
    pub fn permute(&mut self, v: &Vector<'_>, p: &Permutation) -> Result<&mut Self> {
        let n = self.dim();
        ensure_dims("permute", &[n, n], &[v.dim(), p.dim()])?;
        GenericBackend::gather(self.as_mut_slice(), v.as_slice(), p.as_slice());
        Ok(self)
    }

    /// Scatter through `p`: `self[p[i]] = v[i]`, the inverse of
    /// [`permute`](Vector::permute).
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::DimensionMismatch` unless
    /// `self.dim() == v.dim() == p.dim()`.
    pub fn permute_back(&mut self, v: &Vector<'_>, p: &Permutation) -> Result<&mut Self> {
        let n = self.dim();
        ensure_dims("permute_back", &[n, n], &[v.dim(), p.dim()])?;
        GenericBackend::scatter(self.as_mut_slice(), v.as_slice(), p.as_slice());
        Ok(self)
    }

    /// Matrix-vector product: `self[i] = sum_j a(i, j) * v[j]`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::DimensionMismatch` unless
    /// `self.dim() == a.height()` and `v.dim() == a.width()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linprim::{Matrix, Vector};
    ///
    /// let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// let v = Vector::from_vec(vec![1.0, 1.0]);
    ///
    /// let mut y = Vector::zeros(2);
    /// y.matrix_mult(&a, &v).unwrap();
    /// assert_eq!(y.as_slice(), &[3.0, 7.0]);
    /// ```
    pub fn matrix_mult(&mut self, a: &Matrix<'_>, v: &Vector<'_>) -> Result<&mut Self> {
        ensure_dims(
            "matrix_mult",
            &[a.height(), a.width()],
            &[self.dim(), v.dim()],
        )?;
        GenericBackend::gemv(self.as_mut_slice(), a.as_slice(), v.as_slice());
        Ok(self)
    }

    fn zip_with<F>(
        &mut self,
        op: &'static str,
        v: &Vector<'_>,
        w: &Vector<'_>,
        f: F,
    ) -> Result<&mut Self>
    where
        F: Fn(Real, Real) -> Real,
    {
        let n = self.dim();
        ensure_dims(op, &[n, n], &[v.dim(), w.dim()])?;
        for ((dest, &a), &b) in self.as_mut_slice().iter_mut().zip(v.iter()).zip(w.iter()) {
            *dest = f(a, b);
        }
        Ok(self)
    }

    fn map_from<F>(&mut self, op: &'static str, v: &Vector<'_>, f: F) -> Result<&mut Self>
    where
        F: Fn(Real) -> Real,
    {
        ensure_dims(op, &[self.dim()], &[v.dim()])?;
        for (dest, &a) in self.as_mut_slice().iter_mut().zip(v.iter()) {
            *dest = f(a);
        }
        Ok(self)
    }

    fn update_with<F>(&mut self, op: &'static str, v: &Vector<'_>, f: F) -> Result<&mut Self>
    where
        F: Fn(Real, Real) -> Real,
    {
        ensure_dims(op, &[self.dim()], &[v.dim()])?;
        for (dest, &b) in self.as_mut_slice().iter_mut().zip(v.iter()) {
            *dest = f(*dest, b);
        }
        Ok(self)
    }
}

impl Index<usize> for Vector<'_> {
    type Output = Real;

    #[inline]
    fn index(&self, i: usize) -> &Real {
        &self.buf[i]
    }
}

impl IndexMut<usize> for Vector<'_> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Real {
        &mut self.buf[i]
    }
}

impl MulAssign<Real> for Vector<'_> {
    fn mul_assign(&mut self, x: Real) {
        self.scale_in_place(x);
    }
}

impl DivAssign<Real> for Vector<'_> {
    fn div_assign(&mut self, x: Real) {
        self.div_in_place(x);
    }
}

impl From<Vec<Real>> for Vector<'_> {
    fn from(data: Vec<Real>) -> Self {
        Vector::from_vec(data)
    }
}

impl FromIterator<Real> for Vector<'_> {
    fn from_iter<I: IntoIterator<Item = Real>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl fmt::Display for Vector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Vector<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Vector<'static> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <Vec<Real> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Vector::from_vec(data))
    }
}

impl From<Vector<'_>> for Vec<Real> {
    fn from(v: Vector<'_>) -> Self {
        v.into_vec()
    }
}
