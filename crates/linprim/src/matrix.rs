//! Fixed-size row-major real matrices.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::Real;
use crate::backend::{GenericBackend, KernelBackend};
use crate::error::{LinalgError, Result, ensure_dims, ensure_index};
use crate::permutation::Permutation;
use crate::storage::Buffer;

/// A `height x width` matrix of reals over owned or borrowed storage.
///
/// Elements are stored row-major: `(i, j)` lives at offset `i * width + j`.
/// The shape is fixed at construction, and `clone()` always allocates a
/// fresh owned buffer.
///
/// # Examples
///
/// ```
/// use linprim::{Matrix, Permutation};
///
/// let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(a[(1, 0)], 4.0);
///
/// let mut rows = Permutation::new(2).unwrap();
/// rows.add_cycle(0, 1).unwrap();
/// let cols = Permutation::new(3).unwrap();
///
/// let mut b = Matrix::zeros(2, 3);
/// b.permute(&a, &rows, &cols).unwrap();
/// assert_eq!(b.as_slice(), &[4.0, 5.0, 6.0, 1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<'a> {
    buf: Buffer<'a>,
    height: usize,
    width: usize,
}

impl<'a> Matrix<'a> {
    /// Create an owned, zero-initialized `height x width` matrix.
    ///
    /// # Panics
    ///
    /// Panics if `height * width` elements cannot be addressed; use
    /// [`try_zeros`](Matrix::try_zeros) for untrusted sizes.
    pub fn zeros(height: usize, width: usize) -> Self {
        match Self::try_zeros(height, width) {
            Ok(m) => m,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create an owned, zero-initialized `height x width` matrix.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::InvalidArgument` if `height * width` overflows
    /// or exceeds the largest allocatable buffer.
    pub fn try_zeros(height: usize, width: usize) -> Result<Self> {
        let len = element_count(height, width)?;
        Ok(Self {
            buf: Buffer::zeros(len),
            height,
            width,
        })
    }

    /// Create an owned matrix from row-major data (takes ownership).
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::InvalidArgument` if `height * width` overflows
    /// and `LinalgError::DimensionMismatch` if `data.len() != height * width`.
    pub fn from_vec(height: usize, width: usize, data: Vec<Real>) -> Result<Self> {
        let len = element_count(height, width)?;
        ensure_dims("from_vec", &[len], &[data.len()])?;
        Ok(Self {
            buf: Buffer::from_vec(data),
            height,
            width,
        })
    }

    /// Build an owned matrix with `f(i, j)` at every position.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`zeros`](Matrix::zeros).
    pub fn from_fn<F>(height: usize, width: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Real,
    {
        let len = match element_count(height, width) {
            Ok(len) => len,
            Err(err) => panic!("{err}"),
        };
        let mut data = Vec::with_capacity(len);
        for i in 0..height {
            for j in 0..width {
                data.push(f(i, j));
            }
        }
        Self {
            buf: Buffer::from_vec(data),
            height,
            width,
        }
    }

    /// Wrap caller row-major storage without taking ownership.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::InvalidArgument` if `height * width` overflows
    /// and `LinalgError::DimensionMismatch` if `data.len() != height * width`.
    pub fn from_slice_mut(height: usize, width: usize, data: &'a mut [Real]) -> Result<Self> {
        let len = element_count(height, width)?;
        ensure_dims("from_slice_mut", &[len], &[data.len()])?;
        log::trace!("wrapping caller storage as {height}x{width} matrix");
        Ok(Self {
            buf: Buffer::borrowed(data),
            height,
            width,
        })
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// `true` when the storage belongs to the caller.
    #[inline]
    pub fn is_borrowed(&self) -> bool {
        self.buf.is_borrowed()
    }

    /// Row-major element data.
    #[inline]
    pub fn as_slice(&self) -> &[Real] {
        self.buf.as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Real] {
        self.buf.as_mut_slice()
    }

    /// Row `i` as a slice.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::IndexOutOfRange` if `i >= height`.
    pub fn row(&self, i: usize) -> Result<&[Real]> {
        ensure_index(i, self.height)?;
        let start = i * self.width;
        Ok(&self.as_slice()[start..start + self.width])
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> usize {
        i * self.width + j
    }

    fn check_position(&self, i: usize, j: usize) -> Result<usize> {
        ensure_index(i, self.height)?;
        ensure_index(j, self.width)?;
        Ok(self.offset(i, j))
    }

    /// Element `(i, j)`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::IndexOutOfRange` if `i >= height` or
    /// `j >= width`.
    pub fn get(&self, i: usize, j: usize) -> Result<Real> {
        let offset = self.check_position(i, j)?;
        Ok(self.buf[offset])
    }

    /// Mutable reference to element `(i, j)`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::IndexOutOfRange` if `i >= height` or
    /// `j >= width`.
    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut Real> {
        let offset = self.check_position(i, j)?;
        Ok(&mut self.buf[offset])
    }

    /// Fill all elements with a value.
    pub fn fill(&mut self, value: Real) {
        self.as_mut_slice().fill(value);
    }

    /// Copy into a fresh owned matrix, detached from any borrowed storage.
    pub fn to_owned_matrix(&self) -> Matrix<'static> {
        Matrix {
            buf: self.buf.to_owned_buffer(),
            height: self.height,
            width: self.width,
        }
    }

    /// Consume the matrix and return its row-major contents.
    pub fn into_vec(self) -> Vec<Real> {
        self.buf.into_vec()
    }

    /// Copy `a` into `self` element-wise and return the receiver.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::DimensionMismatch` unless the shapes match
    /// exactly.
    pub fn assign(&mut self, a: &Matrix<'_>) -> Result<&mut Self> {
        ensure_dims(
            "assign",
            &[self.height, self.width],
            &[a.height, a.width],
        )?;
        self.as_mut_slice().copy_from_slice(a.as_slice());
        Ok(self)
    }

    /// Gather rows and columns: `self(i, j) = a(row_p[i], col_p[j])`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::DimensionMismatch` unless `a` has the same
    /// shape as `self`, `row_p.dim() == height` and `col_p.dim() == width`.
    pub fn permute(
        &mut self,
        a: &Matrix<'_>,
        row_p: &Permutation,
        col_p: &Permutation,
    ) -> Result<&mut Self> {
        self.check_permute_operands("permute", a, row_p, col_p)?;
        GenericBackend::gather_2d(
            self.as_mut_slice(),
            a.as_slice(),
            row_p.as_slice(),
            col_p.as_slice(),
        );
        Ok(self)
    }

    /// Scatter rows and columns: `self(row_p[i], col_p[j]) = a(i, j)`, the
    /// inverse of [`permute`](Matrix::permute).
    ///
    /// # Errors
    ///
    /// Same conditions as [`permute`](Matrix::permute).
    pub fn permute_back(
        &mut self,
        a: &Matrix<'_>,
        row_p: &Permutation,
        col_p: &Permutation,
    ) -> Result<&mut Self> {
        self.check_permute_operands("permute_back", a, row_p, col_p)?;
        GenericBackend::scatter_2d(
            self.as_mut_slice(),
            a.as_slice(),
            row_p.as_slice(),
            col_p.as_slice(),
        );
        Ok(self)
    }

    fn check_permute_operands(
        &self,
        op: &'static str,
        a: &Matrix<'_>,
        row_p: &Permutation,
        col_p: &Permutation,
    ) -> Result<()> {
        let (h, w) = self.shape();
        ensure_dims(
            op,
            &[h, w, h, w],
            &[a.height, a.width, row_p.dim(), col_p.dim()],
        )
    }
}

/// Number of elements in a `height x width` matrix.
///
/// The count must fit a `Vec<Real>` allocation (`isize::MAX` bytes).
fn element_count(height: usize, width: usize) -> Result<usize> {
    const MAX_LEN: usize = isize::MAX as usize / std::mem::size_of::<Real>();
    match height.checked_mul(width) {
        Some(len) if len <= MAX_LEN => Ok(len),
        _ => {
            log::debug!("{height}x{width} matrix rejected: element count overflows");
            Err(LinalgError::InvalidArgument {
                reason: "matrix element count overflows",
            })
        }
    }
}

impl Index<(usize, usize)> for Matrix<'_> {
    type Output = Real;

    fn index(&self, (i, j): (usize, usize)) -> &Real {
        assert!(
            i < self.height && j < self.width,
            "index ({i}, {j}) out of range for {}x{} matrix",
            self.height,
            self.width
        );
        &self.buf[self.offset(i, j)]
    }
}

impl IndexMut<(usize, usize)> for Matrix<'_> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Real {
        assert!(
            i < self.height && j < self.width,
            "index ({i}, {j}) out of range for {}x{} matrix",
            self.height,
            self.width
        );
        let offset = self.offset(i, j);
        &mut self.buf[offset]
    }
}

impl fmt::Display for Matrix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix {}x{}", self.height, self.width)?;
        for i in 0..self.height {
            let row = &self.as_slice()[i * self.width..(i + 1) * self.width];
            write!(f, "  [")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct MatrixRepr<D> {
    height: usize,
    width: usize,
    data: D,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Matrix<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let repr = MatrixRepr {
            height: self.height,
            width: self.width,
            data: self.as_slice(),
        };
        serde::Serialize::serialize(&repr, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Matrix<'static> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let repr: MatrixRepr<Vec<Real>> = serde::Deserialize::deserialize(deserializer)?;
        Matrix::from_vec(repr.height, repr.width, repr.data).map_err(serde::de::Error::custom)
    }
}
