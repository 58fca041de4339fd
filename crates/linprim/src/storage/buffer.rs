//! Owned-or-borrowed contiguous storage.

use std::fmt;

use crate::Real;

/// Contiguous storage of reals, either owned or borrowed from the caller.
///
/// An owned buffer is allocated when the container is built and released
/// when it is dropped. A borrowed buffer references caller storage that
/// must outlive the container; dropping the container leaves it alone.
///
/// Cloning always produces an owned buffer, whatever the source mode.
pub enum Buffer<'a> {
    /// Storage allocated and freed by the container.
    Owned(Vec<Real>),
    /// Caller-supplied storage.
    Borrowed(&'a mut [Real]),
}

impl<'a> Buffer<'a> {
    /// Create an owned buffer of `len` zeros.
    #[inline]
    pub fn zeros(len: usize) -> Self {
        Buffer::Owned(vec![0.0; len])
    }

    /// Take ownership of an existing vector.
    #[inline]
    pub fn from_vec(data: Vec<Real>) -> Self {
        Buffer::Owned(data)
    }

    /// Wrap caller storage without taking ownership.
    #[inline]
    pub fn borrowed(data: &'a mut [Real]) -> Self {
        Buffer::Borrowed(data)
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Check if the buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` when the storage belongs to the caller.
    #[inline]
    pub fn is_borrowed(&self) -> bool {
        matches!(self, Buffer::Borrowed(_))
    }

    #[inline]
    pub fn as_slice(&self) -> &[Real] {
        match self {
            Buffer::Owned(data) => data,
            Buffer::Borrowed(data) => data,
        }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Real] {
        match self {
            Buffer::Owned(data) => data,
            Buffer::Borrowed(data) => data,
        }
    }

    /// Copy the contents into a fresh owned buffer.
    pub fn to_owned_buffer(&self) -> Buffer<'static> {
        Buffer::Owned(self.as_slice().to_vec())
    }

    /// Consume the buffer and return its contents, copying if borrowed.
    pub fn into_vec(self) -> Vec<Real> {
        match self {
            Buffer::Owned(data) => data,
            Buffer::Borrowed(data) => data.to_vec(),
        }
    }
}

impl Clone for Buffer<'_> {
    fn clone(&self) -> Self {
        Buffer::Owned(self.as_slice().to_vec())
    }
}

impl PartialEq for Buffer<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl fmt::Debug for Buffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if self.is_borrowed() { "Borrowed" } else { "Owned" };
        f.debug_tuple(mode).field(&self.as_slice()).finish()
    }
}

impl std::ops::Index<usize> for Buffer<'_> {
    type Output = Real;

    #[inline]
    fn index(&self, i: usize) -> &Real {
        &self.as_slice()[i]
    }
}

impl std::ops::IndexMut<usize> for Buffer<'_> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Real {
        &mut self.as_mut_slice()[i]
    }
}
