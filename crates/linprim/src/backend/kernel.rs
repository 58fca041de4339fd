//! Kernel backend trait.

use crate::Real;

/// Backend trait for the loops behind vector and matrix operations.
///
/// All kernels work on raw row-major slices. Callers validate dimensions
/// before dispatching, so implementations may assume every index they are
/// handed is in range:
/// - `GenericBackend`: naive loops (always available)
///
/// Permutation maps are given as `&[usize]` with `map[i]` the image of `i`.
pub trait KernelBackend {
    /// Gather: `dest[i] = src[map[i]]`.
    fn gather(dest: &mut [Real], src: &[Real], map: &[usize]);

    /// Scatter: `dest[map[i]] = src[i]`.
    fn scatter(dest: &mut [Real], src: &[Real], map: &[usize]);

    /// Two-axis gather on a `rows.len() x cols.len()` row-major block:
    /// `dest(i, j) = src(rows[i], cols[j])`.
    fn gather_2d(dest: &mut [Real], src: &[Real], rows: &[usize], cols: &[usize]);

    /// Two-axis scatter: `dest(rows[i], cols[j]) = src(i, j)`.
    fn scatter_2d(dest: &mut [Real], src: &[Real], rows: &[usize], cols: &[usize]);

    /// Matrix-vector product: `dest[i] = sum_j a(i, j) * x[j]` where `a` is
    /// `dest.len() x x.len()` row-major.
    fn gemv(dest: &mut [Real], a: &[Real], x: &[Real]);

    /// Inner product of equal-length slices.
    fn dot(x: &[Real], y: &[Real]) -> Real;
}
