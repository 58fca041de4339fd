//! Generic (naive loop-based) backend implementation.

use crate::Real;
use crate::backend::KernelBackend;

/// Generic backend using naive loop-based implementations.
///
/// This backend is always available and is the one every operation
/// dispatches to.
pub struct GenericBackend;

impl KernelBackend for GenericBackend {
    fn gather(dest: &mut [Real], src: &[Real], map: &[usize]) {
        for (d, &m) in dest.iter_mut().zip(map) {
            *d = src[m];
        }
    }

    fn scatter(dest: &mut [Real], src: &[Real], map: &[usize]) {
        for (&s, &m) in src.iter().zip(map) {
            dest[m] = s;
        }
    }

    fn gather_2d(dest: &mut [Real], src: &[Real], rows: &[usize], cols: &[usize]) {
        let width = cols.len();
        for (i, &r) in rows.iter().enumerate() {
            for (j, &c) in cols.iter().enumerate() {
                dest[i * width + j] = src[r * width + c];
            }
        }
    }

    fn scatter_2d(dest: &mut [Real], src: &[Real], rows: &[usize], cols: &[usize]) {
        let width = cols.len();
        for (i, &r) in rows.iter().enumerate() {
            for (j, &c) in cols.iter().enumerate() {
                dest[r * width + c] = src[i * width + j];
            }
        }
    }

    fn gemv(dest: &mut [Real], a: &[Real], x: &[Real]) {
        let width = x.len();
        for (i, d) in dest.iter_mut().enumerate() {
            let row = &a[i * width..(i + 1) * width];
            *d = Self::dot(row, x);
        }
    }

    fn dot(x: &[Real], y: &[Real]) -> Real {
        x.iter().zip(y).map(|(a, b)| a * b).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gather_scatter_inverse() {
        let src = [10.0, 20.0, 30.0, 40.0];
        let map = [2, 0, 3, 1];

        let mut gathered = [0.0; 4];
        GenericBackend::gather(&mut gathered, &src, &map);
        assert_eq!(gathered, [30.0, 10.0, 40.0, 20.0]);

        let mut back = [0.0; 4];
        GenericBackend::scatter(&mut back, &gathered, &map);
        assert_eq!(back, src);
    }

    #[test]
    fn test_gather_2d() {
        // 2x3 row-major
        let src = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut dest = [0.0; 6];
        GenericBackend::gather_2d(&mut dest, &src, &[1, 0], &[2, 1, 0]);
        assert_eq!(dest, [6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_scatter_2d_undoes_gather_2d() {
        let src = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let rows = [1, 0];
        let cols = [1, 2, 0];
        let mut mid = [0.0; 6];
        let mut back = [0.0; 6];
        GenericBackend::gather_2d(&mut mid, &src, &rows, &cols);
        GenericBackend::scatter_2d(&mut back, &mid, &rows, &cols);
        assert_eq!(back, src);
    }

    #[test]
    fn test_gemv() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let x = [1.0, 1.0];
        let mut y = [0.0; 2];
        GenericBackend::gemv(&mut y, &a, &x);
        assert_eq!(y, [3.0, 7.0]);
    }

    #[test]
    fn test_gemv_rectangular() {
        // 3x2 times 2-vector
        let a = [1.0, 0.0, 0.0, 1.0, 2.0, -1.0];
        let x = [4.0, 5.0];
        let mut y = [0.0; 3];
        GenericBackend::gemv(&mut y, &a, &x);
        assert_eq!(y, [4.0, 5.0, 3.0]);
    }

    #[test]
    fn test_dot() {
        assert_eq!(GenericBackend::dot(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]), 14.0);
        assert_eq!(GenericBackend::dot(&[], &[]), 0.0);
    }
}
