//! linprim - dense linear-algebra primitives
//!
//! Fixed-size [`Vector`], [`Matrix`] and [`Permutation`] value types with
//! element-wise arithmetic, matrix-vector multiplication and row/column
//! permutation. Vectors and matrices either own their storage or wrap a
//! caller-supplied buffer; cloning always produces owned storage.
//!
//! # Architecture
//!
//! ```text
//! Level 1: Allocating API (operations module)
//!     → sum, diff, scaled, matvec, permuted, permuted_matrix, ...
//!
//! Level 2: In-place API (Vector / Matrix methods)
//!     → y.sum(&v, &w), y.matrix_mult(&a, &v), m.permute(&a, &rp, &cp), ...
//!
//! Level 3: Backend implementation (backend module)
//!     → GenericBackend (naive loops)
//! ```
//!
//! # Errors
//!
//! Dimension mismatches are reported as [`LinalgError::DimensionMismatch`]
//! and checked accessors report [`LinalgError::IndexOutOfRange`]. A failed
//! operation never modifies its receiver.
//!
//! # Example
//!
//! ```
//! use linprim::{Matrix, Permutation, Vector};
//!
//! let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! let v = Vector::from_vec(vec![1.0, 1.0]);
//!
//! let mut y = Vector::zeros(2);
//! y.matrix_mult(&a, &v).unwrap();
//! assert_eq!(y.as_slice(), &[3.0, 7.0]);
//!
//! // Wrap a caller buffer and write the swapped result into it
//! let mut p = Permutation::new(2).unwrap();
//! p.add_cycle(0, 1).unwrap();
//! let mut raw = [0.0; 2];
//! Vector::from_slice_mut(&mut raw).permute(&y, &p).unwrap();
//! assert_eq!(raw, [7.0, 3.0]);
//! ```

pub mod backend;
pub mod error;
pub mod matrix;
pub mod operations;
pub mod permutation;
pub mod storage;
pub mod vector;

pub use error::{LinalgError, Result};
pub use matrix::Matrix;
pub use permutation::Permutation;
pub use storage::Buffer;
pub use vector::Vector;

/// Index type used for dimensions and positions.
pub type Index = usize;

/// Element type of vectors and matrices.
pub type Real = f64;
