//! Allocating operations.
//!
//! Each function here allocates an owned output of the right size and then
//! calls the in-place method on it:
//!
//! ```text
//! Level 1: allocating API (this module)
//!     sum, diff, scaled, matvec, permuted, permuted_back, ...
//!     → allocate output
//!     → call in-place method
//!
//! Level 2: in-place API (Vector / Matrix methods)
//!     y.sum(&v, &w), y.matrix_mult(&a, &v), m.permute(&a, &rp, &cp), ...
//!     → validate dimensions
//!     → dispatch to backend
//!
//! Level 3: backend kernels (GenericBackend)
//! ```

mod elementwise;
mod matvec;
mod permute;

pub use elementwise::{diff, scaled, sum};
pub use matvec::matvec;
pub use permute::{permuted, permuted_back, permuted_matrix, permuted_matrix_back};
