//! Backend abstraction for the numeric kernels.
//!
//! # Backends
//!
//! - `GenericBackend`: Naive loop-based implementation (always available)
//!
//! # faer Integration
//!
//! The `faer_interop` module provides zero-copy views of vectors and
//! matrices as faer's `ColRef`/`MatRef`, and copying conversions back.

mod faer_interop;
mod generic;
mod kernel;

pub use faer_interop::{AsFaerCol, AsFaerMat, matrix_from_faer, vector_from_faer};
pub use generic::GenericBackend;
pub use kernel::KernelBackend;
