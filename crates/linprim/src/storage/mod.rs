//! Backing storage for vectors and matrices.
//!
//! ```text
//! Buffer<'a>
//! ├── Owned(Vec<Real>)          - allocated at construction, freed on drop
//! └── Borrowed(&'a mut [Real])  - caller storage, never freed here
//! ```

mod buffer;

pub use buffer::Buffer;
