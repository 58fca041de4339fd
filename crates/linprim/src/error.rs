//! Error types for linprim.

use thiserror::Error;

/// Errors that can occur in vector, matrix and permutation operations.
///
/// Every operation that fails leaves its receiver unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// Operand dimensions do not satisfy the operation.
    #[error("dimension mismatch in {op}: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        op: &'static str,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// Index out of range.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Invalid construction argument.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },
}

/// Convenience alias used throughout linprim.
pub type Result<T> = std::result::Result<T, LinalgError>;

impl LinalgError {
    pub(crate) fn dimension_mismatch(
        op: &'static str,
        expected: &[usize],
        actual: &[usize],
    ) -> Self {
        log::debug!("{op}: rejected operands, expected {expected:?}, got {actual:?}");
        Self::DimensionMismatch {
            op,
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        }
    }

    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        log::debug!("index {index} rejected for length {len}");
        Self::IndexOutOfRange { index, len }
    }
}

/// Fail with `DimensionMismatch` unless `expected == actual`.
pub(crate) fn ensure_dims(op: &'static str, expected: &[usize], actual: &[usize]) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(LinalgError::dimension_mismatch(op, expected, actual))
    }
}

/// Fail with `IndexOutOfRange` unless `index < len`.
#[inline]
pub(crate) fn ensure_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(LinalgError::out_of_range(index, len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_dimension_mismatch() {
        let err = LinalgError::dimension_mismatch("sum", &[3, 3], &[3, 2]);
        assert_eq!(
            err.to_string(),
            "dimension mismatch in sum: expected [3, 3], got [3, 2]"
        );
    }

    #[test]
    fn test_ensure_dims() {
        assert!(ensure_dims("assign", &[2, 3], &[2, 3]).is_ok());
        assert!(matches!(
            ensure_dims("assign", &[2, 3], &[3, 2]),
            Err(LinalgError::DimensionMismatch { op: "assign", .. })
        ));
    }

    #[test]
    fn test_ensure_index() {
        assert!(ensure_index(0, 1).is_ok());
        assert_eq!(
            ensure_index(4, 4),
            Err(LinalgError::IndexOutOfRange { index: 4, len: 4 })
        );
    }
}
