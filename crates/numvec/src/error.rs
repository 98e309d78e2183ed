//! Vector error types.

use thiserror::Error;

/// Errors reported by fallible vector operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// A binary operation was invoked on vectors of unequal dimension, or an operation that only
    /// exists for a specific dimension (the cross product) was invoked on a different one.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// The allocator could not provide a buffer for `requested` bytes.
    #[error("failed to allocate a vector buffer of {requested} bytes")]
    Allocation { requested: usize },

    /// Checked element access outside of `0..dim`.
    #[error("index {index} is out of range for a vector of dimension {dim}")]
    OutOfRange { index: usize, dim: usize },
}

pub type Result<T, E = VectorError> = std::result::Result<T, E>;

/// Returns an error unless `found == expected`.
pub(crate) fn check_dim(expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(VectorError::DimensionMismatch { expected, found })
    }
}

/// Unwraps the result of an allocating operation that has no error channel.
///
/// This mirrors what [`Vec`] does when the allocator fails.
#[track_caller]
pub(crate) fn infallible<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            VectorError::DimensionMismatch {
                expected: 3,
                found: 4
            }
            .to_string(),
            "dimension mismatch: expected 3, found 4"
        );
        assert_eq!(
            VectorError::OutOfRange { index: 7, dim: 2 }.to_string(),
            "index 7 is out of range for a vector of dimension 2"
        );
    }

    #[test]
    fn check() {
        assert_eq!(check_dim(3, 3), Ok(()));
        assert_eq!(
            check_dim(3, 5),
            Err(VectorError::DimensionMismatch {
                expected: 3,
                found: 5
            })
        );
    }
}
