use thiserror::Error;

/// Errors reported by checked [`FixedArray`] access.
///
/// Only [`FixedArray::at`] and [`FixedArray::at_mut`] produce this type. Every
/// other out-of-range use of the container is a precondition violation: plain
/// indexing panics, [`FixedArray::get_unchecked`] is undefined behaviour and the
/// compile-time accessors refuse to build.
///
/// [`FixedArray`]: crate::FixedArray
/// [`FixedArray::at`]: crate::FixedArray::at
/// [`FixedArray::at_mut`]: crate::FixedArray::at_mut
/// [`FixedArray::get_unchecked`]: crate::FixedArray::get_unchecked
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FixedArrayError {
    /// The requested index is not in `[0, size)`.
    #[error("index {index} is out of range for fixed array of size {size}")]
    OutOfRange { index: usize, size: usize },
}

/// Convenience alias so checked accessors can return `Result<&T>`.
pub type Result<T> = core::result::Result<T, FixedArrayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = FixedArrayError::OutOfRange { index: 4, size: 3 };
        assert_eq!(
            err.to_string(),
            "index 4 is out of range for fixed array of size 3"
        );
    }

    #[test]
    fn test_error_is_copy_and_comparable() {
        let err = FixedArrayError::OutOfRange { index: 7, size: 0 };
        let copy = err;
        assert_eq!(err, copy);
        assert_ne!(err, FixedArrayError::OutOfRange { index: 7, size: 1 });
    }
}
