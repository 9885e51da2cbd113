//! Status codes shared by every fallible operation.

use thiserror::Error;

/// Errors reported by fallible `numkit` operations.
///
/// This is a closed set: every fallible operation in the crate fails with exactly one of these.
/// Success is represented by [`Ok`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// A required input or output pointer is absent.
    ///
    /// Only reachable through the C ABI in [`crate::ffi`]; Rust references cannot be null.
    #[error("null pointer argument")]
    NullPointer,

    /// Dimensions or element counts conflict, or a vector that must have a non-zero magnitude
    /// does not.
    #[error("invalid size")]
    InvalidSize,

    /// A positional argument lies outside the valid range.
    #[error("index out of range")]
    InvalidIndex,

    /// A requested capacity is zero.
    #[error("invalid capacity")]
    InvalidCapacity,

    /// The operation requires at least one element, but the structure is empty.
    #[error("structure is empty")]
    EmptyStructure,

    /// The allocator could not provide a new buffer.
    #[error("allocation failed")]
    AllocationFailure,

    /// The allocator could not resize an existing buffer. The buffer is left untouched.
    #[error("reallocation failed")]
    ReallocationFailure,

    /// An inverse was requested of a matrix whose determinant is within epsilon of zero.
    #[error("matrix is singular")]
    SingularMatrix,

    /// Operands carry incompatible runtime type tags.
    #[error("incompatible types")]
    IncompatibleTypes,
}

/// Result type for `numkit` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// C-compatible status code.
///
/// This is the integer form of [`Error`], extended with [`Status::Success`]. It is returned by the
/// functions in [`crate::ffi`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success = 0,
    NullPointer = 1,
    InvalidSize = 2,
    InvalidIndex = 3,
    InvalidCapacity = 4,
    EmptyStructure = 5,
    AllocationFailure = 6,
    ReallocationFailure = 7,
    SingularMatrix = 8,
    IncompatibleTypes = 9,
}

impl Status {
    /// Returns `true` for [`Status::Success`].
    #[inline]
    pub fn is_success(self) -> bool {
        self == Status::Success
    }

    /// Converts this status back into a [`Result`].
    pub fn into_result(self) -> Result<()> {
        let err = match self {
            Status::Success => return Ok(()),
            Status::NullPointer => Error::NullPointer,
            Status::InvalidSize => Error::InvalidSize,
            Status::InvalidIndex => Error::InvalidIndex,
            Status::InvalidCapacity => Error::InvalidCapacity,
            Status::EmptyStructure => Error::EmptyStructure,
            Status::AllocationFailure => Error::AllocationFailure,
            Status::ReallocationFailure => Error::ReallocationFailure,
            Status::SingularMatrix => Error::SingularMatrix,
            Status::IncompatibleTypes => Error::IncompatibleTypes,
        };
        Err(err)
    }
}

impl From<Error> for Status {
    fn from(err: Error) -> Self {
        match err {
            Error::NullPointer => Status::NullPointer,
            Error::InvalidSize => Status::InvalidSize,
            Error::InvalidIndex => Status::InvalidIndex,
            Error::InvalidCapacity => Status::InvalidCapacity,
            Error::EmptyStructure => Status::EmptyStructure,
            Error::AllocationFailure => Status::AllocationFailure,
            Error::ReallocationFailure => Status::ReallocationFailure,
            Error::SingularMatrix => Status::SingularMatrix,
            Error::IncompatibleTypes => Status::IncompatibleTypes,
        }
    }
}

impl<T> From<Result<T>> for Status {
    fn from(res: Result<T>) -> Self {
        match res {
            Ok(_) => Status::Success,
            Err(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Error; 9] = [
        Error::NullPointer,
        Error::InvalidSize,
        Error::InvalidIndex,
        Error::InvalidCapacity,
        Error::EmptyStructure,
        Error::AllocationFailure,
        Error::ReallocationFailure,
        Error::SingularMatrix,
        Error::IncompatibleTypes,
    ];

    #[test]
    fn status_roundtrip() {
        assert_eq!(Status::from(Ok::<_, Error>(5)), Status::Success);
        assert_eq!(Status::Success.into_result(), Ok(()));
        for err in ALL {
            let status = Status::from(err);
            assert!(!status.is_success());
            assert_eq!(status.into_result(), Err(err));
        }
    }

    #[test]
    fn codes_are_distinct() {
        let mut codes = ALL.map(|e| Status::from(e) as i32).to_vec();
        codes.push(Status::Success as i32);
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), ALL.len() + 1);
        assert_eq!(Status::Success as i32, 0);
    }

    #[test]
    fn display() {
        assert_eq!(Error::SingularMatrix.to_string(), "matrix is singular");
        assert_eq!(Error::InvalidCapacity.to_string(), "invalid capacity");
    }
}
