use thiserror::Error;

/// Errors from the checked vector operations.
///
/// The unchecked operations never fail; degenerate input flows through as
/// infinities or NaN.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,

    #[error("cannot normalize a vector with non-finite length")]
    NonFinite,
}

pub type VectorResult<T> = Result<T, VectorError>;
