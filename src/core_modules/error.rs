// THEORY:
// One error type for the whole crate. Every precondition that would otherwise be a
// silent out-of-bounds read, a NaN, or a process abort is named here so callers can
// match on it and decide what to do.

/// Result alias used by every fallible operation in the crate.
pub type MathResult<T> = Result<T, MathError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// The operation needs at least one element.
    EmptyInput,
    /// Two sequences that must pair up element-wise have different lengths.
    DimensionMismatch { left: usize, right: usize },
    /// Axis selector was not one of `X`, `x`, `Y`, `y`.
    InvalidAxis(String),
    /// 4-channel data whose length is not a multiple of 4.
    MisalignedChannelData { len: usize },
    IndexOutOfRange { index: usize, len: usize },
    /// A stride of zero selects nothing meaningful.
    InvalidStep,
    /// Bucketing needs at least one bucket.
    InvalidBucketCount(usize),
}

impl std::fmt::Display for MathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MathError::EmptyInput => write!(f, "input sequence is empty"),
            MathError::DimensionMismatch { left, right } => {
                write!(f, "dimension mismatch: left={left} right={right}")
            }
            MathError::InvalidAxis(axis) => {
                write!(f, "invalid axis {axis:?}: expected 'X' or 'Y'")
            }
            MathError::MisalignedChannelData { len } => {
                write!(f, "4-channel data length {len} is not a multiple of 4")
            }
            MathError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            MathError::InvalidStep => write!(f, "step must be greater than zero"),
            MathError::InvalidBucketCount(n) => write!(f, "bucket count must be positive, got {n}"),
        }
    }
}

impl std::error::Error for MathError {}
