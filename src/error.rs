use thiserror::Error;

/// Precondition violations raised by the selection and partitioning routines.
///
/// Every variant is reported before the sequence or the counters are touched;
/// nothing is clamped into range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("precondition violated: empty range [{low}, {high}]")]
    EmptyRange { low: usize, high: usize },

    #[error("precondition violated: range end {high} is out of bounds for length {len}")]
    RangeOutOfBounds { high: usize, len: usize },

    #[error("precondition violated: rank {k} is outside 1..={len}")]
    InvalidRank { k: usize, len: usize },

    #[error("precondition violated: group size {0} must be at least 2")]
    InvalidGroupSize(usize),

    #[error("precondition violated: range [{low}, {high}] needs at least {min} elements")]
    RangeTooSmall { low: usize, high: usize, min: usize },

    #[error("precondition violated: pivot value does not occur in the range")]
    PivotNotFound,
}

pub type Result<T> = std::result::Result<T, Error>;
