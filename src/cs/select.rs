pub mod adapters;
pub mod counters;
pub mod insertion_sort;
pub mod median_of_medians;
pub mod partition;
pub mod randomized_quickselect;


use crate::error::{Error, Result};

/// Group size used by median-of-medians unless configured otherwise.
pub const DEFAULT_GROUP_SIZE: usize = 5;

/// Configuration for deterministic (median-of-medians) selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectConfig {
    /// Number of elements per group whose median feeds the pivot search.
    pub group_size: usize,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            group_size: DEFAULT_GROUP_SIZE,
        }
    }
}

impl SelectConfig {
    /// Builds a configuration, rejecting group sizes that cannot shrink the problem.
    pub fn with_group_size(group_size: usize) -> Result<Self> {
        check_group_size(group_size)?;
        Ok(Self { group_size })
    }
}

/// Validates a non-empty inclusive range `[low, high]` over a sequence of `len`
/// elements and returns its size.
pub(crate) fn check_range(len: usize, low: usize, high: usize) -> Result<usize> {
    if low > high {
        return Err(Error::EmptyRange { low, high });
    }
    if high >= len {
        return Err(Error::RangeOutOfBounds { high, len });
    }
    Ok(high - low + 1)
}

pub(crate) fn check_rank(k: usize, len: usize) -> Result<()> {
    if k == 0 || k > len {
        return Err(Error::InvalidRank { k, len });
    }
    Ok(())
}

pub(crate) fn check_group_size(group_size: usize) -> Result<()> {
    if group_size < 2 {
        return Err(Error::InvalidGroupSize(group_size));
    }
    Ok(())
}

pub use adapters::{select_partition, Boundaries, PartitionScheme, Selection};
pub use counters::Counters;
pub use insertion_sort::insertion_sort;
pub use median_of_medians::{
    deterministic_select, deterministic_select_with_scratch, scratch_capacity, MedianScratch,
};
pub use partition::{dual_partition_with_pivots, lomuto_partition, partition_with_pivot};
pub use randomized_quickselect::{randomized_select, randomized_select_thread_rng};
