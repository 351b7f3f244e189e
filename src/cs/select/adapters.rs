//! Select-driven partitioning: pick pivot values by rank, then partition around them.
//!
//! These are the hooks a quicksort driver uses when it wants pivots with a
//! guaranteed split instead of the classic "last element" pivot.

use log::debug;
use rand::Rng;

use crate::cs::select::counters::Counters;
use crate::cs::select::median_of_medians::{deterministic_select_with_scratch, MedianScratch};
use crate::cs::select::partition::{dual_partition_with_pivots, partition_with_pivot};
use crate::cs::select::randomized_quickselect::randomized_select;
use crate::cs::select::{check_group_size, check_range, SelectConfig};
use crate::error::{Error, Result};

/// Which selection algorithm supplies the pivot values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Randomized,
    MedianOfMedians(SelectConfig),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::MedianOfMedians(SelectConfig::default())
    }
}

impl Selection {
    #[allow(clippy::too_many_arguments)]
    fn select<T, R>(
        self,
        arr: &mut [T],
        low: usize,
        high: usize,
        k: usize,
        rng: &mut R,
        scratch: &mut MedianScratch<T>,
        counters: &mut Counters,
    ) -> Result<T>
    where
        T: Ord + Clone,
        R: Rng + ?Sized,
    {
        match self {
            Selection::Randomized => randomized_select(arr, low, high, k, rng, counters),
            Selection::MedianOfMedians(config) => {
                deterministic_select_with_scratch(arr, low, high, k, config, scratch, counters)
            }
        }
    }
}

/// How the range is split once the pivot values are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartitionScheme {
    /// One pivot at the midpoint rank; two regions.
    #[default]
    Lomuto,
    /// Pivots at the one-third and two-thirds ranks; three regions.
    DualPivot,
}

/// Final pivot positions produced by [`select_partition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundaries {
    Single(usize),
    Dual(usize, usize),
}

impl Boundaries {
    /// Non-empty ranges of `[low, high]` left on either side of the pivots.
    pub fn subranges(&self, low: usize, high: usize) -> Vec<(usize, usize)> {
        let mut ranges = Vec::with_capacity(3);
        match *self {
            Boundaries::Single(p) => {
                if p > low {
                    ranges.push((low, p - 1));
                }
                if p < high {
                    ranges.push((p + 1, high));
                }
            }
            Boundaries::Dual(lt, gt) => {
                if lt > low {
                    ranges.push((low, lt - 1));
                }
                if gt > lt + 1 {
                    ranges.push((lt + 1, gt - 1));
                }
                if gt < high {
                    ranges.push((gt + 1, high));
                }
            }
        }
        ranges
    }
}

pub(crate) fn midpoint_rank(n: usize) -> usize {
    (n / 2).max(1)
}

/// Ranks of the two pivots within a range of `n >= 2` elements; always `k1 < k2`.
pub(crate) fn dual_ranks(n: usize) -> (usize, usize) {
    let k1 = (n / 3).max(1);
    let k2 = (2 * n / 3).max(k1 + 1).min(n);
    (k1, k2)
}

/// Selects pivot value(s) from `[low, high]` and partitions the range around them.
///
/// For [`PartitionScheme::Lomuto`] the pivot is the element of rank `n / 2`
/// (at least 1); for [`PartitionScheme::DualPivot`] the pivots are the elements
/// of ranks `n / 3` and `2n / 3`, nudged apart so they are distinct ranks.
/// Every comparison and swap, including those spent selecting, is recorded in
/// `counters`. `rng` is only drawn from by [`Selection::Randomized`].
///
/// # Errors
///
/// Returns an error if the range is empty or out of bounds, the group size is
/// below 2, or a dual-pivot partition is requested on fewer than two elements.
pub fn select_partition<T, R>(
    arr: &mut [T],
    low: usize,
    high: usize,
    scheme: PartitionScheme,
    selection: Selection,
    rng: &mut R,
    counters: &mut Counters,
) -> Result<Boundaries>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    let n = check_range(arr.len(), low, high)?;
    if let Selection::MedianOfMedians(config) = selection {
        check_group_size(config.group_size)?;
    }
    let mut scratch = MedianScratch::new();

    let boundaries = match scheme {
        PartitionScheme::Lomuto => {
            let k = midpoint_rank(n);
            let pivot = selection.select(arr, low, high, k, rng, &mut scratch, counters)?;
            Boundaries::Single(partition_with_pivot(arr, low, high, &pivot, counters)?)
        }
        PartitionScheme::DualPivot => {
            if n < 2 {
                return Err(Error::RangeTooSmall { low, high, min: 2 });
            }
            let (k1, k2) = dual_ranks(n);
            let p1 = selection.select(arr, low, high, k1, rng, &mut scratch, counters)?;
            let p2 = selection.select(arr, low, high, k2, rng, &mut scratch, counters)?;
            let (lt, gt) = dual_partition_with_pivots(arr, low, high, &p1, &p2, counters)?;
            Boundaries::Dual(lt, gt)
        }
    };
    debug!("{scheme:?} partition of [{low}, {high}] via {selection:?} -> {boundaries:?}");
    Ok(boundaries)
}
