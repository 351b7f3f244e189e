use log::{debug, trace};
use rand::Rng;

use crate::cs::select::counters::Counters;
use crate::cs::select::partition::lomuto_partition;
use crate::cs::select::{check_range, check_rank};
use crate::error::Result;

/// Returns the `k`-th smallest element (1-based) of the inclusive range `[low, high]`.
///
/// Each step moves a uniformly random element of the current range to its end,
/// runs a Lomuto partition around it, and continues into the single side that
/// holds rank `k`. Expected linear time; an unlucky sequence of pivots can
/// degrade to quadratic time and linear recursion depth.
///
/// The range is left partially reordered. A single-element range returns
/// immediately without comparing or swapping anything.
///
/// # Errors
///
/// Returns an error if the range is empty or out of bounds, or if `k` is not in
/// `1..=high - low + 1`.
pub fn randomized_select<T, R>(
    arr: &mut [T],
    low: usize,
    high: usize,
    k: usize,
    rng: &mut R,
    counters: &mut Counters,
) -> Result<T>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    let len = check_range(arr.len(), low, high)?;
    check_rank(k, len)?;
    let kth = select(arr, low, high, k, rng, counters);
    debug!("randomized select [{low}, {high}] k={k}: {counters}");
    Ok(kth)
}

/// [`randomized_select`] drawing pivots from the thread-local generator.
pub fn randomized_select_thread_rng<T: Ord + Clone>(
    arr: &mut [T],
    low: usize,
    high: usize,
    k: usize,
    counters: &mut Counters,
) -> Result<T> {
    randomized_select(arr, low, high, k, &mut rand::thread_rng(), counters)
}

fn select<T, R>(
    arr: &mut [T],
    low: usize,
    high: usize,
    k: usize,
    rng: &mut R,
    counters: &mut Counters,
) -> T
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    if low == high {
        return arr[low].clone();
    }
    let pivot_index = rng.gen_range(low..=high);
    counters.swap(arr, pivot_index, high);
    let q = lomuto_partition(arr, low, high, counters);
    let left_size = q - low + 1;
    trace!("randomized select [{low}, {high}] k={k} pivot at {q}");
    if k == left_size {
        arr[q].clone()
    } else if k < left_size {
        select(arr, low, q - 1, k, rng, counters)
    } else {
        select(arr, q + 1, high, k - left_size, rng, counters)
    }
}
