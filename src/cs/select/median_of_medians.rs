use log::{debug, trace};

use crate::cs::select::counters::Counters;
use crate::cs::select::insertion_sort::insertion_sort;
use crate::cs::select::partition::{gather_equal_left, locate, lomuto_partition};
use crate::cs::select::{check_group_size, check_range, check_rank, SelectConfig};
use crate::error::{Error, Result};

/// Reusable storage for the group medians of every recursion level.
///
/// One buffer of [`scratch_capacity`] slots serves a whole selection: each level
/// carves its medians off the front and hands the rest down, so nothing is
/// allocated once the buffer has grown to fit the largest range seen.
#[derive(Debug, Clone, Default)]
pub struct MedianScratch<T> {
    buf: Vec<T>,
}

impl<T: Clone> MedianScratch<T> {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    fn ensure(&mut self, len: usize, fill: &T) -> &mut [T] {
        if self.buf.len() < len {
            self.buf.resize(len, fill.clone());
        }
        &mut self.buf[..len]
    }
}

/// Total medians slots needed to select from `n` elements with groups of `group_size`.
///
/// This is the length of the chain `ceil(n / g)`, `ceil(ceil(n / g) / g)`, ...
/// summed until a level fits in a single group.
pub fn scratch_capacity(n: usize, group_size: usize) -> usize {
    if group_size < 2 {
        return 0;
    }
    let mut total = 0;
    let mut m = n;
    while m > group_size {
        m = m.div_ceil(group_size);
        total += m;
    }
    total
}

/// Returns the `k`-th smallest element (1-based) of `[low, high]` in worst-case linear time.
///
/// The range is split into consecutive groups of `config.group_size` (the last one
/// may be shorter). Each group is insertion-sorted and its middle element
/// collected; the upper median of those medians becomes the pivot, which
/// discards a constant fraction of the range on every step.
///
/// The range is left partially reordered.
///
/// # Errors
///
/// Returns an error if the range is empty or out of bounds, `k` is not in
/// `1..=high - low + 1`, or the group size is below 2.
pub fn deterministic_select<T: Ord + Clone>(
    arr: &mut [T],
    low: usize,
    high: usize,
    k: usize,
    config: SelectConfig,
    counters: &mut Counters,
) -> Result<T> {
    let mut scratch = MedianScratch::new();
    deterministic_select_with_scratch(arr, low, high, k, config, &mut scratch, counters)
}

/// [`deterministic_select`] reusing a caller-owned medians buffer.
pub fn deterministic_select_with_scratch<T: Ord + Clone>(
    arr: &mut [T],
    low: usize,
    high: usize,
    k: usize,
    config: SelectConfig,
    scratch: &mut MedianScratch<T>,
    counters: &mut Counters,
) -> Result<T> {
    let len = check_range(arr.len(), low, high)?;
    check_rank(k, len)?;
    check_group_size(config.group_size)?;

    let medians = scratch.ensure(scratch_capacity(len, config.group_size), &arr[low]);
    let kth = select(arr, low, high, k, config.group_size, medians, counters)?;
    debug!(
        "deterministic select [{low}, {high}] k={k} group_size={}: {counters}",
        config.group_size
    );
    Ok(kth)
}

fn select<T: Ord + Clone>(
    arr: &mut [T],
    low: usize,
    high: usize,
    k: usize,
    group_size: usize,
    scratch: &mut [T],
    counters: &mut Counters,
) -> Result<T> {
    let n = high - low + 1;
    if n <= group_size {
        insertion_sort(arr, low, high, counters);
        return Ok(arr[low + k - 1].clone());
    }

    let groups = n.div_ceil(group_size);
    let (medians, rest) = scratch.split_at_mut(groups);
    for (slot, start) in medians.iter_mut().zip((low..=high).step_by(group_size)) {
        let end = (start + group_size - 1).min(high);
        insertion_sort(arr, start, end, counters);
        slot.clone_from(&arr[start + (end - start) / 2]);
    }

    let pivot = select(medians, 0, groups - 1, groups / 2 + 1, group_size, rest, counters)?;
    let at = locate(arr, low, high, &pivot).ok_or(Error::PivotNotFound)?;
    counters.swap(arr, at, high);
    let p = lomuto_partition(arr, low, high, counters);
    let left_size = p - low + 1;
    trace!("deterministic select [{low}, {high}] k={k} groups={groups} pivot at {p}");

    if k == left_size {
        Ok(arr[p].clone())
    } else if k < left_size {
        // Pivot-equal values all landed left; pull them into one block so a
        // range of repeats is settled here instead of one element per level.
        let e = gather_equal_left(arr, low, p, counters);
        if k > e - low {
            Ok(arr[p].clone())
        } else {
            select(arr, low, e - 1, k, group_size, scratch, counters)
        }
    } else {
        select(arr, p + 1, high, k - left_size, group_size, scratch, counters)
    }
}
