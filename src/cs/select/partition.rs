use log::trace;

use crate::cs::select::check_range;
use crate::cs::select::counters::Counters;
use crate::error::{Error, Result};

/// Lomuto partition of `[low, high]` around the value at `high`.
///
/// Afterwards every element in `[low, q)` is `<=` the pivot, the pivot sits at
/// `q`, and every element in `(q, high]` is greater. Returns `q`.
/// The caller guarantees `low <= high < arr.len()`.
pub fn lomuto_partition<T: Ord + Clone>(
    arr: &mut [T],
    low: usize,
    high: usize,
    counters: &mut Counters,
) -> usize {
    let pivot = arr[high].clone();
    let mut i = low;
    for j in low..high {
        if counters.compare(&arr[j], &pivot) {
            counters.swap(arr, i, j);
            i += 1;
        }
    }
    counters.swap(arr, i, high);
    trace!("lomuto [{low}, {high}] -> {i}");
    i
}

/// Moves every element of `[low, p)` equal to the pivot at `p` next to it.
///
/// Expects the state left by [`lomuto_partition`]: all of `[low, p)` is `<=`
/// the pivot. Returns `e` such that `[e, p]` holds only pivot-equal values and
/// `[low, e)` only smaller ones.
pub(crate) fn gather_equal_left<T: Ord + Clone>(
    arr: &mut [T],
    low: usize,
    p: usize,
    counters: &mut Counters,
) -> usize {
    let pivot = arr[p].clone();
    let mut e = p;
    for j in (low..p).rev() {
        if counters.compare(&pivot, &arr[j]) {
            e -= 1;
            counters.swap(arr, j, e);
        }
    }
    e
}

/// First index in `[low, high]` holding `value`, scanning left to right.
///
/// Equality here only locates a slot; it is not an ordering decision and is
/// not counted.
pub(crate) fn locate<T: PartialEq>(arr: &[T], low: usize, high: usize, value: &T) -> Option<usize> {
    arr[low..=high]
        .iter()
        .position(|x| x == value)
        .map(|offset| low + offset)
}

fn locate_except<T: PartialEq>(
    arr: &[T],
    low: usize,
    high: usize,
    value: &T,
    skip: usize,
) -> Option<usize> {
    (low..=high).find(|&i| i != skip && arr[i] == *value)
}

/// Moves one occurrence of `pivot` to `high` and partitions `[low, high]` around it.
///
/// Returns the final pivot index `p`: `[low, p)` holds elements `<= pivot` and
/// `(p, high]` holds elements `> pivot`. When the value occurs several times any
/// occurrence may end up at `p`.
pub fn partition_with_pivot<T: Ord + Clone>(
    arr: &mut [T],
    low: usize,
    high: usize,
    pivot: &T,
    counters: &mut Counters,
) -> Result<usize> {
    check_range(arr.len(), low, high)?;
    let at = locate(arr, low, high, pivot).ok_or(Error::PivotNotFound)?;
    counters.swap(arr, at, high);
    Ok(lomuto_partition(arr, low, high, counters))
}

/// Three-way partition of `[low, high]` around two pivot values.
///
/// One occurrence of each pivot is moved to the ends of the range; if the
/// value at `low` then orders after the value at `high` they are exchanged, so
/// the effective pivots satisfy `p1 <= p2`. On return `(lt, gt)`:
///
/// * `arr[lt] == p1`, `arr[gt] == p2`, `lt < gt`
/// * every element in `[low, lt)` is `< p1`
/// * every element in `(lt, gt)` lies in `[p1, p2]`
/// * every element in `(gt, high]` is `> p2`
///
/// The range must hold at least two elements and the two pivots must occupy
/// distinct slots (equal values need two occurrences).
pub fn dual_partition_with_pivots<T: Ord + Clone>(
    arr: &mut [T],
    low: usize,
    high: usize,
    low_pivot: &T,
    high_pivot: &T,
    counters: &mut Counters,
) -> Result<(usize, usize)> {
    if check_range(arr.len(), low, high)? < 2 {
        return Err(Error::RangeTooSmall { low, high, min: 2 });
    }
    let pl = locate(arr, low, high, low_pivot).ok_or(Error::PivotNotFound)?;
    let mut ph = locate_except(arr, low, high, high_pivot, pl).ok_or(Error::PivotNotFound)?;

    counters.swap(arr, low, pl);
    // The high pivot may have been the element just displaced from `low`.
    if ph == low {
        ph = pl;
    }
    counters.swap(arr, high, ph);

    if !counters.compare(&arr[low], &arr[high]) {
        counters.swap(arr, low, high);
    }
    let p1 = arr[low].clone();
    let p2 = arr[high].clone();

    let mut left = low + 1;
    let mut right = high - 1;
    let mut i = left;
    while i <= right {
        if !counters.compare(&p1, &arr[i]) {
            counters.swap(arr, i, left);
            left += 1;
            i += 1;
        } else if !counters.compare(&arr[i], &p2) {
            counters.swap(arr, i, right);
            right -= 1;
        } else {
            i += 1;
        }
    }

    let lt = left - 1;
    let gt = right + 1;
    counters.swap(arr, low, lt);
    counters.swap(arr, high, gt);
    trace!("dual partition [{low}, {high}] -> ({lt}, {gt})");
    Ok((lt, gt))
}
