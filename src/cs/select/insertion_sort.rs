use crate::cs::select::counters::Counters;

/// Sorts `[low, high]` in place with adjacent swaps, one per inversion.
pub fn insertion_sort<T: Ord>(arr: &mut [T], low: usize, high: usize, counters: &mut Counters) {
    if low >= high {
        return;
    }
    for i in low + 1..=high {
        let mut j = i;
        while j > low && !counters.compare(&arr[j - 1], &arr[j]) {
            counters.swap(arr, j - 1, j);
            j -= 1;
        }
    }
}
