use std::fmt;

/// Comparison and exchange tallies for one measurement.
///
/// Every ordering decision made by the selection routines goes through
/// [`Counters::compare`] and every reordering through [`Counters::swap`], so the
/// totals are exact. Counters never reset themselves; call [`Counters::reset`]
/// between independent trials. Give each concurrent worker its own instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    comparisons: u64,
    swaps: u64,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `a <= b`, counting one comparison regardless of outcome.
    #[inline]
    pub fn compare<T: Ord + ?Sized>(&mut self, a: &T, b: &T) -> bool {
        self.comparisons += 1;
        a <= b
    }

    /// Exchanges `seq[i]` and `seq[j]`, counting one swap even when `i == j`.
    #[inline]
    pub fn swap<T>(&mut self, seq: &mut [T], i: usize, j: usize) {
        seq.swap(i, j);
        self.swaps += 1;
    }

    pub fn reset(&mut self) {
        self.comparisons = 0;
        self.swaps = 0;
    }

    /// `(comparisons, swaps)`
    pub fn read(&self) -> (u64, u64) {
        (self.comparisons, self.swaps)
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn swaps(&self) -> u64 {
        self.swaps
    }
}

impl fmt::Display for Counters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "comparisons={} swaps={}", self.comparisons, self.swaps)
    }
}
