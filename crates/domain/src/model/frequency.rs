use std::fmt;

use hashbrown::HashMap;
use microbench_shared_kernel::{DistinctCount, OccurrenceCount};
use serde::Serialize;

/// Final result of a counting run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrequencyReport {
    pub distinct: DistinctCount,
    pub max: OccurrenceCount,
}

impl fmt::Display for FrequencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.distinct, self.max)
    }
}

/// Mapping from record bytes to occurrence count, plus the running maximum.
///
/// The table only grows. The running maximum starts at one, so an empty table
/// reports a maximum of one.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: HashMap<Box<[u8]>, OccurrenceCount>,
    max: OccurrenceCount,
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { counts: HashMap::with_capacity(capacity), max: OccurrenceCount::ONE }
    }

    /// Records one occurrence of `record` and returns its updated count.
    pub fn observe(&mut self, record: &[u8]) -> OccurrenceCount {
        let count = if let Some(slot) = self.counts.get_mut(record) {
            *slot = slot.incremented();
            *slot
        } else {
            self.counts.insert(Box::from(record), OccurrenceCount::ONE);
            OccurrenceCount::ONE
        };

        if count > self.max {
            self.max = count;
        }
        count
    }

    /// Count for `record`, zero when it has never been observed.
    pub fn count_of(&self, record: &[u8]) -> OccurrenceCount {
        self.counts.get(record).copied().unwrap_or_default()
    }

    pub fn distinct(&self) -> DistinctCount {
        DistinctCount::new(self.counts.len())
    }

    pub fn max_count(&self) -> OccurrenceCount {
        self.max
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn report(&self) -> FrequencyReport {
        FrequencyReport { distinct: self.distinct(), max: self.max }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u8], OccurrenceCount)> {
        self.counts.iter().map(|(record, count)| (record.as_ref(), *count))
    }

    /// The `n` most frequent records, highest count first.
    ///
    /// Equal counts are ordered by record bytes so the listing is stable
    /// regardless of hash iteration order.
    pub fn top(&self, n: usize) -> Vec<(&[u8], OccurrenceCount)> {
        if n == 0 {
            return Vec::new();
        }

        let mut entries: Vec<_> = self.iter().collect();
        let by_rank = |a: &(&[u8], OccurrenceCount), b: &(&[u8], OccurrenceCount)| {
            b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
        };

        if n < entries.len() {
            entries.select_nth_unstable_by(n - 1, by_rank);
            entries.truncate(n);
        }
        entries.sort_unstable_by(by_rank);
        entries
    }
}
