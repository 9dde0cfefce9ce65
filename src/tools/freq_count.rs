use log::debug;

/// Number of distinct byte symbols.
pub const ALPHABET: usize = 256;

/// Occurrence count of each distinct symbol in an input sequence.
///
/// Backed by one slot per byte value. Only symbols with a non-zero count are "present", and
/// iteration always runs in ascending symbol order.
#[derive(Clone, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: Vec<u64>,
}

impl FrequencyMap {
    /// An empty map: no symbol present.
    pub fn new() -> Self {
        Self {
            counts: vec![0; ALPHABET],
        }
    }

    /// Count of `symbol`, or 0 if it never occurred.
    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Add `count` occurrences of `symbol`. The count saturates at `u64::MAX`.
    pub fn add(&mut self, symbol: u8, count: u64) {
        let slot = &mut self.counts[symbol as usize];
        *slot = slot.saturating_add(count);
    }

    /// Number of distinct symbols present.
    pub fn len(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Sum of all counts, i.e. the length of the counted input.
    pub fn total(&self) -> u64 {
        self.counts.iter().fold(0_u64, |acc, &c| acc.saturating_add(c))
    }

    /// Sum of all counts, or None if it does not fit in a u64.
    pub fn checked_total(&self) -> Option<u64> {
        self.counts
            .iter()
            .try_fold(0_u64, |acc, &c| acc.checked_add(c))
    }

    /// (symbol, count) for each present symbol, ascending by symbol.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(sym, &c)| (sym as u8, c))
    }

    /// Present symbols, ascending.
    pub fn symbols(&self) -> impl Iterator<Item = u8> + '_ {
        self.iter().map(|(sym, _)| sym)
    }
}

impl Default for FrequencyMap {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FrequencyMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl FromIterator<(u8, u64)> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = (u8, u64)>>(iter: I) -> Self {
        let mut map = FrequencyMap::new();
        iter.into_iter().for_each(|(sym, c)| map.add(sym, c));
        map
    }
}

/// Returns a frequency count of the input data.
pub fn freqs(data: &[u8]) -> FrequencyMap {
    let mut map = FrequencyMap::new();
    data.iter().for_each(|&el| map.counts[el as usize] += 1);
    debug!(
        "Counted {} symbols, {} distinct.",
        data.len(),
        map.len()
    );
    map
}
