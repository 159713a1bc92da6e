//! Byte frequency analysis.
//!
//! The first stage of the pipeline: count how often each of the 256 byte
//! values occurs in an input buffer. Every byte counts, including `0`;
//! there is no terminator convention.

/// Number of distinct symbols in the byte alphabet.
pub const ALPHABET_SIZE: usize = 256;

/// Occurrence counts for every byte value.
///
/// # Invariants
/// - `total()` equals the number of bytes scanned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
}

impl FrequencyTable {
    /// Create an all-zero table.
    pub fn new() -> Self {
        Self {
            counts: [0; ALPHABET_SIZE],
        }
    }

    /// Wrap counts gathered elsewhere.
    pub fn from_counts(counts: [u64; ALPHABET_SIZE]) -> Self {
        Self { counts }
    }

    /// Count every byte of `bytes`. An empty slice yields an all-zero table.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut table = Self::new();
        for &byte in bytes {
            table.counts[byte as usize] += 1;
        }
        table
    }

    /// Occurrences of `symbol`.
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Raw counts, indexed by byte value.
    pub fn counts(&self) -> &[u64; ALPHABET_SIZE] {
        &self.counts
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of byte values with a non-zero count.
    pub fn used_symbols(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// `(symbol, count)` for every used symbol, ascending by byte value.
    pub fn iter_used(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }

    /// True when no byte was counted.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a frequency table over `bytes`.
pub fn build_frequency_table(bytes: &[u8]) -> FrequencyTable {
    FrequencyTable::from_bytes(bytes)
}

/// Total number of bytes counted by `table`.
pub fn total_count(table: &FrequencyTable) -> u64 {
    table.total()
}

/// Number of distinct byte values present in `table`.
pub fn count_used_symbols(table: &FrequencyTable) -> usize {
    table.used_symbols()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let table = build_frequency_table(b"");
        assert!(table.is_empty());
        assert_eq!(total_count(&table), 0);
        assert_eq!(count_used_symbols(&table), 0);
        assert_eq!(table.iter_used().count(), 0);
    }

    #[test]
    fn test_counts_sentence() {
        let table = build_frequency_table(b"thomas kielstra taking W's on assigments as always");

        assert_eq!(table.count(b' '), 7);
        assert_eq!(table.count(b'\''), 1);
        assert_eq!(table.count(b'W'), 1);
        assert_eq!(table.count(b'a'), 7);
        assert_eq!(table.count(b'e'), 2);
        assert_eq!(table.count(b'i'), 3);
        assert_eq!(table.count(b'n'), 3);
        assert_eq!(table.count(b's'), 8);
        assert_eq!(table.count(b't'), 4);
        assert_eq!(table.count(b'y'), 1);
        assert_eq!(table.count(b'z'), 0);

        assert_eq!(total_count(&table), 50);
        assert_eq!(count_used_symbols(&table), 18);
    }

    #[test]
    fn test_used_symbols() {
        assert_eq!(count_used_symbols(&build_frequency_table(b"bombom")), 3);
        assert_eq!(count_used_symbols(&build_frequency_table(b"bomyam")), 5);
        assert_eq!(count_used_symbols(&build_frequency_table(b"~")), 1);
        assert_eq!(build_frequency_table(b"bomyam").count(b'm'), 2);
    }

    #[test]
    fn test_zero_byte_is_a_symbol() {
        let table = build_frequency_table(&[0, 0, 7]);
        assert_eq!(table.count(0), 2);
        assert_eq!(table.total(), 3);
        assert_eq!(table.iter_used().collect::<Vec<_>>(), vec![(0, 2), (7, 1)]);
    }

    #[test]
    fn test_full_alphabet() {
        let bytes: Vec<u8> = (0..=255).collect();
        let table = build_frequency_table(&bytes);
        assert_eq!(table.used_symbols(), ALPHABET_SIZE);
        assert_eq!(table.total(), 256);
    }
}
