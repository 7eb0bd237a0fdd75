use serde::Serialize;

use super::{leading_nibbles, NIBBLE_SAMPLE};
use crate::error::KemVizError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    pub value: u8,
    pub count: usize,
}

/// Nibble occurrence counts, keyed in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    fn record(&mut self, value: u8) {
        match self.entries.iter_mut().find(|e| e.value == value) {
            Some(entry) => entry.count += 1,
            None => self.entries.push(FrequencyEntry { value, count: 1 }),
        }
    }

    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    pub fn get(&self, value: u8) -> Option<usize> {
        self.entries.iter().find(|e| e.value == value).map(|e| e.count)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Counts each nibble value among the first 64 hex digits of `secret`.
pub fn nibble_frequencies(secret: &str) -> Result<FrequencyTable, KemVizError> {
    let mut table = FrequencyTable::default();
    for value in leading_nibbles(secret, NIBBLE_SAMPLE)? {
        table.record(value);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_keep_first_seen_order() {
        let secret = format!("f0f0a{}", "0".repeat(59));
        let table = nibble_frequencies(&secret).expect("valid secret");
        let order: Vec<u8> = table.entries().iter().map(|e| e.value).collect();
        assert_eq!(order, vec![15, 0, 10]);
        assert_eq!(table.get(15), Some(2));
        assert_eq!(table.get(0), Some(61));
        assert_eq!(table.get(10), Some(1));
        assert_eq!(table.get(3), None);
    }

    #[test]
    fn counts_sum_to_sample_size() {
        let secret = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";
        let table = nibble_frequencies(secret).expect("valid secret");
        assert_eq!(table.total(), 64);
        assert!(table.len() <= 16);
    }
}
